use serde::{Deserialize, Serialize};

use crate::screen::screen_model::Platform;

// ============================================================================
// Assembly report — per-screen link resolution breakdown
// ============================================================================

/// Link resolution outcome for one embedded screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenLinkReport {
    /// Screen display name
    pub name: String,

    /// Navigation slug
    pub slug: String,

    /// Slugs this screen navigates to
    pub resolved: Vec<String>,

    /// Screen-like targets with no matching screen (left inert)
    pub unresolved: Vec<String>,

    /// Scan fallback reason, when the fragment passed through raw
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// Aggregated report for one assembly run.
///
/// Built alongside the document by `assemble_with_report`. Consumed by the
/// console formatter, the JSON output of `inspect`, and the trace logger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyReport {
    /// Project display name
    pub project_name: String,

    /// Platform the chrome was emitted for
    pub platform: Platform,

    /// Screens embedded, post de-duplication
    pub screen_count: usize,

    /// Name of the entry screen, if any screens exist
    pub entry_screen: Option<String>,

    /// Names skipped under the first-wins duplicate policy
    pub duplicates_skipped: Vec<String>,

    /// Per-screen breakdown, in presentation order
    pub screens: Vec<ScreenLinkReport>,

    /// SHA-1 of the emitted document (reproducibility check)
    pub document_fingerprint: String,
}

impl AssemblyReport {
    /// Total references rewritten across all screens.
    pub fn links_resolved(&self) -> usize {
        self.screens.iter().map(|s| s.resolved.len()).sum()
    }

    /// Total screen-like targets left inert.
    pub fn links_unresolved(&self) -> usize {
        self.screens.iter().map(|s| s.unresolved.len()).sum()
    }

    /// Screens whose markup passed through unscanned.
    pub fn fallback_count(&self) -> usize {
        self.screens.iter().filter(|s| s.fallback.is_some()).count()
    }

    /// Whether every reference resolved and every fragment scanned.
    pub fn is_clean(&self) -> bool {
        self.links_unresolved() == 0 && self.fallback_count() == 0
    }
}
