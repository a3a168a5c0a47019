use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::screen::error::AssemblyError;

// ============================================================================
// Core data model — screens, project context, assembled output
// ============================================================================

/// One designed surface of the prototype.
///
/// Supplied fresh on every assembly call by the caller (already filtered to
/// one project and ordered by `sort_order` ascending). The `name` doubles as
/// the human label and the navigation target key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Unique name within the project
    pub name: String,

    /// Rendered markup fragment for this screen
    pub html_content: String,

    /// Whether this screen is the navigation entry point
    #[serde(default)]
    pub is_root: bool,

    /// Explicit presentation order key
    #[serde(default)]
    pub sort_order: i64,
}

/// Target platform for the prototype chrome.
///
/// A closed enum: unknown platform strings fail at the boundary via
/// `FromStr` and never reach the assembly pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mobile,
    Desktop,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mobile => "mobile",
            Platform::Desktop => "desktop",
        }
    }
}

impl FromStr for Platform {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mobile" => Ok(Platform::Mobile),
            "desktop" => Ok(Platform::Desktop),
            other => Err(AssemblyError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Per-assembly project context. Not persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub platform: Platform,

    /// Display label embedded in the output document metadata only
    pub project_name: String,
}

/// The assembled prototype — a transient computed artifact, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrototypeDocument {
    /// Fully assembled, self-contained document
    pub html: String,

    /// Number of screens embedded, post de-duplication
    pub screen_count: usize,
}
