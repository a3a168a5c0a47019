// ============================================================================
// Screen registry — addressable, de-duplicated view of a project's screens
// ============================================================================

/// A screen admitted to the registry, addressable by slug.
#[derive(Debug, Clone)]
pub struct RegisteredScreen {
    /// Trimmed display name
    pub name: String,

    /// Navigation key derived from the name
    pub slug: String,

    /// Raw fragment markup, untouched at this stage
    pub html: String,

    /// Root flag as supplied; entry selection happens at build time
    pub is_root: bool,
}

/// The registry produced by `build_registry`.
///
/// Screens keep their presentation order; `entry` indexes the screen shown
/// first when the assembled prototype opens. Empty registries are valid
/// (the "no screens yet" state) and carry no entry.
#[derive(Debug, Clone, Default)]
pub struct ScreenRegistry {
    pub screens: Vec<RegisteredScreen>,

    /// Index of the entry screen, if any screens exist
    pub entry: Option<usize>,

    /// Names skipped under the first-wins duplicate policy
    pub duplicates_skipped: Vec<String>,
}

impl ScreenRegistry {
    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn entry_screen(&self) -> Option<&RegisteredScreen> {
        self.entry.and_then(|index| self.screens.get(index))
    }

    pub fn entry_slug(&self) -> Option<&str> {
        self.entry_screen().map(|s| s.slug.as_str())
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.screens.iter().any(|s| s.slug == slug)
    }
}
