use std::collections::HashSet;

use crate::registry::registry_model::{RegisteredScreen, ScreenRegistry};
use crate::screen::error::AssemblyError;
use crate::screen::normalize::slugify;
use crate::screen::screen_model::Screen;

// ============================================================================
// Registry builder — de-duplication and entry selection
// ============================================================================

/// Build the addressable screen registry from an ordered screen list.
///
/// Duplicate names (same slug) resolve first-wins: the first occurrence
/// stays, later ones are skipped and recorded. The entry screen is the
/// first one flagged root in order; with no flag, the first screen in
/// order. An empty input produces an empty registry, not an error.
///
/// The only failure is a contract violation: a blank screen name, or a
/// name whose slug normalizes to nothing.
pub fn build_registry(screens: &[Screen]) -> Result<ScreenRegistry, AssemblyError> {
    let mut registry = ScreenRegistry::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, screen) in screens.iter().enumerate() {
        let name = screen.name.trim();
        let slug = slugify(name);
        if name.is_empty() || slug.is_empty() {
            return Err(AssemblyError::MissingScreenName {
                index,
                name: screen.name.clone(),
            });
        }

        if !seen.insert(slug.clone()) {
            registry.duplicates_skipped.push(name.to_string());
            continue;
        }

        registry.screens.push(RegisteredScreen {
            name: name.to_string(),
            slug,
            html: screen.html_content.clone(),
            is_root: screen.is_root,
        });
    }

    registry.entry = if registry.screens.is_empty() {
        None
    } else {
        // First flagged root wins; with no flag the first screen is the entry
        Some(
            registry
                .screens
                .iter()
                .position(|s| s.is_root)
                .unwrap_or(0),
        )
    };

    Ok(registry)
}
