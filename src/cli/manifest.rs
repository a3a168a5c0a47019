use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::screen::screen_model::Screen;

// ============================================================================
// Screen sources — YAML manifest or directory of fragments
// ============================================================================

/// YAML description of a project's screen set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenManifest {
    /// Project display name
    pub project: String,

    /// Optional default platform for this project
    #[serde(default)]
    pub platform: Option<String>,

    /// Screens, in presentation order unless `order` overrides it
    pub screens: Vec<ScreenEntry>,
}

/// One screen in the manifest. Markup comes from `html` inline or from a
/// `file` relative to the manifest; inline wins when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenEntry {
    pub name: String,

    #[serde(default)]
    pub root: bool,

    /// Explicit sort key; entries without one keep manifest position
    #[serde(default)]
    pub order: Option<i64>,

    #[serde(default)]
    pub file: Option<String>,

    #[serde(default)]
    pub html: Option<String>,
}

/// A screen set loaded from disk, ready to hand to the core.
#[derive(Debug, Clone)]
pub struct LoadedScreens {
    pub project: String,
    pub platform: Option<String>,
    pub screens: Vec<Screen>,
}

/// Load a screen set from a manifest YAML file or a directory of fragments.
pub fn load_screens(path: &str) -> Result<LoadedScreens, Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        load_screen_dir(path)
    } else {
        load_manifest(path)
    }
}

/// Manifest mode: read each entry's markup, then sort by the explicit
/// order key (stable, so untouched entries keep manifest position).
fn load_manifest(path: &str) -> Result<LoadedScreens, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let manifest: ScreenManifest = serde_yaml::from_str(&content)?;
    let base = Path::new(path).parent().unwrap_or(Path::new("."));

    let mut screens = Vec::new();
    for (position, entry) in manifest.screens.iter().enumerate() {
        let html = match (&entry.html, &entry.file) {
            (Some(inline), _) => inline.clone(),
            (None, Some(file)) => std::fs::read_to_string(base.join(file))?,
            (None, None) => {
                return Err(
                    format!("Screen '{}' has neither `html` nor `file`", entry.name).into(),
                );
            }
        };
        screens.push(Screen {
            name: entry.name.clone(),
            html_content: html,
            is_root: entry.root,
            sort_order: entry.order.unwrap_or(position as i64),
        });
    }
    screens.sort_by_key(|s| s.sort_order);

    Ok(LoadedScreens {
        project: manifest.project,
        platform: manifest.platform,
        screens,
    })
}

/// Directory mode: every `.html`/`.htm` file becomes a screen named after
/// its file stem, ordered by filename. No root flag — the first screen in
/// order becomes the entry.
fn load_screen_dir(path: &str) -> Result<LoadedScreens, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let p = entry.path();
        if p.extension().map_or(false, |e| e == "html" || e == "htm") {
            files.push(p);
        }
    }
    // Sort by filename for deterministic order
    files.sort();

    let mut screens = Vec::new();
    for (position, file) in files.iter().enumerate() {
        let name = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        screens.push(Screen {
            name,
            html_content: std::fs::read_to_string(file)?,
            is_root: false,
            sort_order: position as i64,
        });
    }

    let project = Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("Prototype")
        .to_string();

    Ok(LoadedScreens {
        project,
        platform: None,
        screens,
    })
}
