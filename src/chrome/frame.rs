use crate::screen::screen_model::Platform;

// ============================================================================
// Platform chrome — device silhouettes wrapping the screen area
// ============================================================================

/// Styles shared by both platforms: page backdrop and screen visibility
/// toggling. Exactly one `.screen` is `.active` at a time; the navigation
/// runtime swaps the class.
const BASE_STYLES: &str = r#"body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #e8eaed; display: flex; justify-content: center; align-items: center; min-height: 100vh; }
.screen { display: none; }
.screen.active { display: block; }
.device-screen { background: #ffffff; overflow-y: auto; }"#;

/// Phone silhouette sized to a conventional mobile viewport.
const MOBILE_STYLES: &str = r#".device.mobile { width: 390px; height: 844px; background: #111; border-radius: 48px; padding: 14px; box-shadow: 0 24px 60px rgba(0, 0, 0, 0.35); position: relative; }
.device.mobile .device-notch { position: absolute; top: 14px; left: 50%; transform: translateX(-50%); width: 140px; height: 28px; background: #111; border-radius: 0 0 18px 18px; z-index: 2; }
.device.mobile .device-screen { width: 100%; height: 100%; border-radius: 34px; }"#;

/// Window frame sized to a conventional desktop viewport.
const DESKTOP_STYLES: &str = r#".device.desktop { width: 1280px; height: 800px; background: #d6d6d6; border-radius: 10px; box-shadow: 0 24px 60px rgba(0, 0, 0, 0.3); display: flex; flex-direction: column; overflow: hidden; }
.window-titlebar { height: 36px; background: #ececec; border-bottom: 1px solid #c9c9c9; display: flex; align-items: center; padding: 0 12px; flex-shrink: 0; }
.window-dot { width: 12px; height: 12px; border-radius: 50%; margin-right: 8px; }
.window-dot:nth-child(1) { background: #ff5f57; }
.window-dot:nth-child(2) { background: #febc2e; }
.window-dot:nth-child(3) { background: #28c840; }
.window-title { margin-left: 12px; font-size: 13px; color: #555; }
.device.desktop .device-screen { flex: 1; }"#;

/// Inline stylesheet for the chosen platform.
pub fn frame_styles(platform: Platform) -> String {
    match platform {
        Platform::Mobile => format!("{}\n{}", BASE_STYLES, MOBILE_STYLES),
        Platform::Desktop => format!("{}\n{}", BASE_STYLES, DESKTOP_STYLES),
    }
}

/// Opening frame markup; the embedded screens land inside `.device-screen`.
pub fn frame_open(platform: Platform, project_name: &str) -> String {
    match platform {
        Platform::Mobile => r#"<div class="device mobile">
<div class="device-notch"></div>
<div class="device-screen">"#
            .to_string(),
        Platform::Desktop => format!(
            r#"<div class="device desktop">
<div class="window-titlebar">
<span class="window-dot"></span><span class="window-dot"></span><span class="window-dot"></span>
<span class="window-title">{title}</span>
</div>
<div class="device-screen">"#,
            title = escape_html(project_name),
        ),
    }
}

/// Closing counterpart of `frame_open`, identical on both platforms.
pub fn frame_close(_platform: Platform) -> &'static str {
    "</div>\n</div>"
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
