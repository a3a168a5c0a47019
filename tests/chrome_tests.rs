use prototype_assembly::chrome::frame::{escape_html, frame_close, frame_open, frame_styles};
use prototype_assembly::chrome::runtime::NAV_RUNTIME_JS;
use prototype_assembly::emit::document::emit_document;
use prototype_assembly::resolver::link_resolver::ResolvedScreen;
use prototype_assembly::screen::screen_model::Platform;

// ============================================================================
// Helper builders
// ============================================================================

fn screens() -> Vec<ResolvedScreen> {
    vec![
        ResolvedScreen {
            name: "Home".to_string(),
            slug: "home".to_string(),
            html: "<h1>Welcome</h1>".to_string(),
        },
        ResolvedScreen {
            name: "Details".to_string(),
            slug: "details".to_string(),
            html: "<p>Detail</p>".to_string(),
        },
    ]
}

// ============================================================================
// 1. Mobile frame markers
// ============================================================================

#[test]
fn mobile_frame_markers() {
    let html = emit_document(&screens(), Some("home"), Platform::Mobile, "Demo");
    assert!(html.contains(r#"class="device mobile""#));
    assert!(html.contains("device-notch"));
    assert!(html.contains("390px"));
    assert!(html.contains("844px"));
}

// ============================================================================
// 2. Desktop frame markers
// ============================================================================

#[test]
fn desktop_frame_markers() {
    let html = emit_document(&screens(), Some("home"), Platform::Desktop, "Demo");
    assert!(html.contains(r#"class="device desktop""#));
    assert!(html.contains("window-titlebar"));
    assert!(html.contains("window-dot"));
    assert!(html.contains("1280px"));
    assert!(html.contains(r#"<span class="window-title">Demo</span>"#));
}

// ============================================================================
// 3. Navigation runtime is injected
// ============================================================================

#[test]
fn navigation_runtime_injected() {
    let html = emit_document(&screens(), Some("home"), Platform::Mobile, "Demo");
    assert!(html.contains("<script>"));
    assert!(html.contains("data-screen-link"));
    assert!(html.contains("getElementById('screen-' + slug)"));
    // Unknown targets are a silent no-op in the runtime
    assert!(NAV_RUNTIME_JS.contains("if (!target)"));
}

// ============================================================================
// 4. Entry screen starts visible, others hidden
// ============================================================================

#[test]
fn entry_screen_starts_active() {
    let html = emit_document(&screens(), Some("home"), Platform::Mobile, "Demo");
    assert!(html.contains(r#"<section class="screen active" id="screen-home""#));
    assert!(html.contains(r#"<section class="screen" id="screen-details""#));
}

// ============================================================================
// 5. Screen visibility styles
// ============================================================================

#[test]
fn visibility_styles_present() {
    for platform in [Platform::Mobile, Platform::Desktop] {
        let styles = frame_styles(platform);
        assert!(styles.contains(".screen { display: none; }"));
        assert!(styles.contains(".screen.active { display: block; }"));
    }
}

// ============================================================================
// 6. Zero screens still emit a valid document
// ============================================================================

#[test]
fn zero_screens_valid_document() {
    let html = emit_document(&[], None, Platform::Mobile, "Empty Project");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("</html>"));
    assert!(!html.contains("<section"));
    assert!(html.contains("Empty Project"));
}

// ============================================================================
// 7. Project name lands in the title only
// ============================================================================

#[test]
fn project_name_in_title() {
    let html = emit_document(&screens(), Some("home"), Platform::Mobile, "Demo");
    assert!(html.contains("<title>Demo — Prototype</title>"));
}

// ============================================================================
// 8. Project name is escaped
// ============================================================================

#[test]
fn project_name_is_escaped() {
    let html = emit_document(&screens(), Some("home"), Platform::Desktop, r#"A<B & "C""#);
    assert!(html.contains("A&lt;B &amp; &quot;C&quot;"));
    assert!(!html.contains(r#"<title>A<B"#));
}

// ============================================================================
// 9. Screen names are embedded escaped
// ============================================================================

#[test]
fn screen_name_attribute_escaped() {
    let screens = vec![ResolvedScreen {
        name: "Tom & Jerry".to_string(),
        slug: "tom-jerry".to_string(),
        html: "<p>x</p>".to_string(),
    }];
    let html = emit_document(&screens, Some("tom-jerry"), Platform::Mobile, "Demo");
    assert!(html.contains(r#"data-screen-name="Tom &amp; Jerry""#));
}

// ============================================================================
// 10. Frame open/close pair up
// ============================================================================

#[test]
fn frame_open_close_pair() {
    for platform in [Platform::Mobile, Platform::Desktop] {
        let open = frame_open(platform, "Demo");
        let close = frame_close(platform);
        assert!(open.contains(r#"<div class="device"#));
        assert!(open.ends_with(r#"<div class="device-screen">"#));
        assert_eq!(close, "</div>\n</div>");
    }
}

// ============================================================================
// 11. HTML escaping helper
// ============================================================================

#[test]
fn escape_html_special_chars() {
    assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    assert_eq!(escape_html("plain"), "plain");
}
