use crate::chrome::frame::{escape_html, frame_close, frame_open, frame_styles};
use crate::chrome::runtime::NAV_RUNTIME_JS;
use crate::resolver::link_resolver::ResolvedScreen;
use crate::screen::screen_model::Platform;

// ============================================================================
// Document emitter — one self-contained, navigable HTML document
// ============================================================================

/// Emit the final prototype document.
///
/// Concatenates doctype, head (title + inline styles), the platform frame,
/// every embedded screen section, and the navigation runtime into a single
/// string. Only the entry screen starts visible; the rest are revealed by
/// the runtime on demand. Pure string assembly, no I/O; identical inputs
/// produce byte-identical output.
pub fn emit_document(
    screens: &[ResolvedScreen],
    entry_slug: Option<&str>,
    platform: Platform,
    project_name: &str,
) -> String {
    let mut sections = String::new();
    for screen in screens {
        let class = if Some(screen.slug.as_str()) == entry_slug {
            "screen active"
        } else {
            "screen"
        };
        sections.push_str(&format!(
            "<section class=\"{class}\" id=\"screen-{slug}\" data-screen-name=\"{name}\">\n{html}\n</section>\n",
            class = class,
            slug = screen.slug,
            name = escape_html(&screen.name),
            html = screen.html,
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} — Prototype</title>
<style>
{styles}
</style>
</head>
<body>
{frame_open}
{sections}{frame_close}
<script>
{runtime}
</script>
</body>
</html>
"#,
        title = escape_html(project_name),
        styles = frame_styles(platform),
        frame_open = frame_open(platform, project_name),
        sections = sections,
        frame_close = frame_close(platform),
        runtime = NAV_RUNTIME_JS,
    )
}
