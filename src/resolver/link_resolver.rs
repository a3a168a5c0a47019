use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::registry::registry_model::ScreenRegistry;
use crate::screen::normalize::normalize_nav_target;

// ============================================================================
// Link resolver — structural rewrite of cross-screen references
// ============================================================================

/// Marker attribute carried by a resolved navigation anchor. Doubles as the
/// idempotence guard: anchors already carrying it are never touched again.
pub const NAV_ATTR: &str = "data-screen-link";

/// A screen whose cross-screen references have been resolved.
#[derive(Debug, Clone)]
pub struct ResolvedScreen {
    pub name: String,
    pub slug: String,
    pub html: String,
}

/// Outcome of resolving one screen's fragment.
#[derive(Debug, Clone)]
pub struct LinkOutcome {
    /// Rewritten markup, or the untouched input when the scan fell back
    pub html: String,

    /// Slugs of references rewritten (or already carrying the marker)
    pub resolved: Vec<String>,

    /// Screen-like targets with no matching screen, left inert
    pub unresolved: Vec<String>,

    /// Why the scan fell back, if it did
    pub fallback: Option<String>,
}

/// Resolve cross-screen references in one screen's fragment.
///
/// Anchors whose `href` normalizes to a known screen slug are rewritten to
/// `href="#screen-<slug>"` plus a `data-screen-link` marker; everything
/// else passes through byte-identical. Markup the scanner cannot read is
/// not an error: the fragment passes through unmodified and the reason is
/// recorded, so one bad screen never aborts the assembly.
pub fn resolve_screen_links(html: &str, registry: &ScreenRegistry) -> LinkOutcome {
    match rewrite_fragment(html, registry) {
        Ok((rewritten, resolved, unresolved)) => LinkOutcome {
            html: rewritten,
            resolved,
            unresolved,
            fallback: None,
        },
        Err(reason) => LinkOutcome {
            html: html.to_string(),
            resolved: Vec::new(),
            unresolved: Vec::new(),
            fallback: Some(reason),
        },
    }
}

/// Event-loop rewrite pass. Treats the fragment as data: events stream from
/// the reader to the writer untouched unless they are a rewritable anchor.
fn rewrite_fragment(
    html: &str,
    registry: &ScreenRegistry,
) -> Result<(String, Vec<String>, Vec<String>), String> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut writer = Writer::new(Vec::new());
    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        match event {
            Event::Eof => break,
            Event::Start(e) => {
                match rewrite_nav_anchor(&e, registry, &mut resolved, &mut unresolved)? {
                    Some(rewritten) => writer.write_event(Event::Start(rewritten)),
                    None => writer.write_event(Event::Start(e)),
                }
                .map_err(|e| e.to_string())?;
            }
            Event::Empty(e) => {
                match rewrite_nav_anchor(&e, registry, &mut resolved, &mut unresolved)? {
                    Some(rewritten) => writer.write_event(Event::Empty(rewritten)),
                    None => writer.write_event(Event::Empty(e)),
                }
                .map_err(|e| e.to_string())?;
            }
            other => writer.write_event(other).map_err(|e| e.to_string())?,
        }
    }

    let output = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    Ok((output, resolved, unresolved))
}

/// Decide whether one element is an anchor to rewrite.
///
/// Returns `Ok(None)` to pass the element through untouched, `Ok(Some)`
/// with the rebuilt element otherwise. Attribute-level parse errors
/// propagate so the whole fragment falls back.
fn rewrite_nav_anchor(
    e: &BytesStart,
    registry: &ScreenRegistry,
    resolved: &mut Vec<String>,
    unresolved: &mut Vec<String>,
) -> Result<Option<BytesStart<'static>>, String> {
    let name = e.name();
    if !name.as_ref().eq_ignore_ascii_case(b"a") {
        return Ok(None);
    }

    // First pass: idempotence guard and target lookup.
    let mut href_target: Option<String> = None;
    for attr in e.html_attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        let key = attr.key.as_ref();

        if key.eq_ignore_ascii_case(NAV_ATTR.as_bytes()) {
            // Resolved on a previous pass; still counts toward the report.
            let slug = decode_attr_value(&attr);
            if !slug.is_empty() {
                resolved.push(slug);
            }
            return Ok(None);
        }
        if key.eq_ignore_ascii_case(b"href") && href_target.is_none() {
            href_target = Some(decode_attr_value(&attr));
        }
    }

    let Some(target) = href_target else {
        return Ok(None);
    };
    let Some(slug) = normalize_nav_target(&target) else {
        return Ok(None);
    };
    if !registry.contains_slug(&slug) {
        unresolved.push(target.trim().to_string());
        return Ok(None);
    }

    // Rebuild the anchor: href points at the embedded section, the marker
    // attribute carries the slug for the navigation runtime. All other
    // attributes are carried over with their serialized values intact.
    let tag = String::from_utf8_lossy(name.as_ref()).into_owned();
    let mut rewritten = BytesStart::new(tag);
    let mut href_done = false;
    for attr in e.html_attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        if !href_done && attr.key.as_ref().eq_ignore_ascii_case(b"href") {
            rewritten.push_attribute(("href", format!("#screen-{}", slug).as_str()));
            href_done = true;
        } else {
            rewritten.push_attribute(attr);
        }
    }
    rewritten.push_attribute((NAV_ATTR, slug.as_str()));

    resolved.push(slug);
    Ok(Some(rewritten))
}

/// Decode an attribute value, tolerating bad escapes.
///
/// Upstream fragments often carry raw `&` in hrefs; an unescape failure
/// falls back to the serialized bytes rather than failing the fragment.
fn decode_attr_value(attr: &quick_xml::events::attributes::Attribute) -> String {
    match attr.unescape_value() {
        Ok(value) => value.into_owned(),
        Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
    }
}
