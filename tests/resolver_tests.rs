use prototype_assembly::registry::builder::build_registry;
use prototype_assembly::registry::registry_model::ScreenRegistry;
use prototype_assembly::resolver::link_resolver::resolve_screen_links;
use prototype_assembly::screen::screen_model::Screen;

// ============================================================================
// Helper builders
// ============================================================================

fn registry_of(names: &[&str]) -> ScreenRegistry {
    let screens: Vec<Screen> = names
        .iter()
        .map(|name| Screen {
            name: name.to_string(),
            html_content: String::new(),
            is_root: false,
            sort_order: 0,
        })
        .collect();
    build_registry(&screens).unwrap()
}

// ============================================================================
// 1. Matching anchor is rewritten
// ============================================================================

#[test]
fn resolver_rewrites_matching_anchor() {
    let registry = registry_of(&["Home", "Details"]);
    let outcome = resolve_screen_links(r#"<p><a href="Details">Go</a></p>"#, &registry);
    assert!(outcome.html.contains(r##"href="#screen-details""##));
    assert!(outcome.html.contains(r#"data-screen-link="details""#));
    assert_eq!(outcome.resolved, vec!["details".to_string()]);
    assert!(outcome.unresolved.is_empty());
    assert!(outcome.fallback.is_none());
}

// ============================================================================
// 2. Matching is case-insensitive
// ============================================================================

#[test]
fn resolver_matches_case_insensitively() {
    let registry = registry_of(&["Details"]);
    let outcome = resolve_screen_links(r#"<a href="DETAILS">Go</a>"#, &registry);
    assert!(outcome.html.contains(r#"data-screen-link="details""#));
}

// ============================================================================
// 3. Matching trims whitespace
// ============================================================================

#[test]
fn resolver_trims_target_whitespace() {
    let registry = registry_of(&["Details"]);
    let outcome = resolve_screen_links(r#"<a href=" Details ">Go</a>"#, &registry);
    assert!(outcome.html.contains(r#"data-screen-link="details""#));
}

// ============================================================================
// 4. Slug-form targets match
// ============================================================================

#[test]
fn resolver_matches_slug_forms() {
    let registry = registry_of(&["Sign Up"]);
    for href in ["Sign Up", "sign-up", "#sign-up", "sign-up.html"] {
        let html = format!(r#"<a href="{}">Go</a>"#, href);
        let outcome = resolve_screen_links(&html, &registry);
        assert!(
            outcome.html.contains(r#"data-screen-link="sign-up""#),
            "href '{}' should resolve",
            href
        );
    }
}

// ============================================================================
// 5. Unknown target is left untouched and recorded
// ============================================================================

#[test]
fn resolver_leaves_unknown_target_untouched() {
    let registry = registry_of(&["Home"]);
    let html = r#"<p><a href="Checkout">Buy</a></p>"#;
    let outcome = resolve_screen_links(html, &registry);
    assert_eq!(outcome.html, html);
    assert_eq!(outcome.unresolved, vec!["Checkout".to_string()]);
    assert!(outcome.resolved.is_empty());
}

// ============================================================================
// 6. External targets are never candidates
// ============================================================================

#[test]
fn resolver_ignores_external_targets() {
    let registry = registry_of(&["Home"]);
    for href in [
        "https://example.com",
        "mailto:hi@example.com",
        "tel:+123",
        "javascript:void(0)",
        "/absolute",
    ] {
        let html = format!(r#"<a href="{}">x</a>"#, href);
        let outcome = resolve_screen_links(&html, &registry);
        assert_eq!(outcome.html, html, "href '{}' should pass through", href);
        assert!(outcome.unresolved.is_empty(), "href '{}' is not screen-like", href);
    }
}

// ============================================================================
// 7. Idempotence — resolving resolver output is a no-op
// ============================================================================

#[test]
fn resolver_is_idempotent() {
    let registry = registry_of(&["Home", "Details"]);
    let input = r#"<div><a class="btn" href="Details">Go</a><p>Text &amp; more</p></div>"#;
    let first = resolve_screen_links(input, &registry);
    let second = resolve_screen_links(&first.html, &registry);
    assert_eq!(first.html, second.html);
    assert!(second.fallback.is_none());
    // The already-marked anchor still counts toward the report
    assert_eq!(second.resolved, vec!["details".to_string()]);
}

// ============================================================================
// 8. Malformed markup falls back to the untouched fragment
// ============================================================================

#[test]
fn resolver_falls_back_on_malformed_markup() {
    let registry = registry_of(&["Details"]);
    // Unterminated attribute quote — the scanner cannot find the tag end
    let html = r#"<p><a href="Details>Go</a></p>"#;
    let outcome = resolve_screen_links(html, &registry);
    assert_eq!(outcome.html, html);
    assert!(outcome.fallback.is_some());
    assert!(outcome.resolved.is_empty());
    assert!(outcome.unresolved.is_empty());
}

// ============================================================================
// 9. Unrelated attributes are preserved
// ============================================================================

#[test]
fn resolver_preserves_other_attributes() {
    let registry = registry_of(&["Details"]);
    let outcome = resolve_screen_links(
        r#"<a class="btn primary" href="Details" id="go-btn">Go</a>"#,
        &registry,
    );
    assert!(outcome.html.contains(r#"class="btn primary""#));
    assert!(outcome.html.contains(r#"id="go-btn""#));
    assert!(outcome.html.contains(r##"href="#screen-details""##));
    assert!(outcome.html.contains(r#"data-screen-link="details""#));
}

// ============================================================================
// 10. Only anchors are rewritten
// ============================================================================

#[test]
fn resolver_ignores_non_anchor_elements() {
    let registry = registry_of(&["Details"]);
    let html = r#"<div href="Details">not a link</div>"#;
    let outcome = resolve_screen_links(html, &registry);
    assert_eq!(outcome.html, html);
    assert!(outcome.resolved.is_empty());
    assert!(outcome.unresolved.is_empty());
}

// ============================================================================
// 11. Mixed fragment — resolved and unresolved side by side
// ============================================================================

#[test]
fn resolver_handles_mixed_targets() {
    let registry = registry_of(&["Home", "Details"]);
    let outcome = resolve_screen_links(
        r#"<nav><a href="Details">Go</a><a href="Missing">Nope</a></nav>"#,
        &registry,
    );
    assert_eq!(outcome.resolved, vec!["details".to_string()]);
    assert_eq!(outcome.unresolved, vec!["Missing".to_string()]);
    assert!(outcome.html.contains(r#"data-screen-link="details""#));
    assert!(outcome.html.contains(r#"<a href="Missing">Nope</a>"#));
}

// ============================================================================
// 12. Self-closing anchors are rewritten in place
// ============================================================================

#[test]
fn resolver_rewrites_self_closing_anchor() {
    let registry = registry_of(&["Details"]);
    let outcome = resolve_screen_links(r#"<a href="Details"/>"#, &registry);
    assert!(outcome.html.contains(r#"data-screen-link="details""#));
    assert!(outcome.html.ends_with("/>"));
}

// ============================================================================
// 13. Empty fragment
// ============================================================================

#[test]
fn resolver_accepts_empty_fragment() {
    let registry = registry_of(&["Home"]);
    let outcome = resolve_screen_links("", &registry);
    assert_eq!(outcome.html, "");
    assert!(outcome.fallback.is_none());
}

// ============================================================================
// 14. Anchor without href passes through
// ============================================================================

#[test]
fn resolver_ignores_anchor_without_href() {
    let registry = registry_of(&["Details"]);
    let html = r#"<a name="top">anchor</a>"#;
    let outcome = resolve_screen_links(html, &registry);
    assert_eq!(outcome.html, html);
    assert!(outcome.resolved.is_empty());
}
