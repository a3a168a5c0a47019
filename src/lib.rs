use crate::{
    emit::document::emit_document,
    registry::builder::build_registry,
    report::report_model::{AssemblyReport, ScreenLinkReport},
    resolver::link_resolver::{LinkOutcome, ResolvedScreen, resolve_screen_links},
    screen::{
        error::AssemblyError,
        normalize::html_fingerprint,
        screen_model::{ProjectContext, PrototypeDocument, Screen},
    },
};

pub mod chrome;
pub mod cli;
pub mod emit;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod screen;
pub mod trace;

/// Assemble a screen set into one self-contained, navigable document.
///
/// A pure function: registry building, link resolution, chrome wrapping,
/// and emission run as a straight pipeline with no I/O and no state across
/// calls. Identical inputs produce byte-identical output. An empty screen
/// list is valid and yields a zero-screen document.
pub fn assemble_prototype(
    screens: &[Screen],
    context: &ProjectContext,
) -> Result<PrototypeDocument, AssemblyError> {
    let (document, _report) = assemble_with_report(screens, context)?;
    Ok(document)
}

/// Assemble and also return the per-screen resolution report.
pub fn assemble_with_report(
    screens: &[Screen],
    context: &ProjectContext,
) -> Result<(PrototypeDocument, AssemblyReport), AssemblyError> {
    let registry = build_registry(screens)?;

    // ---- Link resolution ----
    let mut resolved_screens = Vec::with_capacity(registry.screen_count());
    let mut screen_reports = Vec::with_capacity(registry.screen_count());
    for screen in &registry.screens {
        let LinkOutcome {
            html,
            resolved,
            unresolved,
            fallback,
        } = resolve_screen_links(&screen.html, &registry);

        screen_reports.push(ScreenLinkReport {
            name: screen.name.clone(),
            slug: screen.slug.clone(),
            resolved,
            unresolved,
            fallback,
        });
        resolved_screens.push(ResolvedScreen {
            name: screen.name.clone(),
            slug: screen.slug.clone(),
            html,
        });
    }

    // ---- Chrome + emission ----
    let html = emit_document(
        &resolved_screens,
        registry.entry_slug(),
        context.platform,
        &context.project_name,
    );
    let document = PrototypeDocument {
        html,
        screen_count: registry.screen_count(),
    };

    let report = AssemblyReport {
        project_name: context.project_name.clone(),
        platform: context.platform,
        screen_count: document.screen_count,
        entry_screen: registry.entry_screen().map(|s| s.name.clone()),
        duplicates_skipped: registry.duplicates_skipped.clone(),
        screens: screen_reports,
        document_fingerprint: html_fingerprint(&document.html),
    };

    Ok((document, report))
}
