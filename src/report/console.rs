use crate::report::report_model::AssemblyReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format an assembly report for terminal output.
///
/// Produces output like:
/// ```text
/// === Prototype: Demo (mobile) ===
///
/// ✓ OK   Home (entry) — 1 resolved, 0 unresolved
/// ✓ OK   Details — 0 resolved, 1 unresolved
///     [MISS] Checkout
/// ✗ RAW  Legacy — markup not scanned
///
/// === 3 screens, 1 links resolved, 1 unresolved ===
/// ```
pub fn format_console_report(report: &AssemblyReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Prototype: {} ({}) ===\n\n",
        report.project_name,
        report.platform.as_str()
    ));

    for screen in &report.screens {
        let entry_suffix = if report.entry_screen.as_deref() == Some(screen.name.as_str()) {
            " (entry)"
        } else {
            ""
        };

        if screen.fallback.is_some() {
            out.push_str(&format!(
                "\u{2717} RAW  {}{} — markup not scanned\n",
                screen.name, entry_suffix
            ));
        } else {
            out.push_str(&format!(
                "\u{2713} OK   {}{} — {} resolved, {} unresolved\n",
                screen.name,
                entry_suffix,
                screen.resolved.len(),
                screen.unresolved.len()
            ));
        }

        // Fallback reason and inert targets, indented under the screen line
        if let Some(ref reason) = screen.fallback {
            out.push_str(&format!("    [RAW] {}\n", reason));
        }
        for target in &screen.unresolved {
            out.push_str(&format!("    [MISS] {}\n", target));
        }
    }

    if !report.duplicates_skipped.is_empty() {
        out.push_str(&format!(
            "\nSkipped duplicate names: {}\n",
            report.duplicates_skipped.join(", ")
        ));
    }

    out.push_str(&format!(
        "\n=== {} screens, {} links resolved, {} unresolved ===\n",
        report.screen_count,
        report.links_resolved(),
        report.links_unresolved()
    ));

    out
}
