use std::str::FromStr;

use crate::assemble_with_report;
use crate::cli::config::AppConfig;
use crate::cli::manifest::load_screens;
use crate::report::console::format_console_report;
use crate::report::report_model::AssemblyReport;
use crate::screen::screen_model::{Platform, ProjectContext};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// assemble subcommand
// ============================================================================

pub fn cmd_assemble(
    screens_path: &str,
    platform_arg: Option<&str>,
    project_name_arg: Option<&str>,
    output_arg: Option<&str>,
    trace_path: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_screens(screens_path)?;

    // Resolve platform: CLI > manifest > config file
    let platform_name = platform_arg
        .map(str::to_string)
        .or_else(|| loaded.platform.clone())
        .unwrap_or_else(|| config.assemble.platform.clone());
    let platform = Platform::from_str(&platform_name)?;

    let project_name = project_name_arg
        .map(str::to_string)
        .unwrap_or_else(|| loaded.project.clone());
    let context = ProjectContext {
        platform,
        project_name,
    };

    if verbose > 0 {
        eprintln!(
            "Assembling {} screens for '{}' ({})...",
            loaded.screens.len(),
            context.project_name,
            platform.as_str()
        );
    }

    let (document, report) = assemble_with_report(&loaded.screens, &context)?;

    let tracer = match trace_path {
        Some(path) => TraceLogger::to_file(path),
        None => TraceLogger::disabled(),
    };
    emit_trace(&tracer, &report);

    let output_path = output_arg
        .map(str::to_string)
        .unwrap_or_else(|| config.assemble.output.clone());
    std::fs::write(&output_path, &document.html)?;

    println!(
        "Assembled {} screens into {} ({} links resolved, {} unresolved)",
        document.screen_count,
        output_path,
        report.links_resolved(),
        report.links_unresolved()
    );

    if verbose > 0 {
        for screen in &report.screens {
            for target in &screen.unresolved {
                eprintln!("  unresolved in {}: {}", screen.name, target);
            }
            if let Some(ref reason) = screen.fallback {
                eprintln!("  passed through raw: {} ({})", screen.name, reason);
            }
        }
    }

    Ok(())
}

// ============================================================================
// inspect subcommand
// ============================================================================

/// Inspect a screen set and return whether every reference resolved.
pub fn cmd_inspect(
    screens_path: &str,
    format_arg: Option<&str>,
    output_arg: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let loaded = load_screens(screens_path)?;

    let platform_name = loaded
        .platform
        .clone()
        .unwrap_or_else(|| config.assemble.platform.clone());
    let platform = Platform::from_str(&platform_name)?;
    let context = ProjectContext {
        platform,
        project_name: loaded.project.clone(),
    };

    if verbose > 0 {
        eprintln!("Inspecting {} screens from {}...", loaded.screens.len(), screens_path);
    }

    let (_document, report) = assemble_with_report(&loaded.screens, &context)?;

    let format = format_arg
        .map(str::to_string)
        .unwrap_or_else(|| config.inspect.format.clone());
    let content = match format.as_str() {
        "json" => serde_json::to_string_pretty(&report)?,
        _ => format_console_report(&report),
    };

    let output = output_arg
        .map(str::to_string)
        .or_else(|| config.inspect.output.clone());
    match output {
        Some(path) => std::fs::write(path, &content)?,
        None => print!("{}", content),
    }

    Ok(report.is_clean())
}

// ============================================================================
// Helpers
// ============================================================================

/// Replay an assembly report into the trace log, stage by stage.
fn emit_trace(tracer: &TraceLogger, report: &AssemblyReport) {
    tracer.log(
        &TraceEvent::now("registry").with_detail(format!("{} screens", report.screen_count)),
    );
    for name in &report.duplicates_skipped {
        tracer.log(
            &TraceEvent::now("registry")
                .with_screen(name)
                .with_detail("duplicate name skipped"),
        );
    }
    if let Some(entry) = &report.entry_screen {
        tracer.log(
            &TraceEvent::now("registry")
                .with_screen(entry)
                .with_detail("entry screen"),
        );
    }

    for screen in &report.screens {
        for slug in &screen.resolved {
            tracer.log(
                &TraceEvent::now("resolve")
                    .with_screen(&screen.name)
                    .with_target(slug),
            );
        }
        for target in &screen.unresolved {
            tracer.log(
                &TraceEvent::now("resolve")
                    .with_screen(&screen.name)
                    .with_target(target)
                    .with_detail("unresolved"),
            );
        }
        if let Some(reason) = &screen.fallback {
            tracer.log(
                &TraceEvent::now("resolve")
                    .with_screen(&screen.name)
                    .with_detail(format!("fallback: {}", reason)),
            );
        }
    }

    tracer.log(
        &TraceEvent::now("emit")
            .with_detail(format!("fingerprint {}", report.document_fingerprint)),
    );
}
