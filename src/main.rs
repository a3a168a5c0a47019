use clap::Parser;
use prototype_assembly::cli::commands::{cmd_assemble, cmd_inspect};
use prototype_assembly::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Assemble {
            screens,
            platform,
            project_name,
            output,
            trace,
        } => {
            cmd_assemble(
                &screens,
                platform.as_deref(),
                project_name.as_deref(),
                output.as_deref(),
                trace.as_deref(),
                &config,
                cli.verbose,
            )?;
        }
        Commands::Inspect {
            screens,
            format,
            output,
        } => {
            let clean = cmd_inspect(
                &screens,
                format.as_deref(),
                output.as_deref(),
                &config,
                cli.verbose,
            )?;
            if !clean {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
