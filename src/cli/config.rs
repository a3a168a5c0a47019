use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "prototype-assembly",
    version,
    about = "Assemble per-screen HTML fragments into one navigable prototype document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: prototype-assembly.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble a screen set into a single prototype document
    Assemble {
        /// Screen manifest YAML file or directory of HTML fragments
        #[arg(long)]
        screens: String,

        /// Target platform: mobile or desktop
        #[arg(long)]
        platform: Option<String>,

        /// Project name embedded in the document title
        #[arg(long)]
        project_name: Option<String>,

        /// Output file path (default from config, else prototype.html)
        #[arg(short, long)]
        output: Option<String>,

        /// Write a JSONL assembly trace to this path
        #[arg(long)]
        trace: Option<String>,
    },

    /// Report link resolution for a screen set without writing the document
    Inspect {
        /// Screen manifest YAML file or directory of HTML fragments
        #[arg(long)]
        screens: String,

        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `prototype-assembly.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub assemble: AssembleConfig,
    #[serde(default)]
    pub inspect: InspectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembleConfig {
    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            platform: "mobile".to_string(),
            output: "prototype.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            output: None,
        }
    }
}

// Serde default helpers
fn default_platform() -> String { "mobile".to_string() }
fn default_output() -> String { "prototype.html".to_string() }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("prototype-assembly.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
