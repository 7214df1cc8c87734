use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Gradebook - track students and their grades from a text menu or a terminal dashboard.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Front-end to start. When omitted, the configured default is used.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the per-user configuration directory.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S dashboard.sample-data=false
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the numbered text menu.
    Console,
    /// Start the terminal dashboard with a live student table.
    Dashboard(DashboardArgs),
    /// Inspect the configuration.
    Config(ConfigArgs),
}

/// Arguments for the `dashboard` subcommand.
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub sample_data: SampleData,
}

/// A group to handle mutually exclusive flags for demonstration data.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = false, multiple = false)]
pub struct SampleData {
    /// Seed the roster with three sample students before starting.
    #[arg(long)]
    pub with_sample_data: bool,
    /// Start with an empty roster.
    #[arg(long)]
    pub no_sample_data: bool,
}

impl SampleData {
    pub fn as_override(&self) -> Option<bool> {
        match (self.with_sample_data, self.no_sample_data) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments for the `config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the path of the configuration file that would be loaded.
    Path,
    /// Print the effective configuration after merging file, --set and defaults.
    Show,
}
