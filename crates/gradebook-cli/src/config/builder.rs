use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, InterfaceKind};
use crate::cli::{Cli, Commands};
use crate::error::Result;
use tracing::debug;

/// Merges command-line arguments, `--set` overrides, the configuration file,
/// and built-in defaults, in that order of precedence.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let (file_config, source) = FileConfig::load(cli.config.as_deref())?;
    merge(cli, file_config, source)
}

fn merge(
    cli: &Cli,
    mut file_config: FileConfig,
    source: Option<std::path::PathBuf>,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    file_config.apply_set_values(&cli.set_values)?;

    let (cli_interface, cli_sample_data) = match &cli.command {
        Some(Commands::Console) => (Some(InterfaceKind::Console), None),
        Some(Commands::Dashboard(args)) => (
            Some(InterfaceKind::Dashboard),
            args.sample_data.as_override(),
        ),
        Some(Commands::Config(_)) | None => (None, None),
    };

    let interface = cli_interface
        .or(file_config.interface.and_then(|i| i.default))
        .unwrap_or(defaults.interface);
    let sample_data = cli_sample_data
        .or(file_config.dashboard.and_then(|d| d.sample_data))
        .unwrap_or(defaults.sample_data);

    let config = AppConfig {
        interface,
        sample_data,
        source,
    };
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = TEST_DIR.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gradebook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let cli = parse(&[]);
        let config = merge(&cli, FileConfig::default(), None).unwrap();
        assert_eq!(
            config,
            AppConfig {
                interface: InterfaceKind::Ask,
                sample_data: true,
                source: None,
            }
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let path = write_config(
            "file_values.toml",
            "[interface]\ndefault = \"console\"\n[dashboard]\nsample-data = false\n",
        );
        let cli = parse(&["--config", path.to_str().unwrap()]);

        let config = build_config(&cli).unwrap();
        assert_eq!(config.interface, InterfaceKind::Console);
        assert!(!config.sample_data);
        assert_eq!(config.source, Some(path));
    }

    #[test]
    fn set_values_override_file() {
        let path = write_config("set_values.toml", "[interface]\ndefault = \"console\"\n");
        let cli = parse(&[
            "--config",
            path.to_str().unwrap(),
            "-S",
            "interface.default=dashboard",
        ]);

        let config = build_config(&cli).unwrap();
        assert_eq!(config.interface, InterfaceKind::Dashboard);
    }

    #[test]
    fn subcommand_overrides_everything() {
        let path = write_config(
            "subcommand.toml",
            "[interface]\ndefault = \"dashboard\"\n[dashboard]\nsample-data = true\n",
        );
        let cli = parse(&[
            "--config",
            path.to_str().unwrap(),
            "-S",
            "interface.default=dashboard",
            "console",
        ]);
        assert_eq!(build_config(&cli).unwrap().interface, InterfaceKind::Console);

        let cli = parse(&["--config", path.to_str().unwrap(), "dashboard", "--no-sample-data"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.interface, InterfaceKind::Dashboard);
        assert!(!config.sample_data);
    }

    #[test]
    fn bad_set_value_is_a_config_error() {
        let cli = parse(&["-S", "unknown.key=1"]);
        let result = merge(&cli, FileConfig::default(), None);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = TEST_DIR.path().join("does-not-exist.toml");
        let cli = parse(&["--config", missing.to_str().unwrap()]);
        assert!(matches!(build_config(&cli), Err(CliError::Config(_))));
    }
}
