use crate::cli::{Cli, ConfigArgs, ConfigCommands};
use crate::config::{AppConfig, build_config, file::default_config_path};
use crate::error::Result;
use std::path::PathBuf;

pub fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match args.command {
        ConfigCommands::Path => handle_path(cli),
        ConfigCommands::Show => handle_show(cli),
    }
}

fn resolved_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(default_config_path)
}

fn handle_path(cli: &Cli) -> Result<()> {
    match resolved_path(cli) {
        Some(path) => {
            let state = if path.is_file() { "" } else { " (not created)" };
            println!("{}{}", path.display(), state);
        }
        None => println!("No configuration directory is available on this platform."),
    }
    Ok(())
}

fn handle_show(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    print!("{}", render(&config));
    Ok(())
}

fn render(config: &AppConfig) -> String {
    let source = config
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());
    format!(
        "# source: {}\n[interface]\ndefault = \"{}\"\n\n[dashboard]\nsample-data = {}\n",
        source, config.interface, config.sample_data
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterfaceKind;
    use crate::config::file::FileConfig;

    #[test]
    fn rendered_config_round_trips_through_file_parser() {
        let config = AppConfig {
            interface: InterfaceKind::Console,
            sample_data: false,
            source: None,
        };
        let text = render(&config);
        assert!(text.starts_with("# source: <defaults>\n"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rendered.toml");
        std::fs::write(&path, &text).unwrap();
        let parsed = FileConfig::from_file(&path).unwrap();
        assert_eq!(parsed.interface.unwrap().default, Some(InterfaceKind::Console));
        assert_eq!(parsed.dashboard.unwrap().sample_data, Some(false));
    }
}
