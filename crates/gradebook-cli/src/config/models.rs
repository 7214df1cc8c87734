use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Which front-end drives the session.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InterfaceKind {
    /// Ask on startup.
    #[default]
    Ask,
    Console,
    Dashboard,
}

impl InterfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceKind::Ask => "ask",
            InterfaceKind::Console => "console",
            InterfaceKind::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InterfaceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" => Ok(InterfaceKind::Ask),
            "console" => Ok(InterfaceKind::Console),
            "dashboard" => Ok(InterfaceKind::Dashboard),
            other => Err(format!(
                "unknown interface '{}'; expected 'ask', 'console' or 'dashboard'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub interface: InterfaceKind,
    pub sample_data: bool,
    /// The file the settings were read from, if one existed.
    pub source: Option<PathBuf>,
}
