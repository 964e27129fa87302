use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

pub const USAGE: &str = "usage: rb-shell [--ordered | --balanced] [-v | --verbose]...";

/// Name of the environment variable that overrides the log level.
pub const LOG_ENV: &str = "RB_SHELL_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Ordered,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub tree: TreeKind,
    pub log_level: LevelFilter,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("invalid log level in RB_SHELL_LOG: {0}")]
    InvalidLogLevel(String),
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tree: TreeKind::Balanced,
            log_level: LevelFilter::Warn,
        }
    }
}

impl ShellConfig {
    /// Builds the configuration from command-line arguments (program name
    /// excluded) and the value of [`LOG_ENV`], if set.
    pub fn from_args<I, S>(args: I, env_level: Option<&str>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut verbosity = 0usize;

        for arg in args {
            match arg.as_ref() {
                "--ordered" => config.tree = TreeKind::Ordered,
                "--balanced" => config.tree = TreeKind::Balanced,
                "-v" | "--verbose" => verbosity += 1,
                "-vv" => verbosity += 2,
                "-vvv" => verbosity += 3,
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        config.log_level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        if let Some(level) = env_level {
            config.log_level = LevelFilter::from_str(level.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_balanced_and_warn() {
        let config = ShellConfig::from_args(Vec::<String>::new(), None).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.tree, TreeKind::Balanced);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn selects_tree_and_verbosity() {
        let config = ShellConfig::from_args(["--ordered", "-v", "--verbose"], None).unwrap();
        assert_eq!(config.tree, TreeKind::Ordered);
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = ShellConfig::from_args(["-vvv"], None).unwrap();
        assert_eq!(config.log_level, LevelFilter::Trace);
    }

    #[test]
    fn env_level_overrides_flags() {
        let config = ShellConfig::from_args(["-v"], Some("error")).unwrap();
        assert_eq!(config.log_level, LevelFilter::Error);

        let config = ShellConfig::from_args(["-v"], Some("OFF")).unwrap();
        assert_eq!(config.log_level, LevelFilter::Off);
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(
            ShellConfig::from_args(["--avl"], None),
            Err(ConfigError::UnknownArgument("--avl".to_string()))
        );
        assert_eq!(
            ShellConfig::from_args(Vec::<&str>::new(), Some("loud")),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }
}
