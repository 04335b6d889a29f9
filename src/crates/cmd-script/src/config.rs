use cmd_script_error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "cmd_script.yml";

fn default_diagnostic_path() -> PathBuf {
    PathBuf::from("/tmp/errors.log")
}

fn default_ping_count() -> u32 {
    4
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Include backtraces in the error log
    pub debug: bool,

    /// Activity log, one header line per command invocation
    #[serde(rename = "output")]
    pub output_path: PathBuf,

    /// Error log, one line per failed command
    #[serde(rename = "error")]
    pub error_path: PathBuf,

    /// Fallback log receiving "command not found" diagnostics
    #[serde(rename = "diagnostic", default = "default_diagnostic_path")]
    pub diagnostic_path: PathBuf,

    /// Number of echo requests sent by `ping`
    #[serde(default = "default_ping_count")]
    pub ping_count: u32,

    /// Line history file for the interactive prompt
    #[serde(default)]
    pub history: Option<PathBuf>,

    /// Human readable description of every command, by name
    #[serde(rename = "commands")]
    pub command_descriptions: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Description configured for `name`, empty when the key is missing
    pub fn description(&self, name: &str) -> &str {
        self.command_descriptions
            .get(name)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
debug: true
output: /var/tmp/cmd_output.log
error: /var/tmp/cmd_error.log
commands:
  help: Show all commands
  uptime: Show system uptime
  date: Show current date
  echo: Print the passed argument
  ping: Ping a host
";

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("cmd_script.yml");
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn test_load_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE);

        let config = Config::from_yaml_file(&path).unwrap();
        assert!(config.debug);
        assert_eq!(config.output_path, PathBuf::from("/var/tmp/cmd_output.log"));
        assert_eq!(config.error_path, PathBuf::from("/var/tmp/cmd_error.log"));
        assert_eq!(config.command_descriptions.len(), 5);
        assert_eq!(config.description("ping"), "Ping a host");
    }

    #[test]
    fn test_optional_keys_have_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE);

        let config = Config::from_yaml_file(&path).unwrap();
        assert_eq!(config.diagnostic_path, PathBuf::from("/tmp/errors.log"));
        assert_eq!(config.ping_count, 4);
        assert!(config.history.is_none());
    }

    #[test]
    fn test_missing_description_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, SAMPLE);

        let config = Config::from_yaml_file(&path).unwrap();
        assert_eq!(config.description("reboot"), "");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::from_yaml_file(dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "debug: [unterminated\n");

        let err = Config::from_yaml_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_required_key() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "debug: false\noutput: out.log\n");

        let err = Config::from_yaml_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
