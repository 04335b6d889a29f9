//! Command line options.
//!
//! Every `-key`, `--key` or `--key=value` token becomes an entry of a flat
//! map. Tokens that do not look like options are ignored.

use crate::config::DEFAULT_CONFIG_PATH;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    options: BTreeMap<String, Option<String>>,
}

impl CliArgs {
    /// Parse the process arguments, skipping the executable name
    pub fn from_env() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pattern = Regex::new(r"^--?([^=\s]+)(?:=(\S+))?$").expect("valid option pattern");

        let mut options = BTreeMap::new();
        for arg in args {
            if let Some(caps) = pattern.captures(arg.as_ref()) {
                let key = caps[1].to_string();
                let value = caps.get(2).map(|m| m.as_str().to_string());
                options.insert(key, value);
            }
        }

        Self { options }
    }

    /// Value of `--key=value`, `None` for absent keys and bare flags
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_deref())
    }

    /// Whether `--key` was passed, with or without a value
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Configuration file to load
    pub fn config_path(&self) -> PathBuf {
        PathBuf::from(self.get("config").unwrap_or(DEFAULT_CONFIG_PATH))
    }
}
