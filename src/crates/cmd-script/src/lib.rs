//! Interactive command shell.
//!
//! A [`Registry`] of built-in commands is built once from the YAML
//! [`Config`] and shared by reference with the [`Shell`] loop, which reads
//! lines through a [`LineReader`], dispatches them and appends every
//! invocation to the activity log.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod log;
pub mod registry;
pub mod shell;

pub use cmd_script_error::{ConfigError, Result, ShellError};
pub use config::Config;
pub use input::{LineReader, ScriptedInput, Terminal};
pub use registry::Registry;
pub use shell::{FAREWELL, Shell, Termination};
