//! Built-in commands.

pub mod date;
pub mod echo;
pub mod help;
pub mod ping;
pub mod uptime;

use crate::input::LineReader;
use crate::log::ActivityLog;
use crate::registry::Registry;
use cmd_script_error::Result;
use std::io::Write;

pub use date::Date;
pub use echo::Echo;
pub use help::Help;
pub use ping::Ping;
pub use uptime::Uptime;

/// Everything a command may touch while it runs
pub struct Context<'a> {
    pub registry: &'a Registry,
    pub activity: &'a ActivityLog,
    pub input: &'a mut dyn LineReader,
    pub out: &'a mut dyn Write,
}

/// A command that can be registered with the shell
pub trait Command {
    /// Lowercase name used for lookup
    fn name(&self) -> &str;

    /// Human readable description, from the configuration
    fn description(&self) -> &str;

    /// Whether the first argument token of the input line is passed to `run`
    fn forwards_argument(&self) -> bool {
        false
    }

    /// Run the command, writing to the console and the activity log
    fn run(&self, ctx: &mut Context<'_>, argument: Option<&str>) -> Result<()>;
}
