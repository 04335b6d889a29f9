use super::{Command, Context};
use chrono::Local;
use cmd_script_error::Result;
use std::io::Write;

/// Human readable local time, as printed by `date` and the help banner
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

pub struct Date {
    description: String,
}

impl Date {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Command for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(&self, ctx: &mut Context<'_>, _argument: Option<&str>) -> Result<()> {
        let mut entry = ctx.activity.begin(self.name(), None)?;

        let now = Local::now().format(DATE_FORMAT).to_string();
        writeln!(ctx.out, "Current date:  {}", now)?;
        entry.line(now)?;

        Ok(())
    }
}
