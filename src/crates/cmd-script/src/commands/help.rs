use super::date::DATE_FORMAT;
use super::{Command, Context};
use chrono::Local;
use cmd_script_error::Result;
use std::io::Write;

const RULE: &str = "#################################";

pub struct Help {
    description: String,
}

impl Help {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Banner printed above the command list
fn banner(out: &mut dyn Write) -> Result<()> {
    let executable = std::env::args()
        .next()
        .unwrap_or_else(|| String::from("cmd-script"));

    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", Local::now().format(DATE_FORMAT))?;
    writeln!(out, "Executed script: {}", executable)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

impl Command for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(&self, ctx: &mut Context<'_>, _argument: Option<&str>) -> Result<()> {
        banner(ctx.out)?;
        writeln!(ctx.out, "Available commands:")?;

        let mut entry = ctx.activity.begin(self.name(), None)?;
        for command in ctx.registry.all() {
            writeln!(ctx.out, "{} --- {}", command.name(), command.description())?;
            entry.line(format_args!("{} - {}", command.name(), command.description()))?;
        }

        Ok(())
    }
}
