use super::{Command, Context};
use cmd_script_error::Result;
use std::io::Write;

pub struct Echo {
    description: String,
}

impl Echo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Command for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn forwards_argument(&self) -> bool {
        true
    }

    fn run(&self, ctx: &mut Context<'_>, argument: Option<&str>) -> Result<()> {
        let mut entry = ctx.activity.begin(self.name(), argument)?;

        let text = match argument {
            Some(arg) => arg.to_string(),
            None => {
                writeln!(ctx.out, "Hi! Put something:")?;
                ctx.out.flush()?;
                ctx.input.read_line("> ")?
            }
        };

        writeln!(ctx.out, "Your first passed argument: {}", text)?;
        entry.line(&text)?;

        Ok(())
    }
}
