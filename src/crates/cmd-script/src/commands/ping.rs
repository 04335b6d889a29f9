use super::{Command, Context};
use cmd_script_error::Result;
use std::ffi::OsString;
use std::io::Write;
use std::process::{self, Stdio};
use tracing::{debug, info};

pub struct Ping {
    description: String,
    count: u32,
    program: OsString,
}

impl Ping {
    pub fn new(description: impl Into<String>, count: u32) -> Self {
        Self::with_program(description, count, "ping")
    }

    /// Use `program` instead of the system `ping`
    pub fn with_program(
        description: impl Into<String>,
        count: u32,
        program: impl Into<OsString>,
    ) -> Self {
        Self {
            description: description.into(),
            count,
            program: program.into(),
        }
    }
}

impl Command for Ping {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(&self, ctx: &mut Context<'_>, argument: Option<&str>) -> Result<()> {
        let reply;
        let line = match argument {
            Some(arg) => arg,
            None => {
                writeln!(ctx.out, "Please enter servername: ")?;
                ctx.out.flush()?;
                reply = ctx.input.read_line("")?;
                reply.as_str()
            }
        };

        // Only the first target is pinged
        let target = line.split_whitespace().next().unwrap_or_default();

        let mut entry = ctx.activity.begin(self.name(), Some(target))?;

        writeln!(ctx.out, "Pinging now...")?;
        ctx.out.flush()?;

        debug!(host = target, count = self.count, "spawning ping");
        let output = process::Command::new(&self.program)
            .arg("-q")
            .arg("-c")
            .arg(self.count.to_string())
            .arg(target)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;

        ctx.out.write_all(&output.stdout)?;

        match output.status.code() {
            Some(code) => entry.line(code)?,
            None => entry.line("terminated by signal")?,
        }

        if output.status.success() {
            info!(host = target, "host is up");
            writeln!(ctx.out, "\n{} is up!\n", target)?;
            entry.line(format_args!("{} is up!", target))?;
        }

        Ok(())
    }
}
