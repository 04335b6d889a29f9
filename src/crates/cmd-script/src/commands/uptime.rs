use super::{Command, Context};
use cmd_script_error::{Result, ShellError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Kernel provided uptime, in seconds since boot
pub const PROC_UPTIME: &str = "/proc/uptime";

pub struct Uptime {
    description: String,
    source: PathBuf,
}

impl Uptime {
    pub fn new(description: impl Into<String>) -> Self {
        Self::with_source(description, PROC_UPTIME)
    }

    /// Read the uptime from `source` instead of `/proc/uptime`
    pub fn with_source(description: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            description: description.into(),
            source: source.into(),
        }
    }
}

/// Whole seconds from the first field of an uptime file
fn read_uptime(source: &Path) -> Result<u64> {
    let unavailable = |e: io::Error| ShellError::ResourceUnavailable {
        resource: source.display().to_string(),
        source: e,
    };

    let contents = fs::read_to_string(source).map_err(unavailable)?;

    let seconds = contents
        .split_whitespace()
        .next()
        .and_then(|field| field.parse::<f64>().ok())
        .ok_or_else(|| unavailable(io::Error::new(io::ErrorKind::InvalidData, "malformed uptime")))?;

    Ok(seconds as u64)
}

/// Render seconds as `HHh MMm SSs`
fn format_uptime(seconds: u64) -> String {
    format!(
        "{:02}h {:02}m {:02}s",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    )
}

impl Command for Uptime {
    fn name(&self) -> &str {
        "uptime"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(&self, ctx: &mut Context<'_>, _argument: Option<&str>) -> Result<()> {
        let mut entry = ctx.activity.begin(self.name(), None)?;

        match read_uptime(&self.source) {
            Ok(seconds) => {
                let message = format!("Uptime is {}", format_uptime(seconds));
                writeln!(ctx.out, "{}", message)?;
                entry.line(message)?;
            }
            Err(e) => {
                debug!(error = %e, "uptime source unavailable");
                writeln!(ctx.out, "Uptime is not available: {}", e)?;
            }
        }

        Ok(())
    }
}
