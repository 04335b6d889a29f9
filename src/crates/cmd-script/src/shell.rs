//! The read-dispatch loop.

use crate::commands::Context;
use crate::config::Config;
use crate::input::LineReader;
use crate::log::{ActivityLog, DiagnosticLog, ErrorLog};
use crate::registry::Registry;
use cmd_script_error::{Result, ShellError};
use std::backtrace::Backtrace;
use std::io::Write;
use std::ops::ControlFlow;
use tracing::{debug, info, warn};

pub const PROMPT: &str = "$ ";
pub const FAREWELL: &str = "Good bye!";

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The user typed `exit`
    Exit,
    /// Ctrl-C, end of input or an unusable terminal
    Interrupted,
}

/// Interactive session over an immutable command registry
pub struct Shell<'r> {
    registry: &'r Registry,
    activity: ActivityLog,
    errors: ErrorLog,
    diagnostics: DiagnosticLog,
}

impl<'r> Shell<'r> {
    pub fn new(config: &Config, registry: &'r Registry) -> Self {
        Self {
            registry,
            activity: ActivityLog::new(&config.output_path),
            errors: ErrorLog::new(&config.error_path, config.debug),
            diagnostics: DiagnosticLog::new(&config.diagnostic_path),
        }
    }

    /// Prompt and dispatch until the user exits or input stops.
    ///
    /// The farewell message is printed on every termination path.
    pub fn run(&self, input: &mut dyn LineReader, out: &mut dyn Write) -> Termination {
        let termination = loop {
            if let Err(e) = out.flush() {
                warn!(error = %e, "failed to flush console");
            }

            let line = match input.read_line(PROMPT) {
                Ok(line) => line,
                Err(e) => {
                    debug!(error = %e, "input closed");
                    break Termination::Interrupted;
                }
            };

            if let ControlFlow::Break(termination) = self.execute(&line, input, out) {
                break termination;
            }
        };

        // Interrupts arrive with the cursor still on the prompt line
        let farewell = match termination {
            Termination::Exit => writeln!(out, "{}", FAREWELL),
            Termination::Interrupted => writeln!(out, "\n{}", FAREWELL),
        };
        if let Err(e) = farewell.and_then(|_| out.flush()) {
            warn!(error = %e, "failed to print farewell");
        }

        info!(?termination, "session ended");
        termination
    }

    /// Execute a single input line
    pub fn execute(
        &self,
        line: &str,
        input: &mut dyn LineReader,
        out: &mut dyn Write,
    ) -> ControlFlow<Termination> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return ControlFlow::Continue(());
        };

        input.add_history(line.trim());

        let name = first.to_lowercase();
        let argument = tokens.next();

        if name == "exit" {
            return ControlFlow::Break(Termination::Exit);
        }

        match self.dispatch(&name, argument, input, out) {
            Ok(()) => ControlFlow::Continue(()),
            Err(ShellError::Interrupted) => ControlFlow::Break(Termination::Interrupted),
            Err(e @ ShellError::CommandNotFound(_)) => {
                self.report_not_found(&e, out);
                ControlFlow::Continue(())
            }
            Err(e) => {
                let backtrace = self.errors.capture();
                self.report_failure(&e, backtrace.as_ref(), out);
                ControlFlow::Continue(())
            }
        }
    }

    fn dispatch(
        &self,
        name: &str,
        argument: Option<&str>,
        input: &mut dyn LineReader,
        out: &mut dyn Write,
    ) -> Result<()> {
        let command = self.registry.lookup(name)?;

        if argument == Some("help") {
            writeln!(out, "{}", command.description())?;
            return Ok(());
        }

        let argument = argument.filter(|_| command.forwards_argument());
        debug!(command = name, ?argument, "dispatching command");

        let mut ctx = Context {
            registry: self.registry,
            activity: &self.activity,
            input,
            out,
        };
        command.run(&mut ctx, argument)
    }

    fn report_not_found(&self, err: &ShellError, out: &mut dyn Write) {
        if let Err(e) = writeln!(out, "Exception: {}", err) {
            warn!(error = %e, "failed to print error");
        }

        if let Err(e) = self.diagnostics.record(err) {
            warn!(error = %e, "failed to write diagnostic log");
        }
    }

    fn report_failure(
        &self,
        err: &ShellError,
        backtrace: Option<&Backtrace>,
        out: &mut dyn Write,
    ) {
        debug!(kind = err.kind(), error = %err, "command failed");

        let line = match self.errors.record(err, backtrace) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to write error log");
                self.errors.format(err, backtrace)
            }
        };

        if let Err(e) = writeln!(out, "{}", line) {
            warn!(error = %e, "failed to print error");
        }
    }
}
