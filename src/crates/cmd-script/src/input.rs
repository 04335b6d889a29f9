use cmd_script_error::{Result, ShellError};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Source of interactive input lines
pub trait LineReader {
    /// Show `prompt` and block until one line is read.
    ///
    /// Ctrl-C, end of input and terminal failures are reported as
    /// `ShellError::Interrupted`.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Remember a line entered at the main prompt
    fn add_history(&mut self, _line: &str) {}
}

/// Line editor attached to the controlling terminal
pub struct Terminal {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl Terminal {
    pub fn new(history: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new().map_err(readline_error)?;

        if let Some(path) = &history {
            if editor.load_history(path).is_err() {
                // Ignore if history doesn't exist yet
                debug!(path = %path.display(), "no line history loaded");
            }
        }

        Ok(Self { editor, history })
    }

    /// Persist the line history, if a history file is configured
    pub fn save_history(&mut self) {
        if let Some(path) = &self.history {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "failed to save line history");
            }
        }
    }
}

impl LineReader for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.editor.readline(prompt).map_err(readline_error)
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            warn!(error = %e, "failed to add history entry");
        }
    }
}

fn readline_error(err: ReadlineError) -> ShellError {
    match err {
        ReadlineError::Interrupted | ReadlineError::Eof => ShellError::Interrupted,
        ReadlineError::Io(e) => ShellError::Io(e),
        other => {
            warn!(error = %other, "unrecoverable input error");
            ShellError::Interrupted
        }
    }
}

/// Pre-recorded input, for non-interactive sessions and tests
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(ShellError::Interrupted)
    }
}
