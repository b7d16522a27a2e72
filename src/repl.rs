use crate::completion::VerbCompleter;
use crate::errors::{FmError, FmResult};
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{ColorMode, Config, Editor};

const PROMPT: &str = "> ";

/// Line reader for the command loop.
///
/// The editor lives for the whole session so history accumulates across
/// commands. Interrupt (Ctrl-C) and end-of-input (Ctrl-D) both surface as
/// [`FmError::Interrupted`]; the caller ends the session through the
/// farewell path.
pub struct LineReader {
    editor: Editor<VerbCompleter, DefaultHistory>,
}

impl LineReader {
    pub fn new() -> FmResult<Self> {
        let config = Config::builder()
            .color_mode(ColorMode::Enabled)
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)
            .map_err(|e| FmError::Input(format!("failed to create readline editor: {}", e)))?;
        editor.set_helper(Some(VerbCompleter));
        editor.set_completion_type(rustyline::CompletionType::List);

        Ok(Self { editor })
    }

    /// Read the next non-empty line, trimmed. Blank lines are skipped
    /// without any output.
    pub fn read_line(&mut self) -> FmResult<String> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        return Ok(trimmed.to_string());
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    return Err(FmError::Interrupted);
                }
                Err(e) => {
                    return Err(FmError::Input(format!("readline error: {}", e)));
                }
            }
        }
    }
}
