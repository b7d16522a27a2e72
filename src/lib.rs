pub mod commands;
pub mod completion;
pub mod errors;
pub mod parser;
pub mod repl;
pub mod session;

use errors::{FmError, FmResult};
use log::{debug, warn};
use parser::Command;
use repl::LineReader;
use session::Session;

/// Run the command loop until `.exit`, interrupt, or end of input.
///
/// Every handled line ends with the working-directory echo; only the
/// deliberate exit paths leave the loop.
pub fn run(session: &mut Session) -> FmResult<()> {
    let mut reader = LineReader::new()?;

    loop {
        let line = match reader.read_line() {
            Ok(line) => line,
            Err(FmError::Interrupted) => break,
            Err(e) => {
                warn!("input error: {}", e);
                break;
            }
        };

        match parser::parse_line(&line) {
            Ok(Command::Exit) => break,
            Ok(command) => {
                if let Err(e) = commands::dispatch(session, command) {
                    report_failure(&e);
                }
            }
            Err(e) => report_failure(&e),
        }

        println!("You are currently in {}", session.cwd().display());
    }

    Ok(())
}

/// Collapse an operation error to the user-facing message. The coarse
/// wording is the interface; the cause goes to the debug log.
fn report_failure(error: &FmError) {
    debug!("command failed: {}", error);
    match error {
        FmError::UnknownCommand(_)
        | FmError::UnexpectedArguments(_)
        | FmError::UnknownFlag(_)
        | FmError::MissingFlag => println!("Invalid input"),
        FmError::SourceNotRemoved(_) => {
            println!("Operation failed: copied but source was not removed")
        }
        _ => println!("Operation failed"),
    }
}
