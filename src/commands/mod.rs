pub mod archive;
pub mod files;
pub mod hashing;
pub mod list;
pub mod osinfo;

use crate::errors::FmResult;
use crate::parser::Command;
use crate::session::Session;
use log::debug;

/// Execute one parsed command against the session.
///
/// Exactly one branch runs per command; `Exit` is intercepted by the loop in
/// [`crate::run`] before dispatch and is a no-op here.
pub fn dispatch(session: &mut Session, command: Command) -> FmResult<()> {
    debug!("dispatch: {:?}", command);
    match command {
        Command::Exit => Ok(()),
        Command::Cat { path } => files::print_file(session, &path),
        Command::Add { name } => files::create_empty(session, &name),
        Command::Up => {
            session.go_up();
            Ok(())
        }
        Command::Cd { path } => session.change_dir(&path),
        Command::Ls => list::print_listing(session),
        Command::Rename { from, to } => files::rename(session, &from, &to),
        Command::Copy { from, to } => files::copy(session, &from, &to),
        Command::Move { from, to } => files::move_file(session, &from, &to),
        Command::Remove { path } => files::remove(session, &path),
        Command::Hash { text } => {
            println!("{}", hashing::sha256_hex(&text));
            Ok(())
        }
        Command::Compress { path } => archive::compress(session, &path),
        Command::Decompress { path } => archive::decompress(session, &path),
        Command::Os { query } => osinfo::print_query(query),
    }
}
