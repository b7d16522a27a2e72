use crate::errors::{FmError, FmResult};
use crate::session::Session;
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// `cat`: read the whole file as text, then print it in one piece.
/// Nothing is printed until the read has completed.
pub fn print_file(session: &Session, path: &str) -> FmResult<()> {
    let content = fs::read_to_string(session.resolve(path))?;
    print!("{}", content);
    io::stdout().flush()?;
    Ok(())
}

/// `add`: create an empty file in the working directory. An existing file
/// of the same name is truncated.
pub fn create_empty(session: &Session, name: &str) -> FmResult<()> {
    File::create(session.resolve(name))?;
    Ok(())
}

/// `rm`: delete a file.
pub fn remove(session: &Session, path: &str) -> FmResult<()> {
    fs::remove_file(session.resolve(path))?;
    Ok(())
}

/// `rn`: rename a file. Both paths resolve against the working directory.
pub fn rename(session: &Session, from: &str, to: &str) -> FmResult<()> {
    fs::rename(session.resolve(from), session.resolve(to))?;
    Ok(())
}

/// `cp`: stream the source into a created/truncated destination.
pub fn copy(session: &Session, from: &str, to: &str) -> FmResult<()> {
    stream_copy(&session.resolve(from), &session.resolve(to))?;
    Ok(())
}

/// `mv`: the `cp` copy followed by removal of the source. A copy failure
/// short-circuits the removal; a removal failure after a successful copy is
/// reported as its own condition.
pub fn move_file(session: &Session, from: &str, to: &str) -> FmResult<()> {
    let src = session.resolve(from);
    stream_copy(&src, &session.resolve(to))?;
    fs::remove_file(&src).map_err(FmError::SourceNotRemoved)?;
    Ok(())
}

/// Byte-stream one file into another through buffered readers. The
/// destination is created or truncated; the source is opened read-only and
/// left untouched.
fn stream_copy(src: &Path, dst: &Path) -> FmResult<u64> {
    let mut reader = BufReader::new(File::open(src)?);
    let mut writer = BufWriter::new(File::create(dst)?);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    debug!("streamed {} bytes {} -> {}", bytes, src.display(), dst.display());
    Ok(bytes)
}
