use crate::errors::{FmError, FmResult};
use crate::session::Session;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const GZ_SUFFIX: &str = ".gz";

/// `compress`: stream the file through a gzip encoder into `<name>.gz`
/// next to the source. The source is left intact.
pub fn compress(session: &Session, path: &str) -> FmResult<()> {
    let src = session.resolve(path);
    let dst = gz_sibling(&src)?;

    let mut reader = BufReader::new(File::open(&src)?);
    let mut encoder = GzEncoder::new(
        BufWriter::new(File::create(&dst)?),
        Compression::default(),
    );
    let bytes = io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?.flush()?;
    debug!("compressed {} bytes into {}", bytes, dst.display());
    Ok(())
}

/// `decompress`: stream a `.gz` file through a gzip decoder into the
/// destination named by stripping the suffix.
pub fn decompress(session: &Session, path: &str) -> FmResult<()> {
    let src = session.resolve(path);
    let dst = stripped_sibling(&src)?;

    let mut decoder = GzDecoder::new(BufReader::new(File::open(&src)?));
    let mut writer = BufWriter::new(File::create(&dst)?);
    let bytes = io::copy(&mut decoder, &mut writer)?;
    writer.flush()?;
    debug!("decompressed {} bytes into {}", bytes, dst.display());
    Ok(())
}

/// Destination for `compress`: the source file name with `.gz` appended.
fn gz_sibling(src: &Path) -> FmResult<PathBuf> {
    let mut name = src
        .file_name()
        .ok_or_else(|| FmError::InvalidPath(src.display().to_string()))?
        .to_os_string();
    name.push(GZ_SUFFIX);
    Ok(src.with_file_name(name))
}

/// Destination for `decompress`: the source file name with exactly the
/// trailing `.gz` removed. The suffix must be present and must not be the
/// whole name.
fn stripped_sibling(src: &Path) -> FmResult<PathBuf> {
    let name = src
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FmError::InvalidPath(src.display().to_string()))?;
    let stem = name
        .strip_suffix(GZ_SUFFIX)
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| FmError::InvalidPath(src.display().to_string()))?;
    Ok(src.with_file_name(stem))
}
