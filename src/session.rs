use crate::errors::{FmError, FmResult};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// Per-process session state: who the user is and where they currently are.
///
/// The working directory is the session's reference point for resolving
/// relative paths. It is only ever mutated by [`Session::change_dir`] and
/// [`Session::go_up`]; the process-wide current directory is never touched,
/// so resolution stays explicit and testable.
pub struct Session {
    username: String,
    cwd: PathBuf,
}

impl Session {
    /// Create a session rooted at the invoking user's home directory.
    pub fn new(username: impl Into<String>) -> FmResult<Self> {
        Ok(Self::at(username, home_dir()?))
    }

    /// Create a session rooted at an explicit directory.
    pub fn at(username: impl Into<String>, cwd: PathBuf) -> Self {
        Self {
            username: username.into(),
            cwd,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a path argument against the working directory.
    /// Absolute paths are taken as-is.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.cwd.join(candidate)
        }
    }

    /// Change the working directory. The target must exist and be a
    /// directory; on any failure the working directory is left unchanged.
    pub fn change_dir(&mut self, path: &str) -> FmResult<()> {
        let target = self.resolve(path).canonicalize()?;
        if !target.is_dir() {
            return Err(FmError::NotADirectory(target.display().to_string()));
        }
        debug!("cd: {} -> {}", self.cwd.display(), target.display());
        self.cwd = target;
        Ok(())
    }

    /// Move the working directory to its parent. No-op at the root.
    pub fn go_up(&mut self) {
        self.cwd.pop();
    }
}

/// Look up the user's home directory from the environment.
pub fn home_dir() -> FmResult<PathBuf> {
    let key = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    env::var(key)
        .map(PathBuf::from)
        .map_err(|_| FmError::NoHomeDirectory)
}
