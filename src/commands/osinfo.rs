use crate::errors::{FmError, FmResult};
use crate::parser::OsQuery;
use crate::session;
use std::env;

/// The platform line-ending sequence.
pub const EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// `os --<flag>`: print one system fact.
pub fn print_query(query: OsQuery) -> FmResult<()> {
    match query {
        OsQuery::Cpus => println!("{}", cpu_model()?),
        // Printed raw: on Unix this shows up as a blank line
        OsQuery::Eol => println!("{}", EOL),
        OsQuery::HomeDir => println!("{}", session::home_dir()?.display()),
        OsQuery::Username => println!("{}", login_name()?),
        OsQuery::Architecture => println!("{}", env::consts::ARCH),
    }
    Ok(())
}

/// The current OS user's login name, from the environment.
fn login_name() -> FmResult<String> {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .map_err(|_| FmError::UnsupportedQuery)
}

/// Model name of the first logical processor.
#[cfg(target_os = "linux")]
fn cpu_model() -> FmResult<String> {
    let info = std::fs::read_to_string("/proc/cpuinfo")?;
    info.lines()
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            (key.trim() == "model name").then(|| value.trim().to_string())
        })
        .ok_or(FmError::UnsupportedQuery)
}

#[cfg(target_os = "macos")]
fn cpu_model() -> FmResult<String> {
    let output = std::process::Command::new("sysctl")
        .args(["-n", "machdep.cpu.brand_string"])
        .output()?;
    if !output.status.success() {
        return Err(FmError::UnsupportedQuery);
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn cpu_model() -> FmResult<String> {
    Err(FmError::UnsupportedQuery)
}
