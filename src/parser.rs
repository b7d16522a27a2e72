use crate::errors::{FmError, FmResult};

/// The fixed command vocabulary, in the order commands are documented.
pub const VERBS: &[&str] = &[
    ".exit",
    "cat",
    "add",
    "up",
    "cd",
    "ls",
    "rn",
    "cp",
    "mv",
    "rm",
    "hash",
    "compress",
    "decompress",
    "os",
];

/// A fully validated command, ready for dispatch.
///
/// Argument counts are checked here, at parse time, so the dispatch match in
/// [`crate::commands::dispatch`] never re-inspects the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Cat { path: String },
    Add { name: String },
    Up,
    Cd { path: String },
    Ls,
    Rename { from: String, to: String },
    Copy { from: String, to: String },
    Move { from: String, to: String },
    Remove { path: String },
    Hash { text: String },
    Compress { path: String },
    Decompress { path: String },
    Os { query: OsQuery },
}

/// The `os` introspection flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsQuery {
    Cpus,
    Eol,
    HomeDir,
    Username,
    Architecture,
}

impl OsQuery {
    fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--cpus" => Some(Self::Cpus),
            "--EOL" => Some(Self::Eol),
            "--homedir" => Some(Self::HomeDir),
            "--username" => Some(Self::Username),
            "--architecture" => Some(Self::Architecture),
            _ => None,
        }
    }
}

/// Parse one input line into a [`Command`].
///
/// Tokens are split on whitespace; there is no quoting. Verbs that accept
/// names with spaces (`add`, `hash`, `compress`, `decompress`) rejoin all
/// trailing tokens with single spaces.
pub fn parse_line(line: &str) -> FmResult<Command> {
    let mut tokens = line.split_whitespace();
    let verb = match tokens.next() {
        Some(verb) => verb,
        None => return Err(FmError::UnknownCommand(String::new())),
    };
    let rest: Vec<&str> = tokens.collect();

    match verb {
        // Trailing tokens after .exit are ignored, matching observed use.
        ".exit" => Ok(Command::Exit),
        "cat" => one_arg("cat", &rest).map(|path| Command::Cat { path }),
        "add" => rejoined("add", &rest).map(|name| Command::Add { name }),
        "up" => bare("up", &rest).map(|_| Command::Up),
        "cd" => one_arg("cd", &rest).map(|path| Command::Cd { path }),
        "ls" => bare("ls", &rest).map(|_| Command::Ls),
        "rn" => two_args("rn", &rest).map(|(from, to)| Command::Rename { from, to }),
        "cp" => two_args("cp", &rest).map(|(from, to)| Command::Copy { from, to }),
        "mv" => two_args("mv", &rest).map(|(from, to)| Command::Move { from, to }),
        "rm" => one_arg("rm", &rest).map(|path| Command::Remove { path }),
        "hash" => Ok(Command::Hash {
            text: rest.join(" "),
        }),
        "compress" => rejoined("compress", &rest).map(|path| Command::Compress { path }),
        "decompress" => rejoined("decompress", &rest).map(|path| Command::Decompress { path }),
        "os" => parse_os_query(&rest).map(|query| Command::Os { query }),
        other => Err(FmError::UnknownCommand(other.to_string())),
    }
}

/// Zero-argument verbs (`ls`, `up`): any extra token is invalid input.
fn bare(verb: &'static str, rest: &[&str]) -> FmResult<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(FmError::UnexpectedArguments(verb))
    }
}

fn one_arg(verb: &'static str, rest: &[&str]) -> FmResult<String> {
    match rest {
        [arg] => Ok((*arg).to_string()),
        _ => Err(FmError::WrongArgumentCount(verb)),
    }
}

fn two_args(verb: &'static str, rest: &[&str]) -> FmResult<(String, String)> {
    match rest {
        [first, second] => Ok(((*first).to_string(), (*second).to_string())),
        _ => Err(FmError::WrongArgumentCount(verb)),
    }
}

/// Rejoin all trailing tokens with single spaces; the result must be
/// non-empty.
fn rejoined(verb: &'static str, rest: &[&str]) -> FmResult<String> {
    if rest.is_empty() {
        Err(FmError::WrongArgumentCount(verb))
    } else {
        Ok(rest.join(" "))
    }
}

fn parse_os_query(rest: &[&str]) -> FmResult<OsQuery> {
    match rest {
        [flag] => OsQuery::from_flag(flag)
            .ok_or_else(|| FmError::UnknownFlag((*flag).to_string())),
        [] => Err(FmError::MissingFlag),
        _ => Err(FmError::UnexpectedArguments("os")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_verb_is_rejected() {
        assert!(matches!(
            parse_line("frobnicate"),
            Err(FmError::UnknownCommand(v)) if v == "frobnicate"
        ));
    }

    #[test]
    fn exit_ignores_trailing_tokens() {
        assert_eq!(parse_line(".exit").unwrap(), Command::Exit);
        assert_eq!(parse_line(".exit now").unwrap(), Command::Exit);
    }

    #[test]
    fn ls_and_up_reject_extra_arguments() {
        assert!(matches!(
            parse_line("ls extra"),
            Err(FmError::UnexpectedArguments("ls"))
        ));
        assert!(matches!(
            parse_line("up .."),
            Err(FmError::UnexpectedArguments("up"))
        ));
        assert_eq!(parse_line("ls").unwrap(), Command::Ls);
        assert_eq!(parse_line("up").unwrap(), Command::Up);
    }

    #[test]
    fn positional_verbs_require_exact_counts() {
        assert!(matches!(
            parse_line("rm"),
            Err(FmError::WrongArgumentCount("rm"))
        ));
        assert!(matches!(
            parse_line("rn only-one"),
            Err(FmError::WrongArgumentCount("rn"))
        ));
        assert!(matches!(
            parse_line("cp a b c"),
            Err(FmError::WrongArgumentCount("cp"))
        ));
        assert!(matches!(
            parse_line("mv lonely"),
            Err(FmError::WrongArgumentCount("mv"))
        ));
        assert_eq!(
            parse_line("cp a b").unwrap(),
            Command::Copy {
                from: "a".into(),
                to: "b".into()
            }
        );
    }

    #[test]
    fn add_rejoins_name_with_spaces() {
        assert_eq!(
            parse_line("add my   notes.txt").unwrap(),
            Command::Add {
                name: "my notes.txt".into()
            }
        );
        assert!(matches!(
            parse_line("add"),
            Err(FmError::WrongArgumentCount("add"))
        ));
    }

    #[test]
    fn hash_accepts_empty_and_rejoined_text() {
        assert_eq!(parse_line("hash").unwrap(), Command::Hash { text: String::new() });
        assert_eq!(
            parse_line("hash hello   world").unwrap(),
            Command::Hash {
                text: "hello world".into()
            }
        );
    }

    #[test]
    fn os_flags_parse_exactly() {
        assert_eq!(
            parse_line("os --cpus").unwrap(),
            Command::Os {
                query: OsQuery::Cpus
            }
        );
        assert_eq!(
            parse_line("os --EOL").unwrap(),
            Command::Os { query: OsQuery::Eol }
        );
        assert!(matches!(parse_line("os"), Err(FmError::MissingFlag)));
        assert!(matches!(
            parse_line("os --memory"),
            Err(FmError::UnknownFlag(f)) if f == "--memory"
        ));
        assert!(matches!(
            parse_line("os --cpus extra"),
            Err(FmError::UnexpectedArguments("os"))
        ));
    }
}
