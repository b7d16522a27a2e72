use crate::errors::FmResult;
use crate::session::Session;
use std::fmt;
use std::fs;
use std::path::Path;

/// What a listing entry is, for the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Folder => write!(f, "folder"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// One row of `ls` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

/// Read a directory into display order: folders first, then files, each
/// group sorted by case-insensitive name. Fails as a whole on any read
/// error; there is no partial listing.
pub fn read_entries(dir: &Path) -> FmResult<Vec<Entry>> {
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            folders.push(Entry {
                name,
                kind: EntryKind::Folder,
            });
        } else {
            files.push(Entry {
                name,
                kind: EntryKind::File,
            });
        }
    }

    // Stable sort keeps ties in directory order
    folders.sort_by_key(|e| e.name.to_uppercase());
    files.sort_by_key(|e| e.name.to_uppercase());

    folders.append(&mut files);
    Ok(folders)
}

/// Render entries as an index/name/type table.
pub fn render_table(entries: &[Entry]) -> String {
    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .chain(std::iter::once("name".len()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<7} {:<width$} {}\n",
        "(index)",
        "name",
        "type",
        width = name_width
    ));
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:<7} {:<width$} {}\n",
            index,
            entry.name,
            entry.kind,
            width = name_width
        ));
    }
    out
}

pub fn print_listing(session: &Session) -> FmResult<()> {
    let entries = read_entries(session.cwd())?;
    print!("{}", render_table(&entries));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn folders_sort_before_files_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        File::create(dir.path().join("beta.txt")).unwrap();
        File::create(dir.path().join("ALBUM.txt")).unwrap();

        let entries = read_entries(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "zeta", "ALBUM.txt", "beta.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Folder);
        assert_eq!(entries[1].kind, EntryKind::Folder);
        assert_eq!(entries[2].kind, EntryKind::File);
        assert_eq!(entries[3].kind, EntryKind::File);
    }

    #[test]
    fn missing_directory_fails_without_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");
        assert!(read_entries(&gone).is_err());
    }

    #[test]
    fn table_has_header_and_indexed_rows() {
        let entries = vec![
            Entry {
                name: "docs".into(),
                kind: EntryKind::Folder,
            },
            Entry {
                name: "a.txt".into(),
                kind: EntryKind::File,
            },
        ];
        let table = render_table(&entries);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].contains("(index)"));
        assert!(lines[0].contains("name"));
        assert!(lines[0].contains("type"));
        assert!(lines[1].starts_with('0'));
        assert!(lines[1].contains("docs"));
        assert!(lines[1].ends_with("folder"));
        assert!(lines[2].starts_with('1'));
        assert!(lines[2].ends_with("file"));
    }
}
