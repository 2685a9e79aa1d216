/// CSV output for persons and follows, plus readers for the same format.
///
/// Rows are written straight to a buffered sink: handles are rendered into
/// one reused scratch string and ids are formatted with `itoa`, so writing
/// allocates nothing per row.
///
/// The three files are staged as temporary files next to their final
/// location and renamed into place together by [`OutputFiles::commit`].
/// Dropping an uncommitted `OutputFiles` removes the temporaries.
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{GenError, Result};
use crate::follows::Follow;
use crate::person::Person;

pub const PERSONS_FILE: &str = "personen.csv";
pub const FOLLOWS_BY_ID_FILE: &str = "following_id.csv";
pub const FOLLOWS_BY_HANDLE_FILE: &str = "following_nicknamen.csv";

pub const PERSONS_HEADER: &str = "nickname,name";
pub const FOLLOWS_HEADER: &str = "p1,p2";

const BUF_CAPACITY: usize = 128 * 1024;

/// Write the header and one `handle,name` row per person.
pub fn write_persons(w: &mut impl Write, persons: &[Person<'_>]) -> io::Result<()> {
    writeln!(w, "{PERSONS_HEADER}")?;
    let mut scratch = String::new();
    for p in persons {
        scratch.clear();
        p.push_handle(&mut scratch);
        scratch.push(',');
        scratch.push_str(p.first());
        scratch.push(' ');
        scratch.push_str(p.last());
        scratch.push('\n');
        w.write_all(scratch.as_bytes())?;
    }
    Ok(())
}

/// One `source,target` row with one-based ids.
pub fn write_follow_by_id(w: &mut impl Write, follow: Follow) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    w.write_all(buf.format(u64::from(follow.source) + 1).as_bytes())?;
    w.write_all(b",")?;
    w.write_all(buf.format(u64::from(follow.target) + 1).as_bytes())?;
    w.write_all(b"\n")
}

/// One `source_handle,target_handle` row. `scratch` is reused between calls.
pub fn write_follow_by_handle(
    w: &mut impl Write,
    persons: &[Person<'_>],
    follow: Follow,
    scratch: &mut String,
) -> io::Result<()> {
    scratch.clear();
    persons[follow.source as usize].push_handle(scratch);
    scratch.push(',');
    persons[follow.target as usize].push_handle(scratch);
    scratch.push('\n');
    w.write_all(scratch.as_bytes())
}

/// A temporary file that becomes `path` on commit.
struct Staged {
    path: PathBuf,
    out: BufWriter<NamedTempFile>,
}

impl Staged {
    fn create(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(name);
        let mut builder = tempfile::Builder::new();
        // Plain-file mode (0666 less the umask) instead of tempfile's 0600.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let file = builder
            .tempfile_in(dir)
            .map_err(|e| GenError::io(&path, e))?;
        Ok(Self {
            out: BufWriter::with_capacity(BUF_CAPACITY, file),
            path,
        })
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").map_err(|e| GenError::io(&self.path, e))
    }

    fn finish(self) -> Result<(PathBuf, NamedTempFile)> {
        let Self { path, out } = self;
        let file = out
            .into_inner()
            .map_err(|e| GenError::io(&path, e.into_error()))?;
        file.as_file()
            .sync_all()
            .map_err(|e| GenError::io(&path, e))?;
        Ok((path, file))
    }
}

/// The persons file and both follows files of one run.
pub struct OutputFiles {
    persons: Staged,
    by_id: Staged,
    by_handle: Staged,
    scratch: String,
}

impl OutputFiles {
    /// Stage all three files in `dir`. Nothing at the final paths changes
    /// until [`commit`](Self::commit).
    pub fn create(dir: &Path) -> Result<Self> {
        let persons = Staged::create(dir, PERSONS_FILE)?;
        let mut by_id = Staged::create(dir, FOLLOWS_BY_ID_FILE)?;
        let mut by_handle = Staged::create(dir, FOLLOWS_BY_HANDLE_FILE)?;
        by_id.write_line(FOLLOWS_HEADER)?;
        by_handle.write_line(FOLLOWS_HEADER)?;
        Ok(Self {
            persons,
            by_id,
            by_handle,
            scratch: String::new(),
        })
    }

    pub fn write_persons(&mut self, persons: &[Person<'_>]) -> Result<()> {
        write_persons(&mut self.persons.out, persons).map_err(|e| GenError::io(&self.persons.path, e))
    }

    /// Append one edge to both follows files.
    pub fn write_follow(&mut self, persons: &[Person<'_>], follow: Follow) -> Result<()> {
        write_follow_by_id(&mut self.by_id.out, follow)
            .map_err(|e| GenError::io(&self.by_id.path, e))?;
        write_follow_by_handle(&mut self.by_handle.out, persons, follow, &mut self.scratch)
            .map_err(|e| GenError::io(&self.by_handle.path, e))
    }

    /// Flush every file, then move all three into place.
    pub fn commit(self) -> Result<()> {
        let staged = [
            self.persons.finish()?,
            self.by_id.finish()?,
            self.by_handle.finish()?,
        ];
        for (path, file) in staged {
            file.persist(&path).map_err(|e| GenError::io(&path, e.error))?;
            info!(path = %path.display(), "wrote output file");
        }
        Ok(())
    }
}

/// A row of the persons file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonRow {
    pub handle: String,
    pub name: String,
}

/// Read a persons file back.
pub fn read_persons(path: &Path) -> Result<Vec<PersonRow>> {
    read_rows(path, PERSONS_HEADER, |handle, name| {
        Ok(PersonRow {
            handle: handle.to_string(),
            name: name.to_string(),
        })
    })
}

/// Read a follows-by-id file back into zero-based edges.
pub fn read_follows_by_id(path: &Path) -> Result<Vec<Follow>> {
    read_rows(path, FOLLOWS_HEADER, |p1, p2| {
        Ok(Follow {
            source: parse_one_based(p1)?,
            target: parse_one_based(p2)?,
        })
    })
}

/// Read a follows-by-handle file back as `(source, target)` handle pairs.
pub fn read_follows_by_handle(path: &Path) -> Result<Vec<(String, String)>> {
    read_rows(path, FOLLOWS_HEADER, |p1, p2| {
        Ok((p1.to_string(), p2.to_string()))
    })
}

fn parse_one_based(field: &str) -> std::result::Result<u32, String> {
    match field.parse::<u32>() {
        Ok(0) => Err("ids are one-based, found 0".to_string()),
        Ok(id) => Ok(id - 1),
        Err(e) => Err(format!("invalid id {field:?}: {e}")),
    }
}

fn read_rows<T>(
    path: &Path,
    header: &str,
    mut row: impl FnMut(&str, &str) -> std::result::Result<T, String>,
) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| GenError::io(path, e))?;
    let parse_err = |line: usize, message: String| GenError::Parse {
        path: path.to_path_buf(),
        line,
        message,
    };

    let mut rows = Vec::new();
    let mut saw_header = false;
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| GenError::io(path, e))?;
        let lineno = i + 1;
        if !saw_header {
            if line != header {
                return Err(parse_err(
                    lineno,
                    format!("expected header {header:?}, found {line:?}"),
                ));
            }
            saw_header = true;
            continue;
        }
        let (a, b) = line
            .split_once(',')
            .ok_or_else(|| parse_err(lineno, "expected two comma-separated fields".to_string()))?;
        rows.push(row(a, b).map_err(|message| parse_err(lineno, message))?);
    }
    if !saw_header {
        return Err(parse_err(1, format!("missing header {header:?}")));
    }
    Ok(rows)
}
