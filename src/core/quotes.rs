//! Quotes file: one candidate per line.
//!
//! Lookup order: an explicit path, `quotes.txt` in the working directory,
//! `quotes.txt` in the config directory, then the list compiled into the binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "quotes.txt";

/// Quotes shipped with the binary.
const BUILTIN: &str = include_str!("../../config/quotes.txt");

/// Error reading a quotes file.
#[derive(Debug, thiserror::Error)]
#[error("Failed to read quotes file {}: {source}", .path.display())]
pub struct QuotesError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

/// Where candidates are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotesSource {
    File(PathBuf),
    Builtin,
}

impl std::fmt::Display for QuotesSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotesSource::File(path) => write!(f, "{}", path.display()),
            QuotesSource::Builtin => write!(f, "(built-in)"),
        }
    }
}

/// Pick the quotes source. An explicit path wins even if it does not exist.
pub fn resolve(explicit: Option<&Path>, cwd: &Path, config_dir: Option<&Path>) -> QuotesSource {
    if let Some(path) = explicit {
        return QuotesSource::File(path.to_path_buf());
    }
    let local = cwd.join(FILE_NAME);
    if local.is_file() {
        return QuotesSource::File(local);
    }
    if let Some(dir) = config_dir
        && dir.join(FILE_NAME).is_file()
    {
        return QuotesSource::File(dir.join(FILE_NAME));
    }
    QuotesSource::Builtin
}

/// Split file content into quotes. Skips blank lines; tolerates CRLF.
pub fn parse(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Read every quote from `source`.
pub fn load(source: &QuotesSource) -> Result<Vec<String>, QuotesError> {
    match source {
        QuotesSource::File(path) => {
            let content = fs::read_to_string(path).map_err(|source| QuotesError {
                path: path.clone(),
                source,
            })?;
            Ok(parse(&content))
        }
        QuotesSource::Builtin => Ok(parse(BUILTIN)),
    }
}
