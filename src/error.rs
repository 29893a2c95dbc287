use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading inputs or writing results.
///
/// Matching itself is total and never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading an input failed
    #[error("Error reading {}: {source}", display_path(.path))]
    Io {
        /// The file being read, `None` for stdin
        path: Option<PathBuf>,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
    /// Writing the results failed
    #[error("Error writing results: {0}")]
    Write(#[from] std::io::Error),
}

impl Error {
    /// Whether the error comes from a closed downstream pipe
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref().map_or_else(|| String::from("stdin"), |p| p.display().to_string())
}

/// Result type of the fallible operations of this crate
pub type Result<T> = std::result::Result<T, Error>;
