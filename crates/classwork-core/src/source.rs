//! Line-oriented text sources for factory construction

use crate::error::SourceError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Something that can hand back the first line of a named text resource
pub trait LineReader {
    /// The first line of `path`, without its line terminator
    fn read_first_line(&self, path: &Path) -> Result<String, SourceError>;
}

/// Reads from the local filesystem
///
/// The file handle is dropped as soon as the line is read, or as soon as opening
/// or reading fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLineReader;

impl LineReader for FileLineReader {
    fn read_first_line(&self, path: &Path) -> Result<String, SourceError> {
        let io_error = |source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let mut reader = BufReader::new(file);
        let mut line = String::new();
        reader.read_line(&mut line).map_err(io_error)?;

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        debug!(path = %path.display(), line = %line, "read first line");
        Ok(line)
    }
}
