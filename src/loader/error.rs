use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading the input mailing list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV file is empty or has no header")]
    Empty,
    #[error("CSV header row could not be read: {source}")]
    MissingHeader {
        #[source]
        source: csv::Error,
    },
    #[error("no 'email' column found in CSV headers")]
    MissingEmailColumn,
    #[error("CSV read failed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    pub(crate) fn open(path: &Path, source: std::io::Error) -> Self {
        Self::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn header(source: csv::Error) -> Self {
        Self::MissingHeader { source }
    }

    pub(crate) fn read(line: usize, source: csv::Error) -> Self {
        Self::Read { line, source }
    }
}
