use std::path::PathBuf;

use thiserror::Error;

use crate::bulk::BulkError;
use crate::config::ConfigError;
use crate::loader::LoadError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load mailing list: {0}")]
    Load(#[from] LoadError),
    #[error("bulk validation failed: {0}")]
    Bulk(#[from] BulkError),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}
