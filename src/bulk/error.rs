use std::time::Duration;

use thiserror::Error;

/// Errors raised while driving a bulk verification job.
#[derive(Debug, Error)]
pub enum BulkError {
    #[error("cannot prepare submission file: {source}")]
    Submission {
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}: {body}")]
    Http {
        url: String,
        status: u16,
        body: String,
    },
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("validation job {job_id} failed with status '{status}'")]
    JobFailed { job_id: String, status: String },
    #[error(
        "validation job {job_id} timed out after {} seconds ({attempts} status checks); run it again later",
        .waited.as_secs()
    )]
    JobTimeout {
        job_id: String,
        attempts: u32,
        waited: Duration,
    },
    #[error("validation job {job_id} completed without a CSV download URL")]
    MissingDownloadUrl { job_id: String },
    #[error("results archive is unreadable: {source}")]
    Archive {
        #[source]
        source: zip::result::ZipError,
    },
    #[error("results archive contains no entries")]
    EmptyArchive,
    #[error("cannot read results entry: {source}")]
    ReadEntry {
        #[source]
        source: std::io::Error,
    },
    #[error("results CSV is empty or has no header")]
    MissingResultHeader,
    #[error("results CSV does not contain the required 'address' column")]
    MissingAddressColumn,
    #[error("results CSV is malformed: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl BulkError {
    pub(crate) fn submission(source: impl Into<std::io::Error>) -> Self {
        Self::Submission {
            source: source.into(),
        }
    }

    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn decode(url: &str, source: reqwest::Error) -> Self {
        Self::Decode {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn archive(source: zip::result::ZipError) -> Self {
        Self::Archive { source }
    }

    pub(crate) fn csv(source: csv::Error) -> Self {
        Self::Csv { source }
    }

    /// `true` for errors reported by the provider about the job itself.
    pub fn is_job_error(&self) -> bool {
        matches!(self, Self::JobFailed { .. } | Self::JobTimeout { .. })
    }
}
