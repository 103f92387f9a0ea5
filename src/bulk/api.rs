use std::path::Path;

use serde::Deserialize;

use super::BulkError;

/// Acknowledgement returned when a job is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobCreated {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DownloadUrl {
    #[serde(default)]
    pub csv: Option<String>,
    #[serde(default)]
    pub json: Option<String>,
}

/// Snapshot of a bulk job as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobStatus {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub records_processed: u64,
    #[serde(default)]
    pub download_url: Option<DownloadUrl>,
}

impl JobStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, quantity: u64, records_processed: u64) -> Self {
        self.quantity = quantity;
        self.records_processed = records_processed;
        self
    }

    pub fn with_csv_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(DownloadUrl {
            csv: Some(url.into()),
            json: None,
        });
        self
    }

    pub fn csv_url(&self) -> Option<&str> {
        self.download_url
            .as_ref()
            .and_then(|urls| urls.csv.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}

/// Listing of the account's bulk jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<JobStatus>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// One bulk preview (sampled estimate of a list's quality).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub valid: Option<bool>,
}

/// Listing of the account's bulk previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewList {
    #[serde(default, rename = "preview", alias = "previews")]
    pub previews: Vec<PreviewJob>,
}

/// Asynchronous bulk verification service.
///
/// [`MailgunClient`](super::MailgunClient) talks to the real provider; tests
/// drive the job flow through stub implementations.
pub trait VerificationApi {
    /// Submits the single-column CSV at `list` under `job_id`.
    fn create_job(&self, job_id: &str, list: &Path) -> Result<JobCreated, BulkError>;

    fn job_status(&self, job_id: &str) -> Result<JobStatus, BulkError>;

    /// Fetches the compressed results artifact.
    fn download_results(&self, url: &str) -> Result<Vec<u8>, BulkError>;
}
