//! Bulk verification against an asynchronous job API.
//!
//! [`validate_email_list`] writes the addresses to a temporary CSV, creates a
//! job, polls it with a fixed interval until it is `uploaded`, `failed` or out
//! of attempts, then downloads and parses the zipped result CSV. The
//! temporary file is removed on every path.

mod api;
mod error;
mod mailgun;
mod options;
mod poll;
mod results;
mod submit;

pub use api::{
    DownloadUrl, JobCreated, JobList, JobStatus, PreviewJob, PreviewList, VerificationApi,
};
pub use error::BulkError;
pub use mailgun::MailgunClient;
pub use options::PollOptions;
pub use poll::{JobState, poll_until_complete};
pub use results::{parse_results_archive, parse_results_csv};

use std::path::Path;

use tracing::{info, warn};

use crate::verdict::ValidationResults;

/// Runs one bulk job for `emails` and returns the parsed results.
pub fn validate_email_list<A, S>(
    api: &A,
    emails: &[S],
    options: &PollOptions,
) -> Result<ValidationResults, BulkError>
where
    A: VerificationApi,
    S: AsRef<str>,
{
    let submission = submit::write_submission(emails)?;
    let job_id = submit::new_job_id();
    info!("creating bulk validation job with ID: {job_id}");

    let outcome = run_job(api, &job_id, submission.path(), options);

    match submission.close() {
        Ok(()) => info!("cleaned up local temp file"),
        Err(err) => warn!(error = %err, "could not remove temp submission file"),
    }
    outcome
}

fn run_job<A: VerificationApi>(
    api: &A,
    job_id: &str,
    list: &Path,
    options: &PollOptions,
) -> Result<ValidationResults, BulkError> {
    let created = api.create_job(job_id, list)?;
    info!("{}", created.message);

    let completed = poll_until_complete(api, job_id, options)?;
    let url = completed
        .csv_url()
        .ok_or_else(|| BulkError::MissingDownloadUrl {
            job_id: job_id.to_string(),
        })?;

    info!("downloading validation results");
    let archive = api.download_results(url)?;
    parse_results_archive(&archive)
}
