use std::thread;

use tracing::info;

use super::{BulkError, JobStatus, PollOptions, VerificationApi};

/// Progress of a bulk job between status checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    Pending { attempts: u32 },
    Succeeded(JobStatus),
    Failed(JobStatus),
    TimedOut { attempts: u32 },
}

impl JobState {
    pub fn start() -> Self {
        Self::Pending { attempts: 0 }
    }

    /// Applies one status report. Terminal states absorb further reports.
    ///
    /// `uploaded` means results are ready; `failed` is final; any other
    /// status stays pending until `max_attempts` checks have been made.
    pub fn advance(self, status: JobStatus, max_attempts: u32) -> Self {
        let Self::Pending { attempts } = self else {
            return self;
        };
        let attempts = attempts + 1;
        let label = status.status.trim().to_ascii_lowercase();
        match label.as_str() {
            "uploaded" => Self::Succeeded(status),
            "failed" => Self::Failed(status),
            _ if attempts >= max_attempts.max(1) => Self::TimedOut { attempts },
            _ => Self::Pending { attempts },
        }
    }
}

/// Polls `job_id` until it reaches a terminal state. The first check is
/// immediate; later ones wait `options.interval`.
pub fn poll_until_complete<A: VerificationApi>(
    api: &A,
    job_id: &str,
    options: &PollOptions,
) -> Result<JobStatus, BulkError> {
    info!("waiting for validation job {job_id} to complete");
    let mut state = JobState::start();
    loop {
        state = match state {
            JobState::Pending { attempts } => {
                if attempts > 0 {
                    thread::sleep(options.interval);
                }
                let status = api.job_status(job_id)?;
                info!(
                    poll = attempts + 1,
                    status = %status.status,
                    quantity = status.quantity,
                    processed = status.records_processed,
                    "job status"
                );
                JobState::Pending { attempts }.advance(status, options.attempts())
            }
            JobState::Succeeded(status) => {
                info!("validation job {job_id} completed");
                return Ok(status);
            }
            JobState::Failed(status) => {
                return Err(BulkError::JobFailed {
                    job_id: job_id.to_string(),
                    status: status.status,
                });
            }
            JobState::TimedOut { attempts } => {
                return Err(BulkError::JobTimeout {
                    job_id: job_id.to_string(),
                    attempts,
                    waited: options.ceiling(),
                });
            }
        };
    }
}
