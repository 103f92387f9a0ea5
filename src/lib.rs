#![forbid(unsafe_code)]
//! mailclean_lib : nettoyage de listes e-mail via la validation bulk Mailgun

pub mod bulk;
pub mod config;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod verdict;

pub use bulk::{
    BulkError, JobList, JobState, JobStatus, MailgunClient, PollOptions, PreviewJob, PreviewList,
    VerificationApi, validate_email_list,
};
pub use config::{ConfigError, ProviderConfig};
pub use filter::{FilteredMailingList, ListReport};
pub use loader::{
    EmailAddress, EmailRecord, LoadError, load_addresses, load_records, read_addresses,
    read_records,
};
pub use pipeline::{
    PipelineError, PipelineOptions, RunOutcome, RunSummary, run, run_with_config,
    write_cleaned_list,
};
pub use verdict::{Deliverability, RemovalReason, Risk, ValidationResult, ValidationResults};
