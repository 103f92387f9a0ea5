//! End-to-end cleaning run: load, verify, classify, write.

mod error;
mod writer;

pub use error::PipelineError;
pub use writer::{write_cleaned_list, write_removed_list};

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::bulk::{MailgunClient, PollOptions, VerificationApi, validate_email_list};
use crate::config::ProviderConfig;
use crate::filter::{FilteredMailingList, ListReport};
use crate::loader::load_addresses;
use writer::{StagedFile, cleaned_csv, removed_csv};

pub const DEFAULT_OUTPUT: &str = "cleaned_mailing_list.csv";

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub removed_output: Option<PathBuf>,
    pub poll: PollOptions,
}

impl PipelineOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            removed_output: None,
            poll: PollOptions::default(),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The input had no usable address; nothing was submitted or written.
    NothingToValidate,
    Completed(RunSummary),
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub loaded: usize,
    pub report: ListReport,
    pub output: PathBuf,
    pub removed_output: Option<PathBuf>,
}

/// Builds a [`MailgunClient`] from `config` and runs the pipeline with it.
pub fn run_with_config(
    config: &ProviderConfig,
    options: &PipelineOptions,
) -> Result<RunOutcome, PipelineError> {
    let client = MailgunClient::new(config)?;
    info!("Mailgun API client initialized");
    run(&client, options)
}

/// Runs the pipeline against `api`. Output files are only created once
/// every earlier stage has succeeded.
pub fn run<A: VerificationApi>(
    api: &A,
    options: &PipelineOptions,
) -> Result<RunOutcome, PipelineError> {
    let emails = load_addresses(&options.input)?;
    if emails.is_empty() {
        info!("no valid email addresses found in the file to validate");
        return Ok(RunOutcome::NothingToValidate);
    }

    let results = validate_email_list(api, &emails, &options.poll)?;
    let filtered = FilteredMailingList::from_results(results);
    let report = filtered.generate_report();

    // both outputs are staged before either replaces its target
    let cleaned = StagedFile::write(
        &options.output,
        &cleaned_csv(&options.output, filtered.safe_addresses())?,
    )?;
    let removed = options
        .removed_output
        .as_ref()
        .map(|path| StagedFile::write(path, &removed_csv(path, filtered.removed_results())?))
        .transpose()?;

    cleaned.commit()?;
    if let Some(removed) = removed {
        if let Err(err) = removed.commit() {
            let _ = fs::remove_file(&options.output);
            return Err(err);
        }
    }

    info!(
        "saved {} safe email addresses to {}",
        filtered.safe_addresses().len(),
        options.output.display()
    );
    if let Some(path) = &options.removed_output {
        info!(
            "saved {} removed email addresses to {}",
            filtered.removed_addresses().len(),
            path.display()
        );
    }

    Ok(RunOutcome::Completed(RunSummary {
        loaded: emails.len(),
        report,
        output: options.output.clone(),
        removed_output: options.removed_output.clone(),
    }))
}
