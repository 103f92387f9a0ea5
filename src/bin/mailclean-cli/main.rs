mod args;
mod jobs;
mod output;
mod validate;

use std::path::Path;

use anyhow::Result;
use args::{Cli, Commands};
use mailclean_lib::{PipelineError, RunOutcome, run_with_config};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // les logs vont sur stderr, stdout reste réservé au rapport
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn clean(cli: &Cli, input: &Path) -> Result<()> {
    output::check_format(&cli.format)?;
    let config = cli.provider_config()?;
    let options = cli.pipeline_options(input.to_path_buf());

    let outcome = run_with_config(&config, &options).inspect_err(|err| {
        if let Some(hint) = rerun_hint(err) {
            eprintln!("  -> {hint}");
        }
    })?;
    match outcome {
        RunOutcome::NothingToValidate => {
            println!("No valid email addresses found in the file to validate.");
        }
        RunOutcome::Completed(summary) => output::write_summary(&summary, &cli.format)?,
    }
    Ok(())
}

// pas de reprise partielle : un job échoué ou expiré se relance en entier
fn rerun_hint(err: &PipelineError) -> Option<&'static str> {
    match err {
        PipelineError::Bulk(bulk) if bulk.is_job_error() => {
            Some("relancez le nettoyage complet plus tard")
        }
        _ => None,
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    // codes de sortie : 0 OK, 1 fatal
    match (&cli.cmd, &cli.input) {
        (Some(Commands::Validate { email, format }), _) => validate::run(&cli, email, format),
        (Some(Commands::Jobs), _) => jobs::run(&cli),
        (Some(Commands::Previews), _) => jobs::run_previews(&cli),
        (None, Some(input)) => clean(&cli, input),
        (None, None) => {
            Cli::clap_command().print_help()?;
            println!();
            Ok(())
        }
    }
}
