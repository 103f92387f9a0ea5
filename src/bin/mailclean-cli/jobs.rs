use anyhow::Result;
use mailclean_lib::{BulkError, JobStatus, MailgunClient, PreviewJob};

use crate::args::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let client = MailgunClient::new(&cli.provider_config()?)?;
    let list = client.list_jobs().inspect_err(|err| {
        if let Some(hint) = jobs_hint(err) {
            eprintln!("  -> {hint}");
        }
    })?;

    println!("Bulk validation endpoint accessible.");
    println!("Found {} existing validation jobs", list.jobs.len());
    for job in &list.jobs {
        println!("{}", job_line(job));
    }
    if let Some(total) = list.total {
        println!("total: {total}");
    }
    Ok(())
}

pub fn run_previews(cli: &Cli) -> Result<()> {
    let client = MailgunClient::new(&cli.provider_config()?)?;
    let list = client.list_previews().inspect_err(|err| {
        if let Some(hint) = preview_hint(err) {
            eprintln!("  -> {hint}");
        }
    })?;

    println!("Bulk preview endpoint accessible.");
    println!("Found {} existing preview jobs", list.previews.len());
    for preview in &list.previews {
        println!("{}", preview_line(preview));
    }
    Ok(())
}

fn jobs_hint(err: &BulkError) -> Option<&'static str> {
    match err {
        BulkError::Http { status: 403, .. } => Some(
            "la validation bulk n'est pas activée pour ce compte, \
             ou la clé API n'a pas les droits nécessaires (vérifiez aussi la région avec --eu)",
        ),
        BulkError::Http { status: 404, .. } => Some(
            "les endpoints de validation bulk n'existent pas à cette adresse (vérifiez --api-base)",
        ),
        BulkError::Http { .. } => Some("problème d'accès ou de configuration côté Mailgun"),
        _ => None,
    }
}

fn preview_hint(err: &BulkError) -> Option<&'static str> {
    let BulkError::Http { body, .. } = err else {
        return None;
    };
    let body = body.to_ascii_lowercase();
    if body.contains("paid accounts") {
        Some("la preview bulk nécessite un compte payant")
    } else if body.contains("feature unavailable") {
        Some("la preview bulk doit être activée pour ce compte")
    } else {
        None
    }
}

fn job_line(job: &JobStatus) -> String {
    format!(
        "{:<32} {:<12} {}/{}",
        job.id.as_deref().unwrap_or("-"),
        job.status,
        job.records_processed,
        job.quantity
    )
}

fn preview_line(preview: &PreviewJob) -> String {
    let valid = match preview.valid {
        Some(true) => "valid",
        Some(false) => "invalid",
        None => "-",
    };
    format!(
        "{:<32} {:<20} {:>6} {valid}",
        preview.id.as_deref().unwrap_or("-"),
        preview.status,
        preview.quantity
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> BulkError {
        BulkError::Http {
            url: "https://api.mailgun.net/v4/address/validate/bulk".to_string(),
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn job_line_shows_progress() {
        let mut job = JobStatus::new("uploading").with_progress(10, 4);
        job.id = Some("validation-job-1".to_string());
        let line = job_line(&job);
        assert!(line.starts_with("validation-job-1"));
        assert!(line.contains("uploading"));
        assert!(line.ends_with("4/10"));
    }

    #[test]
    fn job_line_without_id() {
        assert!(job_line(&JobStatus::new("failed")).starts_with('-'));
    }

    #[test]
    fn forbidden_and_missing_endpoints_get_distinct_hints() {
        let forbidden = jobs_hint(&http(403, "Forbidden")).unwrap();
        let missing = jobs_hint(&http(404, "Not Found")).unwrap();
        assert!(forbidden.contains("pas activée"));
        assert!(missing.contains("n'existent pas"));
        assert!(jobs_hint(&http(500, "")).is_some());
        assert!(jobs_hint(&BulkError::EmptyArchive).is_none());
    }

    #[test]
    fn preview_hints_follow_provider_message() {
        let paid = preview_hint(&http(403, "Only available for Paid Accounts")).unwrap();
        assert!(paid.contains("compte payant"));
        let inactive = preview_hint(&http(400, "feature unavailable")).unwrap();
        assert!(inactive.contains("activée"));
        assert!(preview_hint(&http(500, "boom")).is_none());
    }

    #[test]
    fn preview_line_shows_validity() {
        let preview = PreviewJob {
            id: Some("p-1".to_string()),
            status: "preview_complete".to_string(),
            quantity: 8,
            valid: Some(true),
        };
        let line = preview_line(&preview);
        assert!(line.starts_with("p-1"));
        assert!(line.ends_with("8 valid"));
    }
}
