use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::NamedTempFile;

use super::BulkError;

/// `validation-job-<unix millis>-<random suffix>`.
pub(crate) fn new_job_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("validation-job-{millis}-{:04x}", rand::random::<u16>())
}

/// Writes `emails` to a temporary single-column CSV (header `email`).
/// The file is removed when the returned handle is closed or dropped.
pub(crate) fn write_submission<S: AsRef<str>>(emails: &[S]) -> Result<NamedTempFile, BulkError> {
    let mut file = tempfile::Builder::new()
        .prefix("mailgun-emails-")
        .suffix(".csv")
        .tempfile()
        .map_err(BulkError::submission)?;
    {
        let mut wtr = csv::Writer::from_writer(file.as_file_mut());
        wtr.write_record(["email"]).map_err(BulkError::submission)?;
        for email in emails {
            let email: &str = email.as_ref();
            wtr.write_record([email]).map_err(BulkError::submission)?;
        }
        wtr.flush().map_err(BulkError::submission)?;
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ids_are_prefixed_and_distinct() {
        let a = new_job_id();
        let b = new_job_id();
        assert!(a.starts_with("validation-job-"));
        assert_ne!(a, b);
    }

    #[test]
    fn submission_has_email_header_and_one_address_per_line() {
        let file = write_submission(&["a@x.com", "b@y.org"]).expect("write succeeds");
        let content = std::fs::read_to_string(file.path()).expect("readable");
        assert_eq!(content, "email\na@x.com\nb@y.org\n");
    }

    #[test]
    fn submission_is_removed_on_drop() {
        let file = write_submission(&["a@x.com"]).expect("write succeeds");
        let path = file.path().to_path_buf();
        assert!(path.exists());
        drop(file);
        assert!(!path.exists());
    }
}
