use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::PipelineError;
use crate::verdict::ValidationResult;

/// Writes `emails` as a one-column CSV with header `email`.
pub fn write_cleaned_list<S: AsRef<str>>(path: &Path, emails: &[S]) -> Result<(), PipelineError> {
    StagedFile::write(path, &cleaned_csv(path, emails)?)?.commit()
}

/// Writes removed addresses with the fields that explain their removal.
pub fn write_removed_list<'a, I>(path: &Path, removed: I) -> Result<(), PipelineError>
where
    I: IntoIterator<Item = &'a ValidationResult>,
{
    StagedFile::write(path, &removed_csv(path, removed)?)?.commit()
}

pub(crate) fn cleaned_csv<S: AsRef<str>>(path: &Path, emails: &[S]) -> Result<Vec<u8>, PipelineError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["email"])
        .map_err(|err| PipelineError::write(path, err))?;
    for email in emails {
        let email: &str = email.as_ref();
        wtr.write_record([email])
            .map_err(|err| PipelineError::write(path, err))?;
    }
    wtr.into_inner()
        .map_err(|err| PipelineError::write(path, err.into_error()))
}

pub(crate) fn removed_csv<'a, I>(path: &Path, removed: I) -> Result<Vec<u8>, PipelineError>
where
    I: IntoIterator<Item = &'a ValidationResult>,
{
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["email", "result", "risk", "reason"])
        .map_err(|err| PipelineError::write(path, err))?;
    for result in removed {
        wtr.write_record([
            result.address.as_str(),
            result.result.as_str(),
            result.risk.as_str(),
            result.reason.as_deref().unwrap_or(""),
        ])
        .map_err(|err| PipelineError::write(path, err))?;
    }
    wtr.into_inner()
        .map_err(|err| PipelineError::write(path, err.into_error()))
}

/// Fully written and synced `<path>.tmp`, renamed over `path` on commit.
/// The temporary file is removed if the handle is dropped uncommitted.
#[derive(Debug)]
pub(crate) struct StagedFile {
    path: PathBuf,
    tmp: PathBuf,
    committed: bool,
}

impl StagedFile {
    pub(crate) fn write(path: &Path, bytes: &[u8]) -> Result<Self, PipelineError> {
        let mut tmp = OsString::from(path.as_os_str());
        tmp.push(".tmp");
        let staged = Self {
            path: path.to_path_buf(),
            tmp: PathBuf::from(tmp),
            committed: false,
        };
        // from here on, an early return drops `staged` and removes the tmp file
        let mut f = File::create(&staged.tmp).map_err(|err| PipelineError::write(path, err))?;
        f.write_all(bytes)
            .map_err(|err| PipelineError::write(path, err))?;
        f.sync_all().map_err(|err| PipelineError::write(path, err))?;
        Ok(staged)
    }

    pub(crate) fn commit(mut self) -> Result<(), PipelineError> {
        fs::rename(&self.tmp, &self.path).map_err(|err| PipelineError::write(&self.path, err))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.tmp);
        }
    }
}
