//! Reads a mailing list from CSV.
//!
//! [`load_addresses`] is the lenient variant: it looks for an `email` header
//! and falls back to the first column. [`load_records`] requires the header
//! and keeps the other cells of each row as metadata. Both normalize
//! addresses (trim + lower-case), drop values without an `@`, keep the first
//! occurrence of duplicates and skip malformed rows with a warning.

mod error;
mod types;

pub use error::LoadError;
pub use types::{EmailAddress, EmailRecord};

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

/// Loads unique addresses from the CSV file at `path`.
pub fn load_addresses(path: impl AsRef<Path>) -> Result<Vec<EmailAddress>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| LoadError::open(path, err))?;
    let emails = read_addresses(file)?;
    info!("loaded {} email addresses from {}", emails.len(), path.display());
    Ok(emails)
}

/// Same as [`load_addresses`] over any reader.
pub fn read_addresses<R: Read>(reader: R) -> Result<Vec<EmailAddress>, LoadError> {
    let mut rdr = csv_reader(reader);
    let headers = read_headers(&mut rdr)?;
    let column = email_column(&headers).unwrap_or(0);

    let mut seen = HashSet::new();
    let mut emails = Vec::new();
    for_each_row(&mut rdr, |row| {
        if let Some(email) = row.get(column).and_then(EmailAddress::parse) {
            if seen.insert(email.clone()) {
                emails.push(email);
            }
        }
    })?;
    Ok(emails)
}

/// Loads unique [`EmailRecord`]s; the file must have an `email` header.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<EmailRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| LoadError::open(path, err))?;
    let records = read_records(file)?;
    info!("loaded {} email records from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_records<R: Read>(reader: R) -> Result<Vec<EmailRecord>, LoadError> {
    let mut rdr = csv_reader(reader);
    let headers = read_headers(&mut rdr)?;
    let column = email_column(&headers).ok_or(LoadError::MissingEmailColumn)?;

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for_each_row(&mut rdr, |row| {
        let Some(email) = row.get(column).and_then(EmailAddress::parse) else {
            return;
        };
        if !seen.insert(email.clone()) {
            return;
        }
        let metadata: BTreeMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .enumerate()
            .filter(|(idx, (_, value))| *idx != column && !value.trim().is_empty())
            .map(|(_, (key, value))| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        records.push(EmailRecord::with_metadata(email, metadata));
    })?;
    Ok(records)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
}

fn read_headers<R: Read>(rdr: &mut csv::Reader<R>) -> Result<StringRecord, LoadError> {
    let headers = rdr.headers().map_err(LoadError::header)?.clone();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(headers)
}

fn email_column(headers: &StringRecord) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("email"))
}

/// Feeds every well-formed row to `on_row`. Malformed rows are skipped with
/// a warning; an I/O failure aborts the load.
fn for_each_row<R, F>(rdr: &mut csv::Reader<R>, mut on_row: F) -> Result<(), LoadError>
where
    R: Read,
    F: FnMut(&StringRecord),
{
    let mut row = StringRecord::new();
    // header is line 1
    let mut line = 1usize;
    loop {
        line += 1;
        match rdr.read_record(&mut row) {
            Ok(true) => on_row(&row),
            Ok(false) => return Ok(()),
            Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => {
                return Err(LoadError::read(line, err));
            }
            Err(err) => warn!(line, error = %err, "skipping malformed row"),
        }
    }
}
