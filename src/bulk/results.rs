use std::io::{Cursor, Read};

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};
use zip::ZipArchive;

use super::BulkError;
use crate::verdict::{Deliverability, Risk, ValidationResult, ValidationResults};

/// Decompresses the results archive and parses its CSV entry.
pub fn parse_results_archive(bytes: &[u8]) -> Result<ValidationResults, BulkError> {
    let entry = extract_results_entry(bytes)?;
    parse_results_csv(entry.as_slice())
}

/// Reads the first `.csv` entry of the archive, or its first entry when
/// none is named `.csv`.
pub(crate) fn extract_results_entry(bytes: &[u8]) -> Result<Vec<u8>, BulkError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(BulkError::archive)?;
    if archive.is_empty() {
        return Err(BulkError::EmptyArchive);
    }
    if archive.len() > 1 {
        warn!(entries = archive.len(), "results archive has more than one entry");
    }

    let mut index = 0;
    for i in 0..archive.len() {
        let file = archive.by_index(i).map_err(BulkError::archive)?;
        if file.name().to_ascii_lowercase().ends_with(".csv") {
            index = i;
            break;
        }
    }

    let mut entry = archive.by_index(index).map_err(BulkError::archive)?;
    let mut buf = Vec::new();
    entry
        .read_to_end(&mut buf)
        .map_err(|source| BulkError::ReadEntry { source })?;
    Ok(buf)
}

/// Parses the provider CSV. `address` is required; `result`, `risk`,
/// `reason`, `is_disposable_address` and `is_role_address` are optional.
pub fn parse_results_csv<R: Read>(reader: R) -> Result<ValidationResults, BulkError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers().map_err(BulkError::csv)?.clone();
    if headers.is_empty() {
        return Err(BulkError::MissingResultHeader);
    }
    let columns = ResultColumns::from_headers(&headers)?;

    let mut results = ValidationResults::new();
    for (idx, row) in rdr.records().enumerate() {
        let row = row.map_err(BulkError::csv)?;
        match columns.read(&row) {
            Some(result) => {
                results.insert(result.address.clone(), result);
            }
            None => warn!(line = idx + 2, "skipping result row without address"),
        }
    }
    info!("parsed {} validation results", results.len());
    Ok(results)
}

#[derive(Debug, Clone, Copy)]
struct ResultColumns {
    address: usize,
    result: Option<usize>,
    risk: Option<usize>,
    reason: Option<usize>,
    disposable: Option<usize>,
    role: Option<usize>,
}

impl ResultColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self, BulkError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        Ok(Self {
            address: find("address").ok_or(BulkError::MissingAddressColumn)?,
            result: find("result"),
            risk: find("risk"),
            reason: find("reason"),
            disposable: find("is_disposable_address"),
            role: find("is_role_address"),
        })
    }

    fn read(&self, row: &StringRecord) -> Option<ValidationResult> {
        let address = row.get(self.address)?.trim();
        if address.is_empty() {
            return None;
        }
        let cell = |column: Option<usize>| column.and_then(|idx| row.get(idx));

        let mut result = ValidationResult::new(address);
        if let Some(value) = cell(self.result) {
            result.result = Deliverability::parse(value);
        }
        if let Some(value) = cell(self.risk) {
            result.risk = Risk::parse(value);
        }
        if let Some(value) = cell(self.reason) {
            result = result.with_reason(value.trim());
        }
        if let Some(value) = cell(self.disposable) {
            result.is_disposable = parse_bool(value);
        }
        if let Some(value) = cell(self.role) {
            result.is_role = parse_bool(value);
        }
        Some(result)
    }
}

fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
