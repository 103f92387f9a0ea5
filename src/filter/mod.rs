//! Splits verification results into the addresses to keep and those to drop.

mod report;

pub use report::ListReport;

use tracing::info;

use crate::verdict::{RemovalReason, ValidationResult, ValidationResults};

/// Safe and removed addresses, in the order they were added, plus every
/// result keyed by address. Each address sits in exactly one of the two lists.
#[derive(Debug, Clone, Default)]
pub struct FilteredMailingList {
    safe: Vec<String>,
    removed: Vec<String>,
    all: ValidationResults,
}

impl FilteredMailingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every entry of `results` in map order.
    pub fn from_results(results: ValidationResults) -> Self {
        let mut list = Self::new();
        for (email, result) in results {
            list.add_address(email, result);
        }
        list
    }

    /// Records `result` and files `email` as safe or removed. Adding the same
    /// address again replaces its previous classification.
    pub fn add_address(&mut self, email: impl Into<String>, result: ValidationResult) {
        let email = email.into().trim().to_lowercase();
        if self.all.contains_key(&email) {
            self.safe.retain(|e| *e != email);
            self.removed.retain(|e| *e != email);
        }
        if result.is_safe_for_sending() {
            self.safe.push(email.clone());
        } else {
            self.removed.push(email.clone());
        }
        self.all.insert(email, result);
    }

    pub fn safe_addresses(&self) -> &[String] {
        &self.safe
    }

    pub fn removed_addresses(&self) -> &[String] {
        &self.removed
    }

    pub fn results(&self) -> &ValidationResults {
        &self.all
    }

    /// Removed addresses paired with their result, in removal order.
    pub fn removed_results(&self) -> impl Iterator<Item = &ValidationResult> + '_ {
        self.removed.iter().filter_map(|email| self.all.get(email))
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Builds the summary and logs it.
    pub fn generate_report(&self) -> ListReport {
        let mut report = ListReport::new(self.safe.len(), self.removed.len());
        for result in self.removed_results() {
            match result.removal_reason() {
                Some(RemovalReason::Undeliverable) => report.removed_undeliverable += 1,
                Some(RemovalReason::HighRisk) => report.removed_high_risk += 1,
                Some(RemovalReason::Disposable) => report.removed_disposable += 1,
                None => {}
            }
        }
        report.safe_role_addresses = self
            .safe
            .iter()
            .filter_map(|email| self.all.get(email))
            .filter(|r| r.is_role)
            .count();

        if report.is_empty() {
            info!("no addresses processed");
        } else {
            info!(
                total = report.total,
                safe = report.safe,
                removed = report.removed,
                "safe to send: {:.1}%, removed: {:.1}%",
                report.safe_percent,
                report.removed_percent
            );
        }
        report
    }
}

#[cfg(test)]
mod tests;
