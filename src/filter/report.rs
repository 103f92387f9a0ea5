use std::fmt;

/// Counts and percentages for one cleaning run.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListReport {
    pub total: usize,
    pub safe: usize,
    pub removed: usize,
    pub safe_percent: f64,
    pub removed_percent: f64,
    pub removed_undeliverable: usize,
    pub removed_high_risk: usize,
    pub removed_disposable: usize,
    pub safe_role_addresses: usize,
}

impl ListReport {
    pub(crate) fn new(safe: usize, removed: usize) -> Self {
        let total = safe + removed;
        let (safe_percent, removed_percent) = if total == 0 {
            (0.0, 0.0)
        } else {
            let safe_percent = round1(safe as f64 / total as f64 * 100.0);
            (safe_percent, round1(100.0 - safe_percent))
        };
        Self {
            total,
            safe,
            removed,
            safe_percent,
            removed_percent,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl fmt::Display for ListReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No addresses processed.");
        }
        writeln!(f, "--- Validation Report ---")?;
        writeln!(f, "Total Addresses Processed: {}", self.total)?;
        writeln!(f, "Safe to Send: {} ({:.1}%)", self.safe, self.safe_percent)?;
        writeln!(f, "Removed: {} ({:.1}%)", self.removed, self.removed_percent)?;
        if self.removed > 0 {
            writeln!(f, "  undeliverable: {}", self.removed_undeliverable)?;
            writeln!(f, "  high risk: {}", self.removed_high_risk)?;
            writeln!(f, "  disposable: {}", self.removed_disposable)?;
        }
        if self.safe_role_addresses > 0 {
            writeln!(f, "Role addresses kept: {}", self.safe_role_addresses)?;
        }
        writeln!(f, "-------------------------")
    }
}
