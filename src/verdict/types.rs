use std::collections::BTreeMap;
use std::fmt;

/// Provider verdict for a single mailbox (`result` column).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Deliverability {
    Deliverable,
    Undeliverable,
    Risky,
    CatchAll,
    #[default]
    Unknown,
}

impl Deliverability {
    /// Parses a provider string. Anything unrecognised, including an empty
    /// cell, maps to [`Deliverability::Unknown`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "deliverable" => Self::Deliverable,
            "undeliverable" => Self::Undeliverable,
            "risky" => Self::Risky,
            "catch_all" | "catch-all" => Self::CatchAll,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deliverable => "deliverable",
            Self::Undeliverable => "undeliverable",
            Self::Risky => "risky",
            Self::CatchAll => "catch_all",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Deliverability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider risk level (`risk` column).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Risk {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl Risk {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule that excluded an address from the cleaned list.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalReason {
    Undeliverable,
    HighRisk,
    Disposable,
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undeliverable => "undeliverable",
            Self::HighRisk => "high risk",
            Self::Disposable => "disposable",
        })
    }
}

/// Verification outcome for one address, as reported by the provider.
///
/// Fields the provider did not report keep their defaults
/// (`Unknown`, `None`, `false`).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub address: String,
    pub result: Deliverability,
    pub risk: Risk,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub reason: Option<String>,
    pub is_disposable: bool,
    pub is_role: bool,
}

/// Results keyed by lower-cased address, iterated in ascending address order.
pub type ValidationResults = BTreeMap<String, ValidationResult>;

impl ValidationResult {
    /// Creates an empty result for `address` (trimmed, lower-cased).
    pub fn new(address: &str) -> Self {
        Self {
            address: address.trim().to_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_result(mut self, result: Deliverability) -> Self {
        self.result = result;
        self
    }

    pub fn with_risk(mut self, risk: Risk) -> Self {
        self.risk = risk;
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        self.reason = if reason.trim().is_empty() {
            None
        } else {
            Some(reason)
        };
        self
    }

    pub fn disposable(mut self, value: bool) -> Self {
        self.is_disposable = value;
        self
    }

    pub fn role(mut self, value: bool) -> Self {
        self.is_role = value;
        self
    }

    /// First exclusion rule that matches, checked in priority order:
    /// undeliverable, then high risk, then disposable.
    pub fn removal_reason(&self) -> Option<RemovalReason> {
        if self.result == Deliverability::Undeliverable {
            Some(RemovalReason::Undeliverable)
        } else if self.risk == Risk::High {
            Some(RemovalReason::HighRisk)
        } else if self.is_disposable {
            Some(RemovalReason::Disposable)
        } else {
            None
        }
    }

    /// An address is safe unless one of the exclusion rules matches.
    /// `catch_all`, `risky` and unknown verdicts below high risk are kept.
    pub fn is_safe_for_sending(&self) -> bool {
        self.removal_reason().is_none()
    }
}
