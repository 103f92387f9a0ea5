use std::collections::BTreeMap;
use std::fmt;

use crate::verdict::ValidationResult;

/// Lower-cased, trimmed address that contains an `@`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalizes `raw`; returns `None` when nothing usable is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || !normalized.contains('@') {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An address plus the other columns of its source row.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecord {
    email: EmailAddress,
    metadata: BTreeMap<String, String>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    validation: Option<ValidationResult>,
}

impl EmailRecord {
    pub fn new(email: EmailAddress) -> Self {
        Self {
            email,
            metadata: BTreeMap::new(),
            validation: None,
        }
    }

    pub fn with_metadata(email: EmailAddress, metadata: BTreeMap<String, String>) -> Self {
        Self {
            email,
            metadata,
            validation: None,
        }
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn validation(&self) -> Option<&ValidationResult> {
        self.validation.as_ref()
    }

    pub fn set_validation(&mut self, result: ValidationResult) {
        self.validation = Some(result);
    }

    /// `false` until a result is attached, then the safety verdict.
    pub fn should_keep(&self) -> bool {
        self.validation
            .as_ref()
            .is_some_and(ValidationResult::is_safe_for_sending)
    }
}
