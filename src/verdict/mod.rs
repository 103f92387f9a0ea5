//! Per-address verification outcome and the safety classification applied
//! before an address is kept in the cleaned list.

mod types;

pub use types::{Deliverability, RemovalReason, Risk, ValidationResult, ValidationResults};

#[cfg(test)]
mod tests;
