use insta::assert_snapshot;

use super::{FilteredMailingList, ListReport};
use crate::verdict::{Deliverability, Risk, ValidationResult, ValidationResults};

fn result(email: &str, res: Deliverability, risk: Risk) -> ValidationResult {
    ValidationResult::new(email).with_result(res).with_risk(risk)
}

fn sample() -> FilteredMailingList {
    let mut results = ValidationResults::new();
    for r in [
        result("a@x.com", Deliverability::Deliverable, Risk::Low),
        result("b@x.com", Deliverability::Undeliverable, Risk::High),
        result("c@x.com", Deliverability::CatchAll, Risk::Medium).role(true),
        result("d@x.com", Deliverability::Risky, Risk::High),
        result("e@x.com", Deliverability::Deliverable, Risk::Low).disposable(true),
        result("f@x.com", Deliverability::Unknown, Risk::Unknown),
    ] {
        results.insert(r.address.clone(), r);
    }
    FilteredMailingList::from_results(results)
}

#[test]
fn partitions_by_safety_in_processing_order() {
    let list = sample();
    assert_eq!(list.safe_addresses(), ["a@x.com", "c@x.com", "f@x.com"]);
    assert_eq!(list.removed_addresses(), ["b@x.com", "d@x.com", "e@x.com"]);
    assert_eq!(
        list.results().len(),
        list.safe_addresses().len() + list.removed_addresses().len()
    );
}

#[test]
fn re_adding_an_address_moves_it() {
    let mut list = FilteredMailingList::new();
    list.add_address("A@x.com", result("a@x.com", Deliverability::Deliverable, Risk::Low));
    list.add_address("a@x.com", result("a@x.com", Deliverability::Undeliverable, Risk::Low));
    assert!(list.safe_addresses().is_empty());
    assert_eq!(list.removed_addresses(), ["a@x.com"]);
    assert_eq!(list.len(), 1);
}

#[test]
fn report_counts_and_breakdown() {
    let report = sample().generate_report();
    assert_eq!(report.total, 6);
    assert_eq!(report.safe + report.removed, report.total);
    assert_eq!(report.safe_percent, 50.0);
    assert_eq!(report.removed_percent, 50.0);
    assert_eq!(report.removed_undeliverable, 1);
    assert_eq!(report.removed_high_risk, 1);
    assert_eq!(report.removed_disposable, 1);
    assert_eq!(report.safe_role_addresses, 1);
}

#[test]
fn percentages_round_to_one_decimal_and_sum_to_100() {
    let report = ListReport::new(1, 2);
    assert_eq!(report.safe_percent, 33.3);
    assert_eq!(report.removed_percent, 66.7);
    assert!((report.safe_percent + report.removed_percent - 100.0).abs() < 1e-9);
}

#[test]
fn empty_report_has_no_division() {
    let report = FilteredMailingList::new().generate_report();
    assert!(report.is_empty());
    assert_eq!(report.safe_percent, 0.0);
    assert_snapshot!(report.to_string(), @"No addresses processed.");
}

#[test]
fn human_report_snapshot() {
    let report = sample().generate_report();
    assert_snapshot!(report.to_string(), @r"
    --- Validation Report ---
    Total Addresses Processed: 6
    Safe to Send: 3 (50.0%)
    Removed: 3 (50.0%)
      undeliverable: 1
      high risk: 1
      disposable: 1
    Role addresses kept: 1
    -------------------------
    ");
}
