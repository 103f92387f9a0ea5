use proptest::prelude::*;

use super::{Deliverability, RemovalReason, Risk, ValidationResult};

fn any_result() -> impl Strategy<Value = Deliverability> {
    prop_oneof![
        Just(Deliverability::Deliverable),
        Just(Deliverability::Undeliverable),
        Just(Deliverability::Risky),
        Just(Deliverability::CatchAll),
        Just(Deliverability::Unknown),
    ]
}

fn any_risk() -> impl Strategy<Value = Risk> {
    prop_oneof![
        Just(Risk::Low),
        Just(Risk::Medium),
        Just(Risk::High),
        Just(Risk::Unknown),
    ]
}

fn result(result: Deliverability, risk: Risk, disposable: bool) -> ValidationResult {
    ValidationResult::new("someone@example.com")
        .with_result(result)
        .with_risk(risk)
        .disposable(disposable)
}

#[test]
fn deliverable_low_risk_is_safe() {
    assert!(result(Deliverability::Deliverable, Risk::Low, false).is_safe_for_sending());
}

#[test]
fn catch_all_medium_risk_is_kept() {
    let r = result(Deliverability::CatchAll, Risk::Medium, false);
    assert!(r.is_safe_for_sending());
    assert_eq!(r.removal_reason(), None);
}

#[test]
fn unknown_verdict_defaults_to_safe() {
    let r = ValidationResult::new("x@example.com");
    assert_eq!(r.result, Deliverability::Unknown);
    assert_eq!(r.risk, Risk::Unknown);
    assert!(r.is_safe_for_sending());
}

#[test]
fn undeliverable_wins_over_other_rules() {
    let r = result(Deliverability::Undeliverable, Risk::High, true);
    assert_eq!(r.removal_reason(), Some(RemovalReason::Undeliverable));
}

#[test]
fn high_risk_reported_before_disposable() {
    let r = result(Deliverability::Risky, Risk::High, true);
    assert_eq!(r.removal_reason(), Some(RemovalReason::HighRisk));
}

#[test]
fn disposable_deliverable_is_removed() {
    let r = result(Deliverability::Deliverable, Risk::Low, true);
    assert_eq!(r.removal_reason(), Some(RemovalReason::Disposable));
    assert!(!r.is_safe_for_sending());
}

#[test]
fn role_flag_does_not_affect_safety() {
    let r = result(Deliverability::Deliverable, Risk::Low, false).role(true);
    assert!(r.is_safe_for_sending());
}

#[test]
fn parse_is_case_and_space_insensitive() {
    assert_eq!(Deliverability::parse("  Catch_All "), Deliverability::CatchAll);
    assert_eq!(Deliverability::parse("UNDELIVERABLE"), Deliverability::Undeliverable);
    assert_eq!(Deliverability::parse("do_not_send"), Deliverability::Unknown);
    assert_eq!(Risk::parse("High"), Risk::High);
    assert_eq!(Risk::parse(""), Risk::Unknown);
}

#[test]
fn new_normalizes_address_and_blank_reason() {
    let r = ValidationResult::new("  Bob@Example.COM ").with_reason("   ");
    assert_eq!(r.address, "bob@example.com");
    assert_eq!(r.reason, None);
}

proptest! {
    #[test]
    fn undeliverable_is_never_safe(risk in any_risk(), disposable in any::<bool>(), role in any::<bool>()) {
        let r = result(Deliverability::Undeliverable, risk, disposable).role(role);
        prop_assert!(!r.is_safe_for_sending());
    }

    #[test]
    fn high_risk_is_never_safe(res in any_result(), disposable in any::<bool>()) {
        prop_assert!(!result(res, Risk::High, disposable).is_safe_for_sending());
    }

    #[test]
    fn disposable_is_never_safe(res in any_result(), risk in any_risk()) {
        prop_assert!(!result(res, risk, true).is_safe_for_sending());
    }

    #[test]
    fn safety_ignores_reason_and_role(
        res in any_result(),
        risk in any_risk(),
        disposable in any::<bool>(),
        reason in "[a-z ]{0,12}",
        role in any::<bool>(),
    ) {
        let base = result(res, risk, disposable);
        let decorated = base.clone().with_reason(reason).role(role);
        prop_assert_eq!(base.is_safe_for_sending(), decorated.is_safe_for_sending());
    }

    #[test]
    fn safe_iff_no_exclusion_rule(res in any_result(), risk in any_risk(), disposable in any::<bool>()) {
        let expected = res != Deliverability::Undeliverable && risk != Risk::High && !disposable;
        prop_assert_eq!(result(res, risk, disposable).is_safe_for_sending(), expected);
    }
}
