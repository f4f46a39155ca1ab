use shared_types::{AppConfig, DecisionPolicy, RegistrationStatus};

use crate::common::{approved_registration, registration};
use ledger::RegistrationLedger;

#[test]
fn default_policy_is_strict() {
    let ledger = RegistrationLedger::new();
    assert_eq!(ledger.policy(), DecisionPolicy::Strict);
}

#[test]
fn overwrite_policy_allows_flipping_a_decision() {
    let mut ledger = RegistrationLedger::with_policy(DecisionPolicy::Overwrite);
    ledger
        .insert(approved_registration("3", "Priya Nair"))
        .unwrap();

    let updated = ledger.reject("3").unwrap();
    assert_eq!(updated.status, RegistrationStatus::Rejected);
}

#[test]
fn overwrite_keeps_the_original_decision_slot() {
    let mut ledger = RegistrationLedger::with_policy(DecisionPolicy::Overwrite);
    ledger
        .insert(approved_registration("3", "Priya Nair"))
        .unwrap();
    ledger.insert(registration("1", "Theo Brandt")).unwrap();
    ledger.approve("1").unwrap();

    // Re-approving "3" must not move it behind "1" in decision order.
    ledger.reject("3").unwrap();
    ledger.approve("3").unwrap();

    let approved: Vec<&str> = ledger.list_approved().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(approved, vec!["3", "1"]);
}

#[test]
fn overwrite_still_reports_unknown_ids() {
    let mut ledger = RegistrationLedger::with_policy(DecisionPolicy::Overwrite);
    assert!(ledger.approve("missing").is_err());
}

#[test]
fn config_toml_selects_the_policy() {
    let strict: AppConfig = toml::from_str("").unwrap();
    assert_eq!(strict.approval.policy(), DecisionPolicy::Strict);

    let overwrite: AppConfig = toml::from_str(
        r#"
        [approval]
        allow_redecision = true
        "#,
    )
    .unwrap();
    assert_eq!(overwrite.approval.policy(), DecisionPolicy::Overwrite);

    let ledger = RegistrationLedger::with_policy(overwrite.approval.policy());
    assert_eq!(ledger.policy(), DecisionPolicy::Overwrite);
}
