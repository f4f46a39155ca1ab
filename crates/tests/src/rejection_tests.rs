use shared_types::{AppErrorKind, RegistrationStatus};

use crate::common::{scenario_ledger, snapshot};

#[test]
fn reject_pending_sets_status_rejected() {
    let mut ledger = scenario_ledger();

    let updated = ledger.reject("2").unwrap();
    assert_eq!(updated.status, RegistrationStatus::Rejected);
    assert_eq!(ledger.get("2").unwrap().status, RegistrationStatus::Rejected);
}

#[test]
fn reject_changes_no_other_field() {
    let mut ledger = scenario_ledger();
    let before = ledger.get("2").unwrap().clone();

    let after = ledger.reject("2").unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.date_of_birth, before.date_of_birth);
    assert_eq!(after.photo_url, before.photo_url);
    assert_eq!(after.requesting_teacher_id, before.requesting_teacher_id);
    assert_eq!(after.class_name, before.class_name);
    assert_eq!(after.submitted_at, before.submitted_at);
}

#[test]
fn reject_unknown_id_is_not_found() {
    let mut ledger = scenario_ledger();
    let before = snapshot(&ledger);

    let err = ledger.reject("missing").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(snapshot(&ledger), before);
}

#[test]
fn reject_already_decided_is_invalid_transition() {
    let mut ledger = scenario_ledger();

    let err = ledger.reject("3").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidTransition);
    assert_eq!(ledger.get("3").unwrap().status, RegistrationStatus::Approved);
}

#[test]
fn rejected_record_leaves_the_pending_list() {
    let mut ledger = scenario_ledger();

    ledger.reject("2").unwrap();

    assert!(ledger.list_pending().iter().all(|r| r.id != "2"));
    assert_eq!(ledger.list_rejected().len(), 1);
}
