use pretty_assertions::assert_eq;
use shared_types::{ClassCount, DirectoryEntry, Role};

use crate::common::{registration, scenario_ledger};
use ledger::{stats, DirectoryIndex, RegistrationLedger};

#[test]
fn registration_stats_matches_the_lists() {
    let mut ledger = scenario_ledger();
    ledger.approve("1").unwrap();
    ledger.reject("2").unwrap();

    let s = stats::registration_stats(&ledger);
    assert_eq!(s.pending_count as usize, ledger.list_pending().len());
    assert_eq!(s.approved_count as usize, ledger.list_approved().len());
    assert_eq!(s.rejected_count as usize, ledger.list_rejected().len());
    assert_eq!(s.total as usize, ledger.len());
}

#[test]
fn registration_stats_on_empty_ledger_is_all_zero() {
    let ledger = RegistrationLedger::new();
    let s = stats::registration_stats(&ledger);
    assert_eq!(s.total, 0);
    assert_eq!(s.pending_count, 0);
    assert_eq!(s.approved_count, 0);
    assert_eq!(s.rejected_count, 0);
}

#[test]
fn class_counts_cover_only_the_approved_roster() {
    let mut ledger = RegistrationLedger::new();
    for (id, class) in [("1", Some("4B")), ("2", Some("4B")), ("3", Some("3C")), ("4", None)] {
        let mut reg = registration(id, "Student");
        reg.class_name = class.map(str::to_string);
        ledger.insert(reg).unwrap();
    }
    ledger.approve("1").unwrap();
    ledger.approve("2").unwrap();
    ledger.approve("4").unwrap();
    // "3" stays pending and must not be counted.

    let counts = stats::class_counts(&ledger);
    assert_eq!(
        counts,
        vec![
            ClassCount {
                class_name: Some("4B".to_string()),
                count: 2
            },
            ClassCount {
                class_name: None,
                count: 1
            },
        ]
    );
}

#[test]
fn class_counts_sorts_labels_by_name() {
    let mut ledger = RegistrationLedger::new();
    for (id, class) in [("1", "5A"), ("2", "3C"), ("3", "4B")] {
        let mut reg = registration(id, "Student");
        reg.class_name = Some(class.to_string());
        ledger.insert(reg).unwrap();
        ledger.approve(id).unwrap();
    }

    let labels: Vec<_> = stats::class_counts(&ledger)
        .into_iter()
        .map(|c| c.class_name.unwrap())
        .collect();
    assert_eq!(labels, vec!["3C", "4B", "5A"]);
}

#[test]
fn teacher_load_counts_pending_per_requester() {
    let mut ledger = RegistrationLedger::new();
    for (id, teacher) in [("1", Some("t1")), ("2", Some("t1")), ("3", Some("t2")), ("4", None)] {
        let mut reg = registration(id, "Student");
        reg.requesting_teacher_id = teacher.map(str::to_string);
        ledger.insert(reg).unwrap();
    }
    // Decided records drop out of the load.
    ledger.approve("2").unwrap();

    let mut directory = DirectoryIndex::new();
    directory
        .insert(DirectoryEntry::new(
            "t1",
            "Sofia Rivera",
            "sofia@edutec.school",
            Role::Teacher,
        ))
        .unwrap();

    let load = stats::teacher_load(&ledger, &directory);
    assert_eq!(load.len(), 2);

    assert_eq!(load[0].teacher_id, "t1");
    assert_eq!(load[0].teacher_name.as_deref(), Some("Sofia Rivera"));
    assert_eq!(load[0].pending_count, 1);

    // "t2" is not in the directory; the load still reports it.
    assert_eq!(load[1].teacher_id, "t2");
    assert_eq!(load[1].teacher_name, None);
    assert_eq!(load[1].pending_count, 1);
}
