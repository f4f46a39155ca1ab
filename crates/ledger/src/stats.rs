//! Derived aggregates over the ledger and directory.
//!
//! All filtering and counting the dashboards need lives here, so the
//! presentation layer and the tests share one implementation. Every
//! function recomputes from current state on each call.

use std::collections::BTreeMap;

use shared_types::{ClassCount, RegistrationStats, RegistrationStatus, TeacherLoad};

use crate::{DirectoryIndex, RegistrationLedger};

/// Registration counts by status.
pub fn registration_stats(ledger: &RegistrationLedger) -> RegistrationStats {
    let mut stats = RegistrationStats {
        pending_count: 0,
        approved_count: 0,
        rejected_count: 0,
        total: 0,
    };
    for record in ledger.iter() {
        match record.status {
            RegistrationStatus::Pending => stats.pending_count += 1,
            RegistrationStatus::Approved => stats.approved_count += 1,
            RegistrationStatus::Rejected => stats.rejected_count += 1,
        }
        stats.total += 1;
    }
    stats
}

/// Approved-roster size per class label, name-sorted, with registrations
/// lacking a class label grouped in a trailing unlabeled bucket.
pub fn class_counts(ledger: &RegistrationLedger) -> Vec<ClassCount> {
    let mut labeled: BTreeMap<&str, i64> = BTreeMap::new();
    let mut unlabeled = 0i64;
    for record in ledger.iter() {
        if record.status != RegistrationStatus::Approved {
            continue;
        }
        match record.class_name.as_deref() {
            Some(class) => *labeled.entry(class).or_default() += 1,
            None => unlabeled += 1,
        }
    }

    let mut counts: Vec<ClassCount> = labeled
        .into_iter()
        .map(|(class, count)| ClassCount {
            class_name: Some(class.to_string()),
            count,
        })
        .collect();
    if unlabeled > 0 {
        counts.push(ClassCount {
            class_name: None,
            count: unlabeled,
        });
    }
    counts
}

/// Pending registrations per requesting teacher, id-sorted, with names
/// resolved against the directory where possible.
pub fn teacher_load(ledger: &RegistrationLedger, directory: &DirectoryIndex) -> Vec<TeacherLoad> {
    let mut pending: BTreeMap<&str, i64> = BTreeMap::new();
    for record in ledger.iter() {
        if record.status != RegistrationStatus::Pending {
            continue;
        }
        if let Some(teacher_id) = record.requesting_teacher_id.as_deref() {
            *pending.entry(teacher_id).or_default() += 1;
        }
    }

    pending
        .into_iter()
        .map(|(teacher_id, pending_count)| TeacherLoad {
            teacher_id: teacher_id.to_string(),
            teacher_name: directory.get(teacher_id).map(|e| e.name.clone()),
            pending_count,
        })
        .collect()
}
