//! Demo dataset for the school-management dashboards.
//!
//! Stands in for the persistence layer a production deployment would
//! seed from: one admin, teachers with subjects and classes, parents
//! with their children, and a mix of pending and already-approved
//! student registrations.

use chrono::NaiveDate;
use shared_types::{DirectoryEntry, RegistrationStatus, Role, StudentRegistration};

use crate::{DirectoryIndex, RegistrationLedger};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo dates are valid")
}

fn student(
    id: &str,
    name: &str,
    dob: NaiveDate,
    teacher_id: &str,
    class_name: &str,
) -> StudentRegistration {
    let mut reg = StudentRegistration::new(id, name, dob);
    reg.requesting_teacher_id = Some(teacher_id.to_string());
    reg.class_name = Some(class_name.to_string());
    reg
}

/// Build the demo directory: one admin, two teachers, two parents.
pub fn demo_directory() -> DirectoryIndex {
    let mut directory = DirectoryIndex::new();

    let admin = DirectoryEntry::new("a1", "Dana Whitfield", "dana@edutec.school", Role::Admin);

    let mut rivera = DirectoryEntry::new("t1", "Sofia Rivera", "sofia@edutec.school", Role::Teacher);
    rivera.subjects = vec!["Mathematics".to_string(), "Science".to_string()];
    rivera.classes = vec!["4B".to_string(), "5A".to_string()];

    let mut lee = DirectoryEntry::new("t2", "Marcus Lee", "marcus@edutec.school", Role::Teacher);
    lee.subjects = vec!["English".to_string()];
    lee.classes = vec!["3C".to_string()];

    let mut castro = DirectoryEntry::new("p1", "Ines Castro", "ines@example.com", Role::Parent);
    castro.children = vec!["s5".to_string()];

    let mut okafor = DirectoryEntry::new("p2", "Chidi Okafor", "chidi@example.com", Role::Parent);
    okafor.children = vec!["s6".to_string(), "s2".to_string()];

    for entry in [admin, rivera, lee, castro, okafor] {
        directory.insert(entry).expect("demo directory ids are unique");
    }
    directory
}

/// Build the demo ledger: four pending registrations and two students
/// already on the approved roster.
pub fn demo_ledger() -> RegistrationLedger {
    let mut ledger = RegistrationLedger::new();

    let mut approved = [
        student("s5", "Lucia Castro", date(2015, 9, 2), "t1", "5A"),
        student("s6", "Amara Okafor", date(2016, 1, 27), "t2", "3C"),
    ];
    for reg in approved.iter_mut() {
        reg.status = RegistrationStatus::Approved;
    }

    let mut pending = [
        student("s1", "Theo Brandt", date(2016, 3, 14), "t1", "4B"),
        student("s2", "Femi Okafor", date(2017, 6, 30), "t2", "3C"),
        student("s3", "Priya Nair", date(2016, 11, 8), "t1", "4B"),
        student("s4", "Jonas Keller", date(2015, 12, 19), "t1", "5A"),
    ];
    pending[2].photo_url = Some("https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=100".to_string());

    for reg in approved.into_iter().chain(pending) {
        ledger.insert(reg).expect("demo registration ids are unique");
    }
    ledger
}

/// The full demo seed, as handed to the dashboards at process start.
pub fn demo() -> (RegistrationLedger, DirectoryIndex) {
    (demo_ledger(), demo_directory())
}
