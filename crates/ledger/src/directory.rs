use std::collections::HashMap;

use shared_types::{AppError, DirectoryEntry, Role, StudentRegistration};

/// Read-only reference store of people records.
///
/// Seeded once alongside the ledger; no lifecycle operations beyond
/// lookup are defined on directory entries.
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    entries: Vec<DirectoryEntry>,
    index: HashMap<String, usize>,
}

impl DirectoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seed one entry. Fails with `Conflict` on a duplicate id, leaving
    /// the directory unmodified.
    pub fn insert(&mut self, entry: DirectoryEntry) -> Result<(), AppError> {
        if self.index.contains_key(&entry.id) {
            return Err(AppError::conflict(format!(
                "A directory entry with id {} already exists",
                entry.id
            )));
        }
        self.index.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&DirectoryEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Iterate all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter()
    }

    /// The directory entry for whoever submitted this registration.
    ///
    /// `None` — not an error — when the registration has no requesting
    /// teacher or the id is unknown here; the presentation layer shows a
    /// fallback label in that case.
    pub fn resolve_requester(&self, registration: &StudentRegistration) -> Option<&DirectoryEntry> {
        registration
            .requesting_teacher_id
            .as_deref()
            .and_then(|id| self.get(id))
    }

    /// Number of directory entries holding the given role. Recomputed on
    /// every call.
    pub fn count_by_role(&self, role: Role) -> usize {
        self.entries.iter().filter(|e| e.role == role).count()
    }

    /// Student ids listed as children of the given parent entry. Empty
    /// when the id is unknown or not a parent.
    pub fn children_of(&self, parent_id: &str) -> Vec<&str> {
        match self.get(parent_id) {
            Some(entry) if entry.role == Role::Parent => {
                entry.children.iter().map(String::as_str).collect()
            }
            _ => Vec::new(),
        }
    }
}
