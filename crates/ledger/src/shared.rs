use std::sync::{Arc, RwLock};

use shared_types::{AppError, RegistrationStats, StudentRegistration, SubmitRegistrationRequest};

use crate::{stats, RegistrationLedger};

/// Thread-safe handle around a [`RegistrationLedger`].
///
/// The bare ledger assumes one logical thread of control. When it is
/// exposed to concurrent callers, each read-modify-write must sit behind
/// a mutual-exclusion boundary to preserve the uniqueness and
/// monotonic-transition invariants — this wrapper is that boundary.
/// Queries return owned snapshots so no lock outlives a call.
#[derive(Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<RegistrationLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: RegistrationLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Run `f` under the read lock.
    fn read<T>(&self, f: impl FnOnce(&RegistrationLedger) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&guard)
    }

    /// Run `f` under the write lock, covering the whole
    /// read-modify-write.
    fn write<T>(&self, f: impl FnOnce(&mut RegistrationLedger) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    pub fn approve(&self, id: &str) -> Result<StudentRegistration, AppError> {
        self.write(|ledger| ledger.approve(id))
    }

    pub fn reject(&self, id: &str) -> Result<StudentRegistration, AppError> {
        self.write(|ledger| ledger.reject(id))
    }

    pub fn submit(&self, req: SubmitRegistrationRequest) -> Result<StudentRegistration, AppError> {
        self.write(|ledger| ledger.submit(req))
    }

    pub fn get(&self, id: &str) -> Option<StudentRegistration> {
        self.read(|ledger| ledger.get(id).cloned())
    }

    pub fn list_pending(&self) -> Vec<StudentRegistration> {
        self.read(|ledger| ledger.list_pending().into_iter().cloned().collect())
    }

    pub fn list_approved(&self) -> Vec<StudentRegistration> {
        self.read(|ledger| ledger.list_approved().into_iter().cloned().collect())
    }

    pub fn list_rejected(&self) -> Vec<StudentRegistration> {
        self.read(|ledger| ledger.list_rejected().into_iter().cloned().collect())
    }

    pub fn count_pending(&self) -> usize {
        self.read(|ledger| ledger.count_pending())
    }

    pub fn stats(&self) -> RegistrationStats {
        self.read(stats::registration_stats)
    }
}
