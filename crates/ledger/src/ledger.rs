use std::collections::HashMap;

use chrono::Utc;
use shared_types::{
    AppError, DecisionPolicy, RegistrationStatus, StudentRegistration, SubmitRegistrationRequest,
};
use uuid::Uuid;
use validator::Validate;

/// The authoritative in-memory store of student registration records.
///
/// Records are held in insertion order; a separate decision log records
/// the order in which records entered a terminal state. Queries always
/// recompute from current state — nothing here is cached.
///
/// The ledger itself is single-threaded. Callers that share it across
/// threads wrap it in [`crate::SharedLedger`].
#[derive(Debug, Clone, Default)]
pub struct RegistrationLedger {
    records: Vec<StudentRegistration>,
    index: HashMap<String, usize>,
    /// Ids in the order their registrations were decided. Records seeded
    /// in a terminal state enter at insertion time.
    decided: Vec<String>,
    policy: DecisionPolicy,
}

impl RegistrationLedger {
    /// An empty ledger with the default (strict) decision policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty ledger with an explicit decision policy.
    pub fn with_policy(policy: DecisionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StudentRegistration> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Iterate all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRegistration> {
        self.records.iter()
    }

    /// Seed one registration into the ledger.
    ///
    /// Fails with `Conflict` on a duplicate id, leaving the ledger
    /// unmodified. A record seeded already approved/rejected joins the
    /// decision log at insertion time.
    pub fn insert(&mut self, registration: StudentRegistration) -> Result<(), AppError> {
        if self.index.contains_key(&registration.id) {
            return Err(AppError::conflict(format!(
                "A registration with id {} already exists",
                registration.id
            )));
        }
        self.index
            .insert(registration.id.clone(), self.records.len());
        if registration.status.is_terminal() {
            self.decided.push(registration.id.clone());
        }
        self.records.push(registration);
        Ok(())
    }

    /// Create a new pending registration from a submission request.
    ///
    /// The ledger assigns a UUID id. Returns the stored record.
    #[tracing::instrument(skip(self, req), fields(student = %req.name))]
    pub fn submit(
        &mut self,
        req: SubmitRegistrationRequest,
    ) -> Result<StudentRegistration, AppError> {
        req.validate()?;

        let mut registration = StudentRegistration::new(
            Uuid::new_v4().to_string(),
            req.name,
            req.date_of_birth,
        );
        registration.photo_url = req.photo_url;
        registration.requesting_teacher_id = req.requesting_teacher_id;
        registration.class_name = req.class_name;

        let stored = registration.clone();
        self.insert(registration)?;
        tracing::info!(id = %stored.id, "registration submitted");
        Ok(stored)
    }

    /// All pending registrations, in insertion order.
    pub fn list_pending(&self) -> Vec<&StudentRegistration> {
        self.records
            .iter()
            .filter(|r| r.status == RegistrationStatus::Pending)
            .collect()
    }

    /// All approved registrations, in decision order (the order records
    /// entered a terminal state, not insertion order).
    pub fn list_approved(&self) -> Vec<&StudentRegistration> {
        self.list_decided(RegistrationStatus::Approved)
    }

    /// All rejected registrations, in decision order.
    pub fn list_rejected(&self) -> Vec<&StudentRegistration> {
        self.list_decided(RegistrationStatus::Rejected)
    }

    fn list_decided(&self, status: RegistrationStatus) -> Vec<&StudentRegistration> {
        self.decided
            .iter()
            .filter_map(|id| self.get(id))
            .filter(|r| r.status == status)
            .collect()
    }

    /// Count of pending registrations. Always recomputed; by construction
    /// equal to `list_pending().len()`.
    pub fn count_pending(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == RegistrationStatus::Pending)
            .count()
    }

    /// Approve the registration with the given id.
    ///
    /// Sets `status` to `approved` and stamps `reviewed_at`; every other
    /// field is unchanged. Fails with `NotFound` for an unknown id and,
    /// under the strict policy, with `InvalidTransition` for a record
    /// that is no longer pending.
    #[tracing::instrument(skip(self))]
    pub fn approve(&mut self, id: &str) -> Result<StudentRegistration, AppError> {
        self.decide(id, RegistrationStatus::Approved)
    }

    /// Reject the registration with the given id. Symmetric to
    /// [`approve`](Self::approve).
    #[tracing::instrument(skip(self))]
    pub fn reject(&mut self, id: &str) -> Result<StudentRegistration, AppError> {
        self.decide(id, RegistrationStatus::Rejected)
    }

    fn decide(
        &mut self,
        id: &str,
        target: RegistrationStatus,
    ) -> Result<StudentRegistration, AppError> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("No registration with id {}", id)))?;

        let record = &mut self.records[idx];
        let first_decision = record.status == RegistrationStatus::Pending;
        if !first_decision && self.policy == DecisionPolicy::Strict {
            tracing::warn!(
                id,
                status = record.status.as_str(),
                "refusing to re-decide a settled registration"
            );
            return Err(AppError::invalid_transition(format!(
                "Registration {} is already {}",
                id,
                record.status.as_str()
            )));
        }

        record.status = target;
        record.reviewed_at = Some(Utc::now());
        let updated = record.clone();
        // Overwritten records keep their original decision-order slot.
        if first_decision {
            self.decided.push(id.to_string());
        }
        tracing::info!(id, status = target.as_str(), "registration decided");
        Ok(updated)
    }
}
