use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ── Validation constants ────────────────────────────────────────────

/// Valid registration status values as they appear on the wire.
pub const REGISTRATION_STATUSES: &[&str] = &["pending", "approved", "rejected"];

/// Check whether a status string is a valid registration status.
pub fn is_valid_registration_status(s: &str) -> bool {
    REGISTRATION_STATUSES.contains(&s)
}

/// Placeholder portrait shown when a registration carries no photo.
pub const DEFAULT_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face";

// ── Status ──────────────────────────────────────────────────────────

/// Lifecycle state of a student registration.
///
/// `Pending` is the only initial state. `Approved` and `Rejected` are
/// terminal: the ledger refuses transitions out of them under the
/// default decision policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    /// Lowercase string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Approved => "approved",
            RegistrationStatus::Rejected => "rejected",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(RegistrationStatus::Pending),
            "approved" => Some(RegistrationStatus::Approved),
            "rejected" => Some(RegistrationStatus::Rejected),
            _ => None,
        }
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RegistrationStatus::Pending)
    }
}

// ── Domain struct ───────────────────────────────────────────────────

/// A student's enrollment registration record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRegistration {
    /// Unique within the ledger, immutable once created.
    pub id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub status: RegistrationStatus,
    /// Directory id of the teacher who submitted the registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requesting_teacher_id: Option<String>,
    /// Free-text class label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl StudentRegistration {
    /// Build a new pending registration submitted now.
    pub fn new(id: impl Into<String>, name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date_of_birth,
            photo_url: None,
            status: RegistrationStatus::Pending,
            requesting_teacher_id: None,
            class_name: None,
            submitted_at: Utc::now(),
            reviewed_at: None,
        }
    }

    /// The photo URI to display, falling back to the placeholder
    /// portrait when the record carries none (or an empty string).
    pub fn photo_url_or_default(&self) -> &str {
        match self.photo_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_PHOTO_URL,
        }
    }
}
