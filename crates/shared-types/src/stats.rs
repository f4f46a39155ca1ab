use serde::{Deserialize, Serialize};

/// Registration counts by status, for summary counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationStats {
    pub pending_count: i64,
    pub approved_count: i64,
    pub rejected_count: i64,
    pub total: i64,
}

/// Approved-roster size for one class label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCount {
    /// `None` groups approved registrations without a class label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub count: i64,
}

/// Pending registrations attributed to one requesting teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherLoad {
    pub teacher_id: String,
    /// Resolved from the directory; `None` when the id is unknown there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    pub pending_count: i64,
}
