use serde::{Deserialize, Serialize};

/// Valid role values as they appear on the wire.
pub const ROLES: &[&str] = &["admin", "teacher", "parent"];

/// Role of a person in the school directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Parent,
}

impl Role {
    /// Lowercase string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
        }
    }

    /// Parse a role string. Returns `None` for unknown values — the
    /// product has no anonymous role to fall back to.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "teacher" => Some(Role::Teacher),
            "parent" => Some(Role::Parent),
            _ => None,
        }
    }
}

/// A person record: admin, teacher, or parent.
///
/// Role-specific data is carried as flat optional collections:
/// `subjects`/`classes` are populated for teachers, `children` (student
/// ids) for parents. Empty collections are omitted from serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryEntry {
    /// Unique within the directory.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl DirectoryEntry {
    /// Build an entry with no role-specific data attached.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            subjects: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }
}
