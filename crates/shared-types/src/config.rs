use serde::{Deserialize, Serialize};

/// How the ledger treats approve/reject on an already-decided record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecisionPolicy {
    /// Refuse with `InvalidTransition`: decisions are final.
    #[default]
    Strict,
    /// Unconditionally overwrite the stored status, allowing a settled
    /// registration to be re-decided.
    Overwrite,
}

/// Flags controlling approval behavior.
///
/// Loaded from `config.toml` at startup. Every field defaults to the
/// conservative value so a missing or incomplete config file keeps
/// decisions final.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApprovalFlags {
    #[serde(default)]
    pub allow_redecision: bool,
}

impl ApprovalFlags {
    /// The decision policy these flags select.
    pub fn policy(&self) -> DecisionPolicy {
        if self.allow_redecision {
            DecisionPolicy::Overwrite
        } else {
            DecisionPolicy::Strict
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub approval: ApprovalFlags,
}
