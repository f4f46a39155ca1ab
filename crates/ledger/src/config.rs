use shared_types::{AppConfig, ApprovalFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<ApprovalFlags> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, parse the approval flags, and store them in the
/// global `OnceLock`. Safe to call multiple times — only the first call
/// has effect.
///
/// If the file is missing or unparseable, flags keep their strict
/// defaults.
pub fn load_approval_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config: AppConfig = toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("[config] Failed to parse {CONFIG_PATH}: {e} — keeping strict defaults");
                AppConfig::default()
            });
            eprintln!("[config] Approval flags: {:?}", config.approval);
            config.approval
        }
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}) — keeping strict defaults");
            ApprovalFlags::default()
        }
    });
}

/// Get the loaded approval flags. Returns strict defaults if
/// `load_approval_flags()` hasn't been called yet (safe fallback).
pub fn approval_flags() -> &'static ApprovalFlags {
    static DEFAULT: ApprovalFlags = ApprovalFlags {
        allow_redecision: false,
    };
    FLAGS.get().unwrap_or(&DEFAULT)
}
