pub mod config;
pub mod directory;
pub mod ledger;
pub mod seed;
pub mod shared;
pub mod stats;

pub use directory::DirectoryIndex;
pub use ledger::RegistrationLedger;
pub use shared::SharedLedger;
