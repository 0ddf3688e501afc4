//! User settings stored in `settings.json`

pub mod operations;
pub mod types;

// Re-export types
pub use types::Settings;

// Re-export operations
pub use operations::{load_cfg, save_cfg};
