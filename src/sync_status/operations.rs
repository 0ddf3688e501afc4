//! Sync status operations - atomic side effects

pub mod notify;
pub mod stc;
