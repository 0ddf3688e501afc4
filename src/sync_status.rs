//! Sync completion advisory through the Syncthing CLI companion (`stc`)
//!
//! Before the backup tool touches a save folder, the folder should be fully
//! synced from other devices. This module reads the completion percentage
//! and warns (console plus desktop notification) when it is below 100. It
//! never blocks or changes the launch outcome.
//!
//! ## Module Structure
//! - `types.rs`: SyncStatus
//! - `pure.rs`: percentage extraction from the JSON dump and the text table
//! - `operations/`: stc queries, desktop notifications
//! - `checker.rs`: check and rescan

mod checker;
mod operations;
mod pure;
mod types;

pub use checker::SyncStatusChecker;
pub use operations::notify::{DesktopNotifier, Notifier};

#[cfg(test)]
pub use operations::notify::fake::FakeNotifier;
