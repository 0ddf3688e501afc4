//! Completion check and post-backup rescan

use std::time::Duration;

use crate::runner::CommandRunner;
use crate::sync_status::operations::notify::Notifier;
use crate::sync_status::operations::stc::{query_percentage, rescan_argv};
use crate::sync_status::types::SyncStatus;
use crate::tools::ToolHandle;

pub struct SyncStatusChecker<'a> {
    /// `None` when stc was not found; every operation is then a no-op
    tool: Option<ToolHandle>,
    runner: &'a dyn CommandRunner,
    notifier: &'a dyn Notifier,
    notifications: bool,
    /// Cosmetic pause after dispatching a notification
    notify_delay: Duration,
}

impl<'a> SyncStatusChecker<'a> {
    pub fn new(
        tool: Option<ToolHandle>,
        runner: &'a dyn CommandRunner,
        notifier: &'a dyn Notifier,
        notifications: bool,
        notify_delay: Duration,
    ) -> Self {
        Self {
            tool,
            runner,
            notifier,
            notifications,
            notify_delay,
        }
    }

    pub fn available(&self) -> bool {
        self.tool.is_some()
    }

    pub fn check(&self, folder: &str) -> SyncStatus {
        let Some(tool) = &self.tool else {
            return SyncStatus::unavailable();
        };

        let status = SyncStatus {
            available: true,
            percentage: query_percentage(tool, folder, self.runner),
        };

        match status.percentage {
            None => eprintln!(
                "[savehook] sync - Could not read completion for folder '{}'",
                folder
            ),
            Some(_) if status.complete() => {
                println!("[savehook] sync - Folder '{}' is up to date", folder)
            }
            Some(p) => self.warn_lagging(folder, p),
        }

        status
    }

    fn warn_lagging(&self, folder: &str, percentage: u8) {
        let body = format!(
            "Folder '{}' is only {}% synced. Saves may be out of date.",
            folder, percentage
        );
        eprintln!("[savehook] sync - Warning: {}", body);

        if !self.notifications {
            return;
        }
        if self.notifier.notify("Save sync incomplete", &body) {
            std::thread::sleep(self.notify_delay);
        } else {
            eprintln!("[savehook] sync - No notification mechanism available");
        }
    }

    /// Ask stc to rescan after a backup; failures are only logged
    pub fn trigger_rescan(&self, folder: &str) {
        let Some(tool) = &self.tool else {
            return;
        };
        match self.runner.output(&rescan_argv(tool, folder)) {
            Ok(out) if out.success => {
                println!("[savehook] sync - Rescan requested for '{}'", folder)
            }
            Ok(_) => eprintln!("[savehook] sync - Warning: Rescan of '{}' failed", folder),
            Err(e) => eprintln!(
                "[savehook] sync - Warning: Could not run rescan for '{}': {}",
                folder, e
            ),
        }
    }
}
