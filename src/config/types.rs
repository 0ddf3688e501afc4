use serde::{Deserialize, Serialize};

/// Persisted preferences; every field falls back to its default when missing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Query the sync CLI before launching
    #[serde(default = "default_true")]
    pub sync_check: bool,
    /// Sync folder label or id holding the backups
    #[serde(default = "default_sync_folder")]
    pub sync_folder: String,
    /// Raise a desktop notification when the folder is not fully synced
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Pause after dispatching a notification so it can render
    #[serde(default = "default_notify_delay_ms")]
    pub notify_delay_ms: u64,
    /// Budget for each reachability attempt
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Hosts tried in order by the connectivity check
    #[serde(default = "default_probe_hosts")]
    pub probe_hosts: Vec<String>,
    /// Append each invocation to debug.log
    #[serde(default = "default_true")]
    pub debug_log: bool,
}

fn default_true() -> bool {
    true
}

fn default_sync_folder() -> String {
    "ludusavi".to_string()
}

fn default_notify_delay_ms() -> u64 {
    1500
}

fn default_probe_timeout_ms() -> u64 {
    1000
}

fn default_probe_hosts() -> Vec<String> {
    vec![
        "1.1.1.1".to_string(),
        "8.8.8.8".to_string(),
        "9.9.9.9".to_string(),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sync_check: true,
            sync_folder: default_sync_folder(),
            notifications: true,
            notify_delay_ms: default_notify_delay_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
            probe_hosts: default_probe_hosts(),
            debug_log: true,
        }
    }
}
