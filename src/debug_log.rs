//! Append-only record of every invocation
//!
//! Written for troubleshooting launcher integrations; the program never
//! reads it back. Failures are ignored.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::paths::Environment;

/// Variables worth recording: launcher signals and our own overrides
const LOGGED_VARS: &[&str] = &[
    "GAME_NAME",
    "LUTRIS_GAME_NAME",
    "LUTRIS_GAME_UUID",
    "HEROIC_GAME_TITLE",
    "HEROIC_APP_NAME",
    "HEROIC_APP_SOURCE",
    "SAVEHOOK_LAUNCHER",
    "LUDUSAVI_PATH",
    "STORE",
    "SteamAppId",
    "WINEPREFIX",
];

pub fn format_entry(timestamp: u64, args: &[String], env: &Environment) -> String {
    let mut entry = format!("[{}] args: {:?}\n", timestamp, args);
    entry.push_str(&format!("  cwd: {}\n", env.cwd.display()));
    for key in LOGGED_VARS {
        if let Some(value) = env.vars.get(*key) {
            entry.push_str(&format!("  {}={}\n", key, value));
        }
    }
    entry
}

pub fn append(path: &Path, args: &[String], env: &Environment) {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let entry = format_entry(timestamp, args, env);

    let _ = path
        .parent()
        .map(std::fs::create_dir_all)
        .unwrap_or(Ok(()))
        .and_then(|_| OpenOptions::new().create(true).append(true).open(path))
        .and_then(|mut file| file.write_all(entry.as_bytes()));
}
