//! Pure helpers for tool discovery

use std::path::PathBuf;

use crate::paths::Environment;
use crate::tools::types::{SandboxProbe, ToolHandle, ToolKind, ToolSpec};

pub const LUDUSAVI_FLATPAK_ID: &str = "com.github.mtkennerly.ludusavi";

/// Environment variable pointing at a specific ludusavi binary
pub const LUDUSAVI_OVERRIDE_VAR: &str = "LUDUSAVI_PATH";

/// Absolute candidates in search order. Home-relative entries are
/// dropped when there is no home directory.
fn candidate_paths(env: &Environment, entries: &[(bool, &str)]) -> Vec<PathBuf> {
    let home = env.home();
    entries
        .iter()
        .filter_map(|&(in_home, path)| match in_home {
            true => home.as_ref().map(|h| h.join(path)),
            false => Some(PathBuf::from(path)),
        })
        .collect()
}

pub fn ludusavi_spec(env: &Environment) -> ToolSpec {
    ToolSpec {
        name: "ludusavi",
        override_path: env.var(LUDUSAVI_OVERRIDE_VAR).map(PathBuf::from),
        candidates: candidate_paths(
            env,
            &[
                (false, "/usr/bin/ludusavi"),
                (false, "/usr/local/bin/ludusavi"),
                (true, ".local/bin/ludusavi"),
                (true, ".cargo/bin/ludusavi"),
                (false, "/opt/ludusavi/ludusavi"),
                (true, "Applications/ludusavi.app/Contents/MacOS/ludusavi"),
                (false, "/Applications/ludusavi.app/Contents/MacOS/ludusavi"),
            ],
        ),
        sandbox: Some(SandboxProbe::flatpak(LUDUSAVI_FLATPAK_ID)),
    }
}

pub fn stc_spec(env: &Environment) -> ToolSpec {
    ToolSpec {
        name: "stc",
        override_path: None,
        candidates: candidate_paths(
            env,
            &[
                (false, "/usr/bin/stc"),
                (false, "/usr/local/bin/stc"),
                (true, ".local/bin/stc"),
                (true, "go/bin/stc"),
            ],
        ),
        sandbox: None,
    }
}

/// Serialize a handle as a single cache line
pub fn encode_cache_line(handle: &ToolHandle) -> String {
    match handle.kind {
        ToolKind::Native => format!("native:{}", handle.invocation.join(" ")),
        ToolKind::Sandboxed => format!("sandbox:{}", handle.invocation.join(" ")),
    }
}

/// Parse a cache line; anything unexpected is a miss
pub fn decode_cache_line(line: &str) -> Option<ToolHandle> {
    let line = line.trim();
    if let Some(path) = line.strip_prefix("native:") {
        if !path.starts_with('/') {
            return None;
        }
        return Some(ToolHandle::native(PathBuf::from(path)));
    }
    if let Some(cmd) = line.strip_prefix("sandbox:") {
        let invocation: Vec<String> = cmd.split_whitespace().map(String::from).collect();
        if invocation.len() < 2 {
            return None;
        }
        return Some(ToolHandle::sandboxed(invocation));
    }
    None
}
