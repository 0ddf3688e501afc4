//! Tool operations - cache I/O and validation

use std::error::Error;
use std::path::Path;

use crate::paths::{Environment, is_executable};
use crate::runner::CommandRunner;
use crate::tools::pure::{decode_cache_line, encode_cache_line};
use crate::tools::types::{SandboxProbe, ToolHandle, ToolKind};

/// Read a cached handle; unreadable or corrupt files are a miss
pub fn read_cache(path: &Path) -> Option<ToolHandle> {
    let content = std::fs::read_to_string(path).ok()?;
    decode_cache_line(content.lines().next()?)
}

pub fn write_cache(path: &Path, handle: &ToolHandle) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{}\n", encode_cache_line(handle)))?;
    Ok(())
}

/// Whether a handle still points at something runnable
pub fn handle_is_valid(handle: &ToolHandle, env: &Environment) -> bool {
    let Some(program) = handle.invocation.first() else {
        return false;
    };
    match handle.kind {
        ToolKind::Native => is_executable(Path::new(program)),
        ToolKind::Sandboxed => env.find_in_path(program).is_some(),
    }
}

/// Ask the sandbox manager whether the application is installed
pub fn probe_sandbox(
    probe: &SandboxProbe,
    env: &Environment,
    runner: &dyn CommandRunner,
) -> Option<ToolHandle> {
    let runtime = env.find_in_path(&probe.runtime)?;
    let argv = probe.query_argv(&runtime.to_string_lossy());
    match runner.output(&argv) {
        Ok(out) if out.success => Some(probe.handle()),
        _ => None,
    }
}
