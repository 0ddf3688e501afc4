//! Tool module type definitions

use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    /// Executable file on disk
    Native,
    /// Command line that starts the tool inside an app sandbox
    Sandboxed,
}

/// Resolved, runnable reference to an external tool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolHandle {
    pub kind: ToolKind,
    /// Program followed by any fixed leading arguments
    pub invocation: Vec<String>,
}

impl ToolHandle {
    pub fn native(path: PathBuf) -> Self {
        Self {
            kind: ToolKind::Native,
            invocation: vec![path.to_string_lossy().to_string()],
        }
    }

    pub fn sandboxed(invocation: Vec<String>) -> Self {
        Self {
            kind: ToolKind::Sandboxed,
            invocation,
        }
    }

    /// Full argument vector for running the tool with `args`
    pub fn argv<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        let mut argv = self.invocation.clone();
        argv.extend(args.iter().map(|a| a.as_ref().to_string()));
        argv
    }
}

impl fmt::Display for ToolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.invocation.join(" "))
    }
}

/// App-sandbox lookup used when no candidate path is executable
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandboxProbe {
    /// Sandbox manager program (e.g. "flatpak")
    pub runtime: String,
    /// Application id registered with the sandbox manager
    pub app_id: String,
}

impl SandboxProbe {
    pub fn flatpak(app_id: &str) -> Self {
        Self {
            runtime: "flatpak".to_string(),
            app_id: app_id.to_string(),
        }
    }

    /// Query that succeeds only when the application is installed
    pub fn query_argv(&self, runtime_path: &str) -> Vec<String> {
        vec![
            runtime_path.to_string(),
            "info".to_string(),
            self.app_id.clone(),
        ]
    }

    pub fn handle(&self) -> ToolHandle {
        ToolHandle::sandboxed(vec![
            self.runtime.clone(),
            "run".to_string(),
            self.app_id.clone(),
        ])
    }
}

/// Where and how to look for one tool
#[derive(Clone, Debug)]
pub struct ToolSpec {
    /// Tool name, also the cache key
    pub name: &'static str,
    /// User-supplied path that takes precedence over everything else
    pub override_path: Option<PathBuf>,
    /// Filesystem candidates in priority order
    pub candidates: Vec<PathBuf>,
    pub sandbox: Option<SandboxProbe>,
}

/// Every location was tried and none produced a runnable tool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolNotFound {
    pub tool: String,
    pub attempted: Vec<String>,
}

impl fmt::Display for ToolNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} not found. Looked in:", self.tool)?;
        for location in &self.attempted {
            writeln!(f, "  - {}", location)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolNotFound {}
