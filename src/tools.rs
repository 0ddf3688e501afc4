//! Tool discovery for the backup tool and the sync CLI
//!
//! A tool resolves to a [`ToolHandle`]: either an executable on disk or a
//! sandbox invocation (`flatpak run <app-id>`). Resolution order is
//! explicit override, validated cache entry, filesystem candidates, sandbox
//! probe. Fresh results are written back to the cache when caching is on.
//!
//! ## Module Structure
//! - `types.rs`: ToolHandle, ToolKind, ToolSpec, SandboxProbe, ToolNotFound
//! - `pure.rs`: cache line format, candidate lists
//! - `operations.rs`: cache I/O, handle validation, sandbox probe
//! - `locate.rs`: the resolution pipeline

mod locate;
mod operations;
mod pure;
mod types;

pub use locate::ToolLocator;
pub use pure::{ludusavi_spec, stc_spec};
pub use types::{ToolHandle, ToolNotFound, ToolSpec};
