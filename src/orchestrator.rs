//! Launch orchestration
//!
//! Sequences tool discovery, identity resolution, the sync advisory and the
//! network probe, then runs ludusavi in the requested mode. The exit code of
//! the ludusavi invocation (which, for `wrap`, is the game's own exit code)
//! becomes the exit code of this process.
//!
//! ## Module Structure
//! - `types.rs`: Stage, ExecutionResult, LaunchError
//! - `pure.rs`: ludusavi argument vectors, summary banner
//! - `pipeline.rs`: the state machine

mod pipeline;
mod pure;
mod types;

pub use pipeline::Orchestrator;
