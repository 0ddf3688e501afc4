//! Game identity resolution
//!
//! The identity is the key the backup tool looks saves up by. Sources are
//! tried in order and the first non-empty answer wins:
//! 1. explicit `--game-name`
//! 2. launcher environment (Lutris, Heroic)
//! 3. the wrapped executable's path (wrapper mode only)
//! 4. the working directory, skipping generic build/arch folder names

mod launcher;
mod matchers;
mod resolve;

pub use resolve::{IdentityInputs, resolve_identity};
