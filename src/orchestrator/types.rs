//! Orchestrator type definitions

use thiserror::Error;

use crate::cli::Mode;
use crate::tools::ToolNotFound;

/// States of a run, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Init,
    ToolsResolved,
    IdentityResolved,
    SyncChecked,
    NetworkChecked,
    Executing,
    Finalizing,
    Done,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Init => "init",
            Stage::ToolsResolved => "tools-resolved",
            Stage::IdentityResolved => "identity-resolved",
            Stage::SyncChecked => "sync-checked",
            Stage::NetworkChecked => "network-checked",
            Stage::Executing => "executing",
            Stage::Finalizing => "finalizing",
            Stage::Done => "done",
        }
    }
}

/// Final outcome; the exit code comes only from the ludusavi or game process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
}

/// Conditions that stop a run before anything is executed
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("wrapper mode needs the game command to run")]
    MissingCommand,

    #[error("{0}")]
    ToolNotFound(#[from] ToolNotFound),

    #[error("could not determine the game name in {mode} mode, pass --game-name")]
    EmptyIdentity { mode: Mode },
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ToolNotFound(_) => 1,
            LaunchError::MissingCommand => 2,
            LaunchError::EmptyIdentity { .. } => 3,
        }
    }
}
