//! Invocation arguments

use std::fmt;

use clap::{Parser, ValueEnum};

/// Which phases of the save workflow run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Restore, run the game, back up
    Wrapper,
    /// Restore only (launcher pre-launch hook)
    Pre,
    /// Back up only (launcher post-exit hook)
    Post,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Wrapper => "wrapper",
            Mode::Pre => "pre",
            Mode::Post => "post",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "savehook",
    version,
    about = "Restore saves, run the game, back up saves",
    long_about = "Wraps a game launched from Lutris, Heroic or any launcher that supports \
                  wrapper commands. Saves are restored and backed up with ludusavi; the \
                  Syncthing folder holding the backups is checked for completion first."
)]
pub struct Cli {
    /// Phases to run
    #[arg(long, value_enum, default_value_t = Mode::Wrapper)]
    pub mode: Mode,

    /// Game name to use instead of detecting it
    #[arg(long = "game-name", value_name = "NAME")]
    pub game_name: Option<String>,

    /// Cache detected tool paths and the ping form between runs
    #[arg(long)]
    pub cache: bool,

    /// Write the effective settings.json and exit
    #[arg(long)]
    pub write_config: bool,

    /// Game executable and its arguments (wrapper mode)
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Immutable run configuration, built once from the arguments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    pub mode: Mode,
    pub game_name: Option<String>,
    pub cache: bool,
    /// Child command, passed through untouched
    pub command: Vec<String>,
}

impl From<Cli> for LaunchConfig {
    fn from(cli: Cli) -> Self {
        Self {
            mode: cli.mode,
            game_name: cli.game_name,
            cache: cli.cache,
            command: cli.command,
        }
    }
}
