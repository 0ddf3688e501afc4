//! ludusavi argument vectors and the summary banner

use crate::cli::Mode;
use crate::network::ManifestUpdate;
use crate::tools::ToolHandle;

/// `restore` / `backup` for one game
pub fn single_phase_argv(
    tool: &ToolHandle,
    mode: Mode,
    manifest: ManifestUpdate,
    game: &str,
) -> Vec<String> {
    let subcommand = match mode {
        Mode::Post => "backup",
        Mode::Pre | Mode::Wrapper => "restore",
    };
    tool.argv(&[subcommand, "--force", "--gui", manifest.flag(), game])
}

/// `wrap`: restore, run the command, back up
pub fn wrap_argv(
    tool: &ToolHandle,
    manifest: ManifestUpdate,
    game: &str,
    command: &[String],
) -> Vec<String> {
    let mut argv = tool.argv(&[
        "wrap",
        "--gui",
        "--force-backup",
        "--force-restore",
        manifest.flag(),
        "--name",
        game,
        "--",
    ]);
    argv.extend(command.iter().cloned());
    argv
}

pub struct Summary<'a> {
    pub mode: Mode,
    pub game: &'a str,
    pub tool: &'a ToolHandle,
    pub online: bool,
    pub sync: &'a str,
    pub exit_code: i32,
}

pub fn summary_banner(s: &Summary) -> String {
    let rule = "=".repeat(48);
    let game = if s.game.is_empty() { "(none)" } else { s.game };
    format!(
        "{rule}\n savehook {mode} finished\n  game:      {game}\n  ludusavi:  {tool}\n  network:   {net}\n  sync:      {sync}\n  exit code: {code}\n{rule}",
        rule = rule,
        mode = s.mode,
        game = game,
        tool = s.tool,
        net = if s.online { "online" } else { "offline" },
        sync = s.sync,
        code = s.exit_code,
    )
}
