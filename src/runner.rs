//! Process execution seam
//!
//! All external programs (the backup tool, the sync CLI, ping, notification
//! helpers) are run through [`CommandRunner`]. Argument vectors are passed
//! straight to `execve`; nothing goes through a shell.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Exit code used when the program could not be started at all
pub const EXIT_SPAWN_FAILED: i32 = 127;

/// Captured result of a non-interactive command
#[derive(Clone, Debug, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
}

pub trait CommandRunner {
    /// Run `argv` to completion with inherited stdio and return its exit code
    fn run(&self, argv: &[String]) -> io::Result<i32>;

    /// Run `argv` to completion, capturing stdout
    fn output(&self, argv: &[String]) -> io::Result<CommandOutput>;

    /// Run `argv` silently and report whether it exited 0 before `budget` ran out.
    /// A process that outlives the budget is killed.
    fn succeeds_within(&self, argv: &[String], budget: Duration) -> bool;

    /// Start `argv` detached; never waits for it
    fn spawn_detached(&self, argv: &[String]) -> io::Result<()>;
}

/// Map an exit status to a single integer the way a POSIX shell does
pub fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    if let Some(code) = status.code() {
        return code;
    }
    match status.signal() {
        Some(sig) => 128 + sig,
        None => 0,
    }
}

fn command_for(argv: &[String]) -> io::Result<Command> {
    let Some((program, args)) = argv.split_first() else {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty command"));
    };
    let mut cmd = Command::new(program);
    cmd.args(args);
    Ok(cmd)
}

/// Runs commands on the host
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> io::Result<i32> {
        let status = command_for(argv)?.status()?;
        Ok(exit_code_of(status))
    }

    fn output(&self, argv: &[String]) -> io::Result<CommandOutput> {
        let output = command_for(argv)?.stderr(Stdio::null()).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }

    fn succeeds_within(&self, argv: &[String], budget: Duration) -> bool {
        let Ok(mut cmd) = command_for(argv) else {
            return false;
        };
        let Ok(mut child) = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let deadline = Instant::now() + budget;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return status.success(),
                Ok(None) if Instant::now() < deadline => {
                    std::thread::sleep(Duration::from_millis(20));
                }
                _ => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return false;
                }
            }
        }
    }

    fn spawn_detached(&self, argv: &[String]) -> io::Result<()> {
        command_for(argv)?
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}
