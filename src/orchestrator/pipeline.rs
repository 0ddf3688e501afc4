//! The launch state machine

use std::time::Duration;

use crate::cli::{LaunchConfig, Mode};
use crate::config::Settings;
use crate::identity::{IdentityInputs, resolve_identity};
use crate::network::{ManifestUpdate, NetworkProbe};
use crate::orchestrator::pure::{Summary, single_phase_argv, wrap_argv, summary_banner};
use crate::orchestrator::types::{ExecutionResult, LaunchError, Stage};
use crate::paths::{Environment, Paths};
use crate::runner::{CommandRunner, EXIT_SPAWN_FAILED};
use crate::sync_status::{Notifier, SyncStatusChecker};
use crate::tools::{ToolLocator, ToolSpec, ludusavi_spec, stc_spec};

pub struct Orchestrator<'a> {
    config: &'a LaunchConfig,
    settings: &'a Settings,
    env: &'a Environment,
    paths: &'a Paths,
    runner: &'a dyn CommandRunner,
    notifier: &'a dyn Notifier,
    primary_spec: ToolSpec,
    secondary_spec: ToolSpec,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        config: &'a LaunchConfig,
        settings: &'a Settings,
        env: &'a Environment,
        paths: &'a Paths,
        runner: &'a dyn CommandRunner,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            config,
            settings,
            env,
            paths,
            runner,
            notifier,
            primary_spec: ludusavi_spec(env),
            secondary_spec: stc_spec(env),
        }
    }

    fn enter(&self, stage: Stage) {
        println!("[savehook] -> {}", stage.name());
    }

    /// Run every stage and return the process exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(result) => result.exit_code,
            Err(e) => {
                eprintln!("[savehook] Error: {}", e);
                e.exit_code()
            }
        }
    }

    pub fn execute(&self) -> Result<ExecutionResult, LaunchError> {
        let mode = self.config.mode;

        self.enter(Stage::Init);
        if mode == Mode::Wrapper && self.config.command.is_empty() {
            return Err(LaunchError::MissingCommand);
        }

        let cache_dir = self.paths.cache_dir.clone().filter(|_| self.config.cache);
        let locator = ToolLocator::new(self.env, self.runner, cache_dir);
        let ludusavi = locator.resolve(&self.primary_spec)?;
        let stc = match locator.resolve(&self.secondary_spec) {
            Ok(handle) => Some(handle),
            Err(_) => {
                eprintln!("[savehook] tools - stc not found, sync check disabled");
                None
            }
        };
        self.enter(Stage::ToolsResolved);

        let game = resolve_identity(&IdentityInputs {
            explicit: self.config.game_name.as_deref(),
            mode,
            executable: self.config.command.first().map(String::as_str),
            env: self.env,
        });
        if game.is_empty() && mode != Mode::Wrapper {
            return Err(LaunchError::EmptyIdentity { mode });
        }
        self.enter(Stage::IdentityResolved);

        let folder = self.settings.sync_folder.as_str();
        let checker = SyncStatusChecker::new(
            stc,
            self.runner,
            self.notifier,
            self.settings.notifications,
            Duration::from_millis(self.settings.notify_delay_ms),
        );
        let sync = if self.settings.sync_check && checker.available() {
            let status = checker.check(folder);
            self.enter(Stage::SyncChecked);
            status.describe()
        } else {
            "skipped".to_string()
        };

        let probe = NetworkProbe::new(
            self.env,
            self.runner,
            self.paths.probe_cache_file().filter(|_| self.config.cache),
            self.settings.probe_hosts.clone(),
            Duration::from_millis(self.settings.probe_timeout_ms),
        );
        let online = probe.is_online();
        let manifest = ManifestUpdate::from_online(online);
        self.enter(Stage::NetworkChecked);

        self.enter(Stage::Executing);
        let argv = match mode {
            Mode::Pre | Mode::Post => single_phase_argv(&ludusavi, mode, manifest, &game),
            Mode::Wrapper if game.is_empty() => {
                eprintln!(
                    "[savehook] Warning: No game name found, running the game without save handling"
                );
                self.config.command.clone()
            }
            Mode::Wrapper => wrap_argv(&ludusavi, manifest, &game, &self.config.command),
        };
        println!("[savehook] Running: {:?}", argv);
        let exit_code = match self.runner.run(&argv) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("[savehook] Error: Failed to start {}: {}", argv[0], e);
                EXIT_SPAWN_FAILED
            }
        };
        let result = ExecutionResult { exit_code };

        self.enter(Stage::Finalizing);
        checker.trigger_rescan(folder);
        println!(
            "{}",
            summary_banner(&Summary {
                mode,
                game: &game,
                tool: &ludusavi,
                online,
                sync: &sync,
                exit_code: result.exit_code,
            })
        );

        self.enter(Stage::Done);
        Ok(result)
    }

    #[cfg(test)]
    fn with_specs(mut self, primary: ToolSpec, secondary: ToolSpec) -> Self {
        self.primary_spec = primary;
        self.secondary_spec = secondary;
        self
    }
}
