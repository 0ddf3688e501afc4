mod cli;
mod config;
mod debug_log;
mod identity;
mod network;
mod orchestrator;
mod paths;
mod runner;
mod sync_status;
mod tools;

use clap::Parser;

use crate::cli::{Cli, LaunchConfig};
use crate::config::{load_cfg, save_cfg};
use crate::orchestrator::Orchestrator;
use crate::paths::{Environment, Paths};
use crate::runner::SystemRunner;
use crate::sync_status::DesktopNotifier;

fn main() {
    let raw_args: Vec<String> = std::env::args().collect();
    let cli = Cli::parse();

    let env = Environment::capture();
    let paths = Paths::from_env(&env);
    let settings_file = paths.settings_file();
    let settings = settings_file.as_deref().map(load_cfg).unwrap_or_default();

    if cli.write_config {
        let Some(file) = settings_file else {
            eprintln!("[savehook] Error: No config directory, set HOME or XDG_CONFIG_HOME");
            std::process::exit(1);
        };
        match save_cfg(&file, &settings) {
            Ok(()) => {
                println!("[savehook] Wrote settings to {}", file.display());
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("[savehook] Error: Failed to write settings: {}", e);
                std::process::exit(1);
            }
        }
    }

    if settings.debug_log
        && let Some(log_file) = paths.debug_log_file()
    {
        debug_log::append(&log_file, &raw_args, &env);
    }

    let config = LaunchConfig::from(cli);
    let runner = SystemRunner;
    let notifier = DesktopNotifier::new(&env, &runner);

    let code = Orchestrator::new(&config, &settings, &env, &paths, &runner, &notifier).run();
    std::process::exit(code);
}
