//! Strategy selection and the connectivity check

use std::path::PathBuf;
use std::time::Duration;

use crate::network::pure::{
    LOOPBACK, PING, candidate_strategies, decode_form, encode_form, strategy_for,
};
use crate::network::types::ProbeStrategy;
use crate::paths::Environment;
use crate::runner::CommandRunner;

pub struct NetworkProbe<'a> {
    env: &'a Environment,
    runner: &'a dyn CommandRunner,
    /// `None` disables caching of the selected strategy
    cache_file: Option<PathBuf>,
    hosts: Vec<String>,
    budget: Duration,
}

impl<'a> NetworkProbe<'a> {
    pub fn new(
        env: &'a Environment,
        runner: &'a dyn CommandRunner,
        cache_file: Option<PathBuf>,
        hosts: Vec<String>,
        budget: Duration,
    ) -> Self {
        Self {
            env,
            runner,
            cache_file,
            hosts,
            budget,
        }
    }

    /// True when any probe host answers within the budget
    pub fn is_online(&self) -> bool {
        let Some(strategy) = self.strategy() else {
            println!("[savehook] network - No working ping form, assuming offline");
            return false;
        };

        for host in &self.hosts {
            if self.runner.succeeds_within(&strategy.target(host), self.budget) {
                println!("[savehook] network - {} reachable, online", host);
                return true;
            }
        }

        println!("[savehook] network - No probe host reachable, assuming offline");
        false
    }

    fn cached_strategy(&self) -> Option<ProbeStrategy> {
        let file = self.cache_file.as_ref()?;
        let content = std::fs::read_to_string(file).ok()?;
        let form = decode_form(content.lines().next()?)?;
        self.env.find_in_path(PING)?;
        Some(strategy_for(form, self.budget))
    }

    /// Working ping form: cached, or found by probing loopback
    pub fn strategy(&self) -> Option<ProbeStrategy> {
        if let Some(strategy) = self.cached_strategy() {
            return Some(strategy);
        }

        let strategy = candidate_strategies(self.budget)
            .into_iter()
            .find(|s| self.runner.succeeds_within(&s.target(LOOPBACK), self.budget))?;

        if let Some(file) = &self.cache_file {
            let written = file
                .parent()
                .map(std::fs::create_dir_all)
                .unwrap_or(Ok(()))
                .and_then(|_| std::fs::write(file, format!("{}\n", encode_form(strategy.form))));
            if let Err(e) = written {
                println!("[savehook] network - Could not cache ping form ({})", e);
            }
        }

        Some(strategy)
    }
}
