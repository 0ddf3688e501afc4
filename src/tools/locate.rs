//! Tool resolution pipeline

use std::path::PathBuf;

use crate::paths::{Environment, is_executable};
use crate::runner::CommandRunner;
use crate::tools::operations::{handle_is_valid, probe_sandbox, read_cache, write_cache};
use crate::tools::types::{ToolHandle, ToolNotFound, ToolSpec};

pub struct ToolLocator<'a> {
    env: &'a Environment,
    runner: &'a dyn CommandRunner,
    /// `None` disables caching
    cache_dir: Option<PathBuf>,
}

impl<'a> ToolLocator<'a> {
    pub fn new(
        env: &'a Environment,
        runner: &'a dyn CommandRunner,
        cache_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            env,
            runner,
            cache_dir,
        }
    }

    fn cache_file(&self, spec: &ToolSpec) -> Option<PathBuf> {
        self.cache_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.path", spec.name)))
    }

    pub fn resolve(&self, spec: &ToolSpec) -> Result<ToolHandle, ToolNotFound> {
        let mut attempted = Vec::new();

        if let Some(path) = &spec.override_path {
            if is_executable(path) {
                println!(
                    "[savehook] tools - Using {} override: {}",
                    spec.name,
                    path.display()
                );
                return Ok(ToolHandle::native(path.clone()));
            }
            eprintln!(
                "[savehook] tools - Warning: {} override {} is not executable",
                spec.name,
                path.display()
            );
            attempted.push(format!("{} (override)", path.display()));
        }

        let cache_file = self.cache_file(spec);
        if let Some(file) = &cache_file
            && let Some(cached) = read_cache(file)
        {
            if handle_is_valid(&cached, self.env) {
                println!("[savehook] tools - Using cached {}: {}", spec.name, cached);
                return Ok(cached);
            }
            println!(
                "[savehook] tools - Cached {} is stale ({}), re-detecting",
                spec.name, cached
            );
        }

        let handle = self.search(spec, &mut attempted).ok_or_else(|| ToolNotFound {
            tool: spec.name.to_string(),
            attempted,
        })?;

        println!("[savehook] tools - Found {}: {}", spec.name, handle);

        if let Some(file) = &cache_file
            && let Err(e) = write_cache(file, &handle)
        {
            println!(
                "[savehook] tools - Could not cache {} ({}), continuing",
                spec.name, e
            );
        }

        Ok(handle)
    }

    fn search(&self, spec: &ToolSpec, attempted: &mut Vec<String>) -> Option<ToolHandle> {
        for candidate in &spec.candidates {
            if is_executable(candidate) {
                return Some(ToolHandle::native(candidate.clone()));
            }
            attempted.push(candidate.display().to_string());
        }

        if let Some(probe) = &spec.sandbox {
            if let Some(handle) = probe_sandbox(probe, self.env, self.runner) {
                return Some(handle);
            }
            attempted.push(format!("{} app {}", probe.runtime, probe.app_id));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::fake::FakeRunner;
    use crate::tools::types::{SandboxProbe, ToolKind};
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn make_exec(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn spec(candidates: Vec<PathBuf>) -> ToolSpec {
        ToolSpec {
            name: "ludusavi",
            override_path: None,
            candidates,
            sandbox: None,
        }
    }

    #[test]
    fn test_first_executable_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a/ludusavi");
        let b = dir.path().join("b/ludusavi");
        make_exec(&b);

        let env = Environment::default();
        let runner = FakeRunner::new();
        let locator = ToolLocator::new(&env, &runner, None);
        let handle = locator.resolve(&spec(vec![a, b.clone()])).unwrap();
        assert_eq!(handle, ToolHandle::native(b));
    }

    #[test]
    fn test_not_found_lists_attempts() {
        let env = Environment::default();
        let runner = FakeRunner::new();
        let locator = ToolLocator::new(&env, &runner, None);
        let mut s = spec(vec![PathBuf::from("/nonexistent/ludusavi")]);
        s.sandbox = Some(SandboxProbe::flatpak("com.example.App"));

        let err = locator.resolve(&s).unwrap_err();
        assert_eq!(err.tool, "ludusavi");
        assert_eq!(
            err.attempted,
            vec![
                "/nonexistent/ludusavi".to_string(),
                "flatpak app com.example.App".to_string()
            ]
        );
        assert!(err.to_string().contains("/nonexistent/ludusavi"));
    }

    #[test]
    fn test_override_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let candidate = dir.path().join("bin/ludusavi");
        let custom = dir.path().join("custom/ludusavi");
        make_exec(&candidate);
        make_exec(&custom);

        let env = Environment::default();
        let runner = FakeRunner::new();
        let locator = ToolLocator::new(&env, &runner, None);
        let mut s = spec(vec![candidate]);
        s.override_path = Some(custom.clone());
        assert_eq!(locator.resolve(&s).unwrap(), ToolHandle::native(custom));
    }

    #[test]
    fn test_sandbox_probe_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let flatpak = dir.path().join("flatpak");
        make_exec(&flatpak);

        let env = Environment {
            vars: [("PATH".to_string(), dir.path().display().to_string())].into(),
            cwd: PathBuf::from("/"),
        };
        let mut runner = FakeRunner::new();
        runner.outputs.insert(
            format!("{} info com.example.App", flatpak.display()),
            "installed".to_string(),
        );
        let locator = ToolLocator::new(&env, &runner, None);
        let mut s = spec(vec![]);
        s.sandbox = Some(SandboxProbe::flatpak("com.example.App"));

        let handle = locator.resolve(&s).unwrap();
        assert_eq!(handle.kind, ToolKind::Sandboxed);
        assert_eq!(handle.argv(&["backup"]), vec!["flatpak", "run", "com.example.App", "backup"]);
    }

    #[test]
    fn test_stale_cache_triggers_redetection() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        let first = dir.path().join("first/ludusavi");
        let second = dir.path().join("second/ludusavi");
        make_exec(&first);

        let env = Environment::default();
        let runner = FakeRunner::new();
        let locator = ToolLocator::new(&env, &runner, Some(cache_dir.clone()));
        let s = spec(vec![first.clone(), second.clone()]);

        assert_eq!(locator.resolve(&s).unwrap(), ToolHandle::native(first.clone()));
        let cached = std::fs::read_to_string(cache_dir.join("ludusavi.path")).unwrap();
        assert_eq!(cached.trim(), format!("native:{}", first.display()));

        // Cached path loses its execute bit; another install appears
        std::fs::set_permissions(&first, std::fs::Permissions::from_mode(0o644)).unwrap();
        make_exec(&second);

        assert_eq!(locator.resolve(&s).unwrap(), ToolHandle::native(second.clone()));
        let cached = std::fs::read_to_string(cache_dir.join("ludusavi.path")).unwrap();
        assert_eq!(cached.trim(), format!("native:{}", second.display()));
    }

    #[test]
    fn test_valid_cache_short_circuits_search() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        let cached = dir.path().join("cached/ludusavi");
        let candidate = dir.path().join("candidate/ludusavi");
        make_exec(&cached);
        make_exec(&candidate);
        std::fs::create_dir_all(&cache_dir).unwrap();
        std::fs::write(
            cache_dir.join("ludusavi.path"),
            format!("native:{}\n", cached.display()),
        )
        .unwrap();

        let env = Environment::default();
        let runner = FakeRunner::new();
        let locator = ToolLocator::new(&env, &runner, Some(cache_dir));
        assert_eq!(
            locator.resolve(&spec(vec![candidate])).unwrap(),
            ToolHandle::native(cached)
        );
    }

    #[test]
    fn test_cache_ignored_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let candidate = dir.path().join("bin/ludusavi");
        make_exec(&candidate);

        let env = Environment::default();
        let runner = FakeRunner::new();
        let locator = ToolLocator::new(&env, &runner, None);
        locator.resolve(&spec(vec![candidate])).unwrap();
        assert!(!dir.path().join("cache").exists());
    }
}
