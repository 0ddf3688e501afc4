use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Snapshot of the process environment, taken once at startup.
///
/// Every component reads variables and the working directory from here
/// instead of the live process environment.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    pub vars: HashMap<String, String>,
    pub cwd: PathBuf,
}

impl Environment {
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
            cwd: std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Non-empty value of a variable
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Home directory, when `HOME` holds an absolute path
    pub fn home(&self) -> Option<PathBuf> {
        self.absolute_var("HOME")
    }

    fn absolute_var(&self, key: &str) -> Option<PathBuf> {
        self.var(key)
            .map(PathBuf::from)
            .filter(|path| path.is_absolute())
    }

    /// Find an executable by name on `PATH`
    pub fn find_in_path(&self, program: &str) -> Option<PathBuf> {
        if program.contains('/') {
            let path = PathBuf::from(program);
            return is_executable(&path).then_some(path);
        }
        let search = self.var("PATH")?;
        std::env::split_paths(search)
            .map(|dir| dir.join(program))
            .find(|candidate| is_executable(candidate))
    }
}

/// Per-user directories used for settings, caches and the debug log.
///
/// A directory is `None` when neither its XDG variable nor `HOME` gives an
/// absolute location; nothing is then read from or written to it.
#[derive(Clone, Debug)]
pub struct Paths {
    pub config_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
}

impl Paths {
    pub fn from_env(env: &Environment) -> Self {
        let home = env.home();

        let config_root = env
            .absolute_var("XDG_CONFIG_HOME")
            .or_else(|| home.as_ref().map(|h| h.join(".config")));
        let cache_root = env
            .absolute_var("XDG_CACHE_HOME")
            .or_else(|| home.as_ref().map(|h| h.join(".cache")));

        Self {
            config_dir: config_root.map(|root| root.join("savehook")),
            cache_dir: cache_root.map(|root| root.join("savehook")),
        }
    }

    pub fn settings_file(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join("settings.json"))
    }

    pub fn probe_cache_file(&self) -> Option<PathBuf> {
        self.cache_dir.as_ref().map(|dir| dir.join("ping.cmd"))
    }

    pub fn debug_log_file(&self) -> Option<PathBuf> {
        self.cache_dir.as_ref().map(|dir| dir.join("debug.log"))
    }
}

/// Regular file with at least one execute bit that the current user may run
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::fs::PermissionsExt;

    let Ok(meta) = std::fs::metadata(path) else {
        return false;
    };
    if !meta.is_file() || meta.permissions().mode() & 0o111 == 0 {
        return false;
    }

    let Ok(c_path) = std::ffi::CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the duration of the call
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}
