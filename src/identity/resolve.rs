//! Ordered identity resolution

use std::path::Component;

use crate::cli::Mode;
use crate::identity::launcher::LauncherFamily;
use crate::identity::matchers::{looks_opaque, name_from_dir, name_from_executable};
use crate::paths::Environment;

/// Everything the resolver looks at
pub struct IdentityInputs<'a> {
    pub explicit: Option<&'a str>,
    pub mode: Mode,
    /// First positional argument (the wrapped executable)
    pub executable: Option<&'a str>,
    pub env: &'a Environment,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn from_launcher(env: &Environment) -> Option<String> {
    let family = LauncherFamily::detect(env);
    if family == LauncherFamily::Unknown {
        return None;
    }

    if let Some(title) = non_empty(family.primary_var().and_then(|v| env.var(v))) {
        println!("[savehook] identity - {} title: {}", family.name(), title);
        return Some(title);
    }

    let fallback = non_empty(family.fallback_var().and_then(|v| env.var(v)))?;
    if family.fallback_may_be_opaque() && looks_opaque(&fallback) {
        println!(
            "[savehook] identity - Ignoring {} store id '{}', not a title",
            family.name(),
            fallback
        );
        return None;
    }
    println!("[savehook] identity - {} name: {}", family.name(), fallback);
    Some(fallback)
}

fn from_working_dir(env: &Environment) -> Option<String> {
    let segments: Vec<String> = env
        .cwd
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    name_from_dir(&segments)
}

/// Resolve the game name; an empty string means no source produced one
pub fn resolve_identity(inputs: &IdentityInputs) -> String {
    if let Some(name) = non_empty(inputs.explicit) {
        println!("[savehook] identity - Using explicit name: {}", name);
        return name;
    }

    if let Some(name) = from_launcher(inputs.env) {
        return name;
    }

    if inputs.mode == Mode::Wrapper
        && let Some(name) = non_empty(inputs.executable).and_then(|e| name_from_executable(&e))
    {
        println!("[savehook] identity - From executable: {}", name);
        return name;
    }

    match from_working_dir(inputs.env) {
        Some(name) => {
            println!("[savehook] identity - From working directory: {}", name);
            name
        }
        None => String::new(),
    }
}
