//! Pattern matchers for identity extraction

use std::sync::LazyLock;

use regex::Regex;

/// Store ids such as Heroic's app names: long runs of letters and digits
static OPAQUE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{20,}$").expect("valid opaque id regex"));

/// `<Name>.app` bundle directory anywhere in the path
static APP_BUNDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[/\\])([^/\\]+)\.app(?:[/\\]|$)").expect("valid bundle regex"));

/// Directory names that say nothing about which game lives there
const GENERIC_DIRS: &[&str] = &[
    "bin", "bin32", "bin64", "binaries", "x64", "x86", "x86_64", "amd64", "i386", "win32",
    "win64", "windows", "linux", "linux64", "lib", "lib32", "lib64", "data", "game", "release",
    "shipping", "common", "system",
];

/// Ancestors examined above the working directory itself
const MAX_WALK_UP: usize = 3;

pub fn looks_opaque(value: &str) -> bool {
    OPAQUE_ID.is_match(value)
}

pub fn is_generic_dir(segment: &str) -> bool {
    GENERIC_DIRS
        .iter()
        .any(|generic| generic.eq_ignore_ascii_case(segment))
}

type Matcher = fn(&str) -> Option<String>;

fn bundle_name(path: &str) -> Option<String> {
    APP_BUNDLE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn file_stem(path: &str) -> Option<String> {
    let file = path.rsplit(['/', '\\']).next()?;
    let stem = match file.rfind('.') {
        Some(0) | None => file,
        Some(idx) => &file[..idx],
    };
    Some(stem.to_string())
}

/// Ordered, first match wins
const EXECUTABLE_MATCHERS: &[Matcher] = &[bundle_name, file_stem];

/// Game name from the wrapped executable's path
pub fn name_from_executable(path: &str) -> Option<String> {
    EXECUTABLE_MATCHERS
        .iter()
        .filter_map(|matcher| matcher(path.trim()))
        .find(|name| !name.trim().is_empty())
}

/// Game name from the working directory, walking past generic folder names
pub fn name_from_dir(segments: &[String]) -> Option<String> {
    let mut last = None;
    for segment in segments.iter().rev().take(MAX_WALK_UP + 1) {
        if !is_generic_dir(segment) {
            return Some(segment.clone());
        }
        last = Some(segment.clone());
    }
    last
}
