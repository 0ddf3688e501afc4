//! Launcher family detection and its identity variables

use crate::paths::Environment;

/// Forces a launcher family instead of auto-detection
pub const LAUNCHER_OVERRIDE_VAR: &str = "SAVEHOOK_LAUNCHER";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LauncherFamily {
    Lutris,
    Heroic,
    Unknown,
}

impl LauncherFamily {
    /// Detection order matters: Lutris is checked before Heroic
    const KNOWN: [LauncherFamily; 2] = [LauncherFamily::Lutris, LauncherFamily::Heroic];

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "lutris" => LauncherFamily::Lutris,
            "heroic" => LauncherFamily::Heroic,
            _ => LauncherFamily::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LauncherFamily::Lutris => "Lutris",
            LauncherFamily::Heroic => "Heroic",
            LauncherFamily::Unknown => "unknown",
        }
    }

    /// Variable holding a human-readable title
    pub fn primary_var(&self) -> Option<&'static str> {
        match self {
            LauncherFamily::Lutris => Some("GAME_NAME"),
            LauncherFamily::Heroic => Some("HEROIC_GAME_TITLE"),
            LauncherFamily::Unknown => None,
        }
    }

    pub fn fallback_var(&self) -> Option<&'static str> {
        match self {
            LauncherFamily::Lutris => Some("LUTRIS_GAME_NAME"),
            LauncherFamily::Heroic => Some("HEROIC_APP_NAME"),
            LauncherFamily::Unknown => None,
        }
    }

    /// Variable that only this launcher sets
    fn marker_var(&self) -> Option<&'static str> {
        match self {
            LauncherFamily::Lutris => Some("LUTRIS_GAME_UUID"),
            LauncherFamily::Heroic => Some("HEROIC_APP_SOURCE"),
            LauncherFamily::Unknown => None,
        }
    }

    /// Whether the fallback variable may carry a store id instead of a title
    pub fn fallback_may_be_opaque(&self) -> bool {
        matches!(self, LauncherFamily::Heroic)
    }

    pub fn detect(env: &Environment) -> Self {
        if let Some(forced) = env.var(LAUNCHER_OVERRIDE_VAR) {
            return Self::parse(forced);
        }

        Self::KNOWN
            .into_iter()
            .find(|family| {
                [family.marker_var(), family.primary_var(), family.fallback_var()]
                    .into_iter()
                    .flatten()
                    .any(|var| env.var(var).is_some())
            })
            .unwrap_or(LauncherFamily::Unknown)
    }
}
