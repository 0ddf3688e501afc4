//! Network probe type definitions

/// Manifest-update flag passed to the backup tool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestUpdate {
    Try,
    Skip,
}

impl ManifestUpdate {
    pub fn from_online(online: bool) -> Self {
        if online {
            ManifestUpdate::Try
        } else {
            ManifestUpdate::Skip
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            ManifestUpdate::Try => "--try-manifest-update",
            ManifestUpdate::Skip => "--no-manifest-update",
        }
    }
}

/// How ping is told the per-attempt timeout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeForm {
    /// `-W` in milliseconds
    Millis,
    /// `-W` in whole seconds
    Seconds,
    /// No timeout flag; the runner's budget still applies
    Plain,
}

impl ProbeForm {
    /// Preference order
    pub const ALL: [ProbeForm; 3] = [ProbeForm::Millis, ProbeForm::Seconds, ProbeForm::Plain];

    pub fn name(&self) -> &'static str {
        match self {
            ProbeForm::Millis => "millis",
            ProbeForm::Seconds => "seconds",
            ProbeForm::Plain => "plain",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|form| form.name() == name)
    }
}

/// Ping invocation (program and flags) without the target host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeStrategy {
    pub form: ProbeForm,
    pub argv: Vec<String>,
}

impl ProbeStrategy {
    pub fn target(&self, host: &str) -> Vec<String> {
        let mut argv = self.argv.clone();
        argv.push(host.to_string());
        argv
    }
}
