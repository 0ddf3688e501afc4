//! Sync status type definitions

/// Completion state of the sync folder; recomputed every run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncStatus {
    /// Whether the sync CLI was found
    pub available: bool,
    /// 0-100, `None` when the CLI gave no usable answer
    pub percentage: Option<u8>,
}

impl SyncStatus {
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn complete(&self) -> bool {
        self.percentage == Some(100)
    }

    pub fn describe(&self) -> String {
        match (self.available, self.percentage) {
            (false, _) => "unavailable".to_string(),
            (true, None) => "unknown".to_string(),
            (true, Some(p)) => format!("{}%", p),
        }
    }
}
