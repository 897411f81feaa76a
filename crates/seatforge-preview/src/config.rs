//! Preview actor configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Longest quiet window the actor will actually wait for. Anything longer
/// is treated as this; a `Snapshot` still flushes pending edits at once.
pub const MAX_DEBOUNCE: Duration = Duration::from_secs(60 * 60);

/// Settings for a preview actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// How long the edit stream must stay quiet before the plan is
    /// recomputed. Zero recomputes after every edit; values above
    /// [`MAX_DEBOUNCE`] are clamped.
    pub debounce: Duration,

    /// Capacity of the actor's command channel. Senders wait when full.
    pub channel_size: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
            channel_size: 64,
        }
    }
}

impl PreviewConfig {
    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            debounce,
            ..Self::default()
        }
    }

    /// The debounce window clamped to [`MAX_DEBOUNCE`], so adding it to
    /// the current instant can never overflow.
    pub fn effective_debounce(&self) -> Duration {
        self.debounce.min(MAX_DEBOUNCE)
    }
}
