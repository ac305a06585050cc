use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Input limits enforced at the request boundary
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct LimitsConfig {
    /// Maximum characters kept per text field after sanitization.
    #[serde(default = "LimitsConfig::default_max_text_length")]
    pub max_text_length: usize,
    /// Upper bound for a video's `duration_seconds`.
    #[serde(default = "LimitsConfig::default_max_duration_seconds")]
    pub max_duration_seconds: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_text_length: Self::default_max_text_length(),
            max_duration_seconds: Self::default_max_duration_seconds(),
        }
    }
}

impl LimitsConfig {
    const fn default_max_text_length() -> usize {
        defaults::MAX_TEXT_LENGTH
    }

    const fn default_max_duration_seconds() -> u32 {
        defaults::MAX_DURATION_SECONDS
    }

    /// Smallest duration a video request may ask for
    pub const fn min_duration_seconds(&self) -> u32 {
        defaults::MIN_DURATION_SECONDS
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_text_length > 0,
            "limits.max_text_length must be greater than 0"
        );
        ensure!(
            self.max_duration_seconds >= self.min_duration_seconds(),
            "limits.max_duration_seconds must be at least {}",
            self.min_duration_seconds()
        );
        Ok(())
    }
}
