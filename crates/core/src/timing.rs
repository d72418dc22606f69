use std::time::Duration;

use thiserror::Error;

/// Default pause between automatic slide changes.
pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_secs(10);

/// Default length of the fade-out before the index moves.
pub const DEFAULT_FADE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimingError {
    #[error("advance interval must be greater than zero")]
    ZeroInterval,
}

/// Timer settings for the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowTiming {
    advance_interval: Duration,
    fade_delay: Duration,
}

impl Default for SlideshowTiming {
    fn default() -> Self {
        Self {
            advance_interval: DEFAULT_ADVANCE_INTERVAL,
            fade_delay: DEFAULT_FADE_DELAY,
        }
    }
}

impl SlideshowTiming {
    /// # Errors
    ///
    /// Returns `TimingError::ZeroInterval` if `advance_interval` is zero.
    pub fn new(advance_interval: Duration, fade_delay: Duration) -> Result<Self, TimingError> {
        if advance_interval.is_zero() {
            return Err(TimingError::ZeroInterval);
        }
        Ok(Self {
            advance_interval,
            fade_delay,
        })
    }

    #[must_use]
    pub fn advance_interval(&self) -> Duration {
        self.advance_interval
    }

    /// A zero delay swaps slides without a fade.
    #[must_use]
    pub fn fade_delay(&self) -> Duration {
        self.fade_delay
    }
}
