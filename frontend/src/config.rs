use log::{warn, Level};

pub const DEFAULT_INTERVAL_MS: u32 = 5_000;
pub const DEFAULT_QUIET_PERIOD_MS: u32 = 8_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayConfig {
    /// Fixed delay between automatic advances.
    pub interval_ms: u32,
    /// How long autoplay stays paused after a manual click when the pointer
    /// is not resting on the carousel.
    pub quiet_period_ms: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
        }
    }
}

impl AutoplayConfig {
    /// Replaces zero durations with the defaults; a zero interval would spin.
    pub fn validated(self) -> Self {
        let mut config = self;
        if config.interval_ms == 0 {
            warn!("Autoplay interval of 0ms, using {}ms", DEFAULT_INTERVAL_MS);
            config.interval_ms = DEFAULT_INTERVAL_MS;
        }
        if config.quiet_period_ms == 0 {
            warn!("Quiet period of 0ms, using {}ms", DEFAULT_QUIET_PERIOD_MS);
            config.quiet_period_ms = DEFAULT_QUIET_PERIOD_MS;
        }
        config
    }
}
