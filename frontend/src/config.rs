use log::Level;

/// Scroll offset (CSS pixels) past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Total length of a stat count-up, in milliseconds.
pub const COUNT_UP_DURATION_MS: u32 = 2000;

/// Interval between count-up ticks, in milliseconds. Roughly 60 updates a second.
pub const COUNT_UP_TICK_MS: u32 = 16;

/// Fraction of an element that must be on screen before it counts as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
