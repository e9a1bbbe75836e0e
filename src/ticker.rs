use std::time::Duration;

/// How often the event loop wakes to redraw and drive the countdown.
/// Shorter than a countdown tick so each second lands close to on time.
pub const DEFAULT_POLL_MS: u64 = 250;

/// Get the event-loop poll interval
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}
