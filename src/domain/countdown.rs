//! Countdown engine.
//!
//! A caller-driven state machine: it owns no thread or timer. The event loop
//! calls [`Countdown::advance`] with the current instant and every tick that
//! has fallen due since the last call is applied, each one subtracting exactly
//! one second. Notifications are queued as [`CountdownEvent`]s and handed out
//! by [`Countdown::drain_events`], so the owner reacts to `Ended` only after
//! the tick that produced it has returned.
//!
//! ```text
//! ready --resume--> running --pause--> paused --resume--> running
//!                      |
//!                      +--tick at 0--> ended
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Length of one tick in milliseconds
pub const TICK_MS: u64 = 1000;

/// Shortest countdown; anything below collapses to a single tick
pub const MIN_DURATION_MS: u64 = TICK_MS;

const TICK: Duration = Duration::from_millis(TICK_MS);

/// Convert (possibly fractional) minutes to whole milliseconds, clamping at 0
pub fn minutes_to_millis(minutes: f64) -> u64 {
    if minutes <= 0.0 || !minutes.is_finite() {
        return 0;
    }
    (minutes * 60_000.0).round() as u64
}

/// Render milliseconds as `MM:SS`
pub fn format_clock(millis: u64) -> String {
    let minutes = millis / 1000 / 60;
    let seconds = millis / 1000 % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

fn clamp_duration(duration_ms: u64) -> u64 {
    duration_ms.max(MIN_DURATION_MS)
}

/// Notification produced by the countdown
#[derive(Debug, Clone, PartialEq)]
pub enum CountdownEvent {
    /// Ticking began or resumed
    Started,
    /// Ticking stopped on a running -> paused transition
    Paused,
    /// A tick landed; percentage of the current total still remaining
    Progress(f64),
    /// A tick found nothing left. Emitted at most once per run.
    Ended,
}

/// Snapshot of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_ms: u64,
    pub total_ms: u64,
    pub is_running: bool,
    pub pause_count: u32,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    remaining_ms: u64,
    /// Duration captured at the last start or override; progress denominator
    total_ms: u64,
    pause_count: u32,
    /// Owner supplies remaining time explicitly; `set_duration` leaves it alone
    controlled: bool,
    ended: bool,
    /// Deadline of the next tick. `Some` exactly while running.
    next_tick_at: Option<Instant>,
    events: VecDeque<CountdownEvent>,
}

impl Countdown {
    /// Create a stopped countdown that resets itself when its duration changes
    pub fn new(duration_ms: u64) -> Self {
        Self::build(duration_ms, false)
    }

    /// Create a stopped countdown whose remaining time only changes through
    /// ticks and [`Countdown::override_time`]
    pub fn controlled(duration_ms: u64) -> Self {
        Self::build(duration_ms, true)
    }

    fn build(duration_ms: u64, controlled: bool) -> Self {
        let duration = clamp_duration(duration_ms);
        Self {
            remaining_ms: duration,
            total_ms: duration,
            pause_count: 0,
            controlled,
            ended: false,
            next_tick_at: None,
            events: VecDeque::new(),
        }
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn is_running(&self) -> bool {
        self.next_tick_at.is_some()
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn pause_count(&self) -> u32 {
        self.pause_count
    }

    pub fn state(&self) -> TimerState {
        TimerState {
            remaining_ms: self.remaining_ms,
            total_ms: self.total_ms,
            is_running: self.is_running(),
            pause_count: self.pause_count,
        }
    }

    /// Remaining time as a percentage of the current total (0.0 ..= 100.0)
    pub fn progress_pct(&self) -> f64 {
        if self.total_ms == 0 {
            return 0.0;
        }
        self.remaining_ms as f64 * 100.0 / self.total_ms as f64
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining_ms)
    }

    /// Begin a fresh run of `duration_ms`, ticking once per second from `now`
    pub fn start(&mut self, duration_ms: u64, now: Instant) {
        let duration = clamp_duration(duration_ms);
        self.remaining_ms = duration;
        self.total_ms = duration;
        self.ended = false;
        self.next_tick_at = Some(now + TICK);
        self.events.push_back(CountdownEvent::Started);
    }

    /// Stop ticking, keeping the remaining time. No-op unless running.
    pub fn pause(&mut self) {
        if self.next_tick_at.take().is_some() {
            self.pause_count += 1;
            self.events.push_back(CountdownEvent::Paused);
        }
    }

    /// Continue ticking from the current remaining time.
    ///
    /// Returns false when already running or when the run has ended.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.is_running() || self.ended {
            return false;
        }
        self.next_tick_at = Some(now + TICK);
        self.events.push_back(CountdownEvent::Started);
        true
    }

    /// Apply a single tick
    pub fn tick(&mut self) {
        if self.ended {
            return;
        }

        if self.remaining_ms == 0 {
            self.next_tick_at = None;
            self.ended = true;
            self.events.push_back(CountdownEvent::Ended);
            return;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(TICK_MS);
        self.events.push_back(CountdownEvent::Progress(self.progress_pct()));
    }

    /// Apply every tick due at `now`; returns how many fired.
    ///
    /// Deadlines move forward by exactly one tick each time, so a late call
    /// catches up instead of dropping ticks.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(due) = self.next_tick_at {
            if now < due {
                break;
            }
            self.tick();
            fired += 1;
            if let Some(next) = self.next_tick_at.as_mut() {
                *next += TICK;
            }
        }
        fired
    }

    /// Change the nominal duration.
    ///
    /// Uncontrolled countdowns restart from the new duration. Controlled ones
    /// only take it as the new progress denominator.
    pub fn set_duration(&mut self, duration_ms: u64) {
        let duration = clamp_duration(duration_ms);
        if self.controlled {
            self.total_ms = duration.max(self.remaining_ms);
        } else {
            self.remaining_ms = duration;
            self.total_ms = duration;
            self.ended = false;
        }
    }

    /// Set remaining and total time explicitly. Running state is untouched.
    pub fn override_time(&mut self, remaining_ms: u64, total_ms: u64) {
        self.remaining_ms = remaining_ms;
        self.total_ms = total_ms.max(remaining_ms);
        if remaining_ms > 0 {
            self.ended = false;
        }
    }

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<CountdownEvent> {
        self.events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn count_progress(events: &[CountdownEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, CountdownEvent::Progress(_)))
            .count()
    }

    fn count_ended(events: &[CountdownEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, CountdownEvent::Ended))
            .count()
    }

    #[test]
    fn test_run_to_completion_tick_count() {
        for duration in [1, 999, 1000, 1500, 6000, 60_000, 61_001] {
            let mut countdown = Countdown::new(duration);
            countdown.start(duration, Instant::now());

            let mut events = Vec::new();
            for _ in 0..200 {
                countdown.tick();
                events.extend(countdown.drain_events());
                if countdown.has_ended() {
                    break;
                }
            }

            let expected = clamp_duration(duration).div_ceil(TICK_MS) as usize;
            assert_eq!(count_progress(&events), expected, "duration {}", duration);
            assert_eq!(count_ended(&events), 1, "duration {}", duration);
            assert_eq!(countdown.remaining_ms(), 0);
            assert!(!countdown.is_running());
        }
    }

    #[test]
    fn test_advance_fires_due_ticks_only() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(6000);
        countdown.start(6000, t0);

        assert_eq!(countdown.advance(t0 + Duration::from_millis(999)), 0);
        assert_eq!(countdown.advance(t0 + secs(1)), 1);
        assert_eq!(countdown.remaining_ms(), 5000);

        // Late wake-up catches up on every missed tick
        assert_eq!(countdown.advance(t0 + secs(4)), 3);
        assert_eq!(countdown.remaining_ms(), 2000);

        assert_eq!(countdown.advance(t0 + secs(7)), 3);
        let events = countdown.drain_events();
        assert_eq!(events.first(), Some(&CountdownEvent::Started));
        assert_eq!(count_progress(&events), 6);
        assert_eq!(count_ended(&events), 1);

        // Nothing more once ended
        assert_eq!(countdown.advance(t0 + secs(100)), 0);
        assert!(countdown.drain_events().is_empty());
    }

    #[test]
    fn test_end_is_reported_once() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(1000);
        countdown.start(1000, t0);
        countdown.advance(t0 + secs(2));

        countdown.tick();
        countdown.tick();
        assert!(!countdown.resume(t0 + secs(3)));
        countdown.advance(t0 + secs(10));

        assert_eq!(count_ended(&countdown.drain_events()), 1);
    }

    #[test]
    fn test_pause_resume_preserves_remaining() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(10_000);
        countdown.start(10_000, t0);
        countdown.advance(t0 + secs(3));
        assert_eq!(countdown.remaining_ms(), 7000);

        countdown.pause();
        assert!(!countdown.is_running());
        assert_eq!(countdown.advance(t0 + secs(60)), 0);
        assert_eq!(countdown.remaining_ms(), 7000);

        assert!(countdown.resume(t0 + secs(60)));
        assert_eq!(countdown.remaining_ms(), 7000);
        countdown.advance(t0 + secs(61));
        assert_eq!(countdown.remaining_ms(), 6000);
    }

    #[test]
    fn test_pause_notifies_once_per_transition() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(10_000);
        countdown.start(10_000, t0);
        countdown.drain_events();

        countdown.pause();
        countdown.pause();
        assert_eq!(countdown.drain_events(), vec![CountdownEvent::Paused]);
        assert_eq!(countdown.pause_count(), 1);

        assert!(countdown.resume(t0));
        assert!(!countdown.resume(t0));
        assert_eq!(countdown.drain_events(), vec![CountdownEvent::Started]);

        countdown.pause();
        assert_eq!(countdown.pause_count(), 2);
    }

    #[test]
    fn test_no_tick_after_pause() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(1000);
        countdown.start(1000, t0);
        countdown.pause();

        countdown.advance(t0 + secs(30));
        assert_eq!(
            countdown.drain_events(),
            vec![CountdownEvent::Started, CountdownEvent::Paused]
        );
        assert!(!countdown.has_ended());
    }

    #[test]
    fn test_zero_duration_collapses_to_one_tick() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.remaining_ms(), MIN_DURATION_MS);

        countdown.start(0, Instant::now());
        assert_eq!(countdown.total_ms(), MIN_DURATION_MS);
        countdown.tick();
        assert!(!countdown.has_ended());
        countdown.tick();
        assert!(countdown.has_ended());
    }

    #[test]
    fn test_progress_uses_latest_total() {
        let mut countdown = Countdown::controlled(10_000);
        countdown.start(10_000, Instant::now());
        countdown.tick();
        countdown.override_time(20_000, 20_000);
        countdown.tick();

        let progress: Vec<f64> = countdown
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                CountdownEvent::Progress(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(progress, vec![90.0, 95.0]);
    }

    #[test]
    fn test_controlled_duration_change_keeps_remaining() {
        let mut countdown = Countdown::controlled(60_000);
        countdown.start(60_000, Instant::now());
        countdown.tick();

        countdown.set_duration(120_000);
        assert_eq!(countdown.remaining_ms(), 59_000);
        assert_eq!(countdown.total_ms(), 120_000);
        assert!(countdown.is_running());
    }

    #[test]
    fn test_uncontrolled_duration_change_resets() {
        let mut countdown = Countdown::new(60_000);
        countdown.start(60_000, Instant::now());
        countdown.tick();

        countdown.set_duration(120_000);
        assert_eq!(countdown.remaining_ms(), 120_000);
        assert_eq!(countdown.total_ms(), 120_000);
    }

    #[test]
    fn test_state_snapshot() {
        let mut countdown = Countdown::controlled(5000);
        assert_eq!(
            countdown.state(),
            TimerState {
                remaining_ms: 5000,
                total_ms: 5000,
                is_running: false,
                pause_count: 0,
            }
        );
        assert!(countdown.resume(Instant::now()));
        assert!(countdown.state().is_running);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(999), "00:00");
        assert_eq!(format_clock(61_000), "01:01");
        assert_eq!(format_clock(600_000), "10:00");
        assert_eq!(format_clock(3_600_000), "60:00");
    }

    #[test]
    fn test_minutes_to_millis() {
        assert_eq!(minutes_to_millis(20.0), 1_200_000);
        assert_eq!(minutes_to_millis(0.1), 6000);
        assert_eq!(minutes_to_millis(-3.0), 0);
    }
}
