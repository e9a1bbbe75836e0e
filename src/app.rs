use crate::domain::{minutes_to_millis, Countdown, CountdownEvent, Screen, SessionOutcome, MIN_DURATION_MS};
use crate::notifications::Notifier;
use crate::persistence::{HistoryStore, Settings};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Longest subject the input box accepts
pub const MAX_SUBJECT_LEN: usize = 50;

/// Smallest total a time adjustment can leave behind
const MIN_TOTAL_MS: u64 = 60_000;

/// The subject being timed together with its countdown
#[derive(Debug)]
pub struct ActiveSession {
    pub subject: String,
    pub countdown: Countdown,
    /// Remaining share of the run for the progress bar (0.0 ..= 100.0)
    pub progress: f64,
}

/// Main application state
///
/// Owns the single active session (if any) and the focus history. A session
/// leaves `active` exactly once, through [`AppState::cancel`] or
/// [`AppState::complete`], and that is where its outcome gets recorded.
pub struct AppState {
    pub screen: Screen,
    pub input: String,
    pub active: Option<ActiveSession>,
    pub history: HistoryStore,
    pub settings: Settings,
    notifier: Box<dyn Notifier>,
    last_save_failed: bool,
}

impl AppState {
    pub fn new(history: HistoryStore, settings: Settings, notifier: Box<dyn Notifier>) -> Self {
        Self {
            screen: Screen::Focus,
            input: String::new(),
            active: None,
            history,
            settings,
            notifier,
            last_save_failed: false,
        }
    }

    pub fn active_subject(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.subject.as_str())
    }

    pub fn is_timing(&self) -> bool {
        self.active.is_some()
    }

    fn default_duration_ms(&self) -> u64 {
        minutes_to_millis(self.settings.default_minutes).max(MIN_DURATION_MS)
    }

    fn go_to_timer(&mut self) {
        self.screen = Screen::Timer;
    }

    fn go_to_selection(&mut self) {
        self.screen = Screen::Focus;
    }

    // ── Input buffer ────────────────────────────────────────────────

    pub fn push_input(&mut self, c: char) {
        if self.input.chars().count() < MAX_SUBJECT_LEN {
            self.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Submit whatever is in the input box
    pub fn submit_input(&mut self) -> bool {
        let text = self.input.clone();
        self.submit_subject(&text)
    }

    // ── Session lifecycle ───────────────────────────────────────────

    /// Make `text` the active subject and switch to the timer.
    ///
    /// Blank text, or a session already in progress, leaves everything as is.
    pub fn submit_subject(&mut self, text: &str) -> bool {
        let subject = text.trim();
        if subject.is_empty() || self.active.is_some() {
            return false;
        }

        let countdown = Countdown::controlled(self.default_duration_ms());
        info!(subject, duration_ms = countdown.total_ms(), "focus session selected");
        self.active = Some(ActiveSession {
            subject: subject.to_string(),
            countdown,
            progress: 100.0,
        });
        self.input.clear();
        self.go_to_timer();
        true
    }

    /// Start the countdown if it is stopped, pause it if it is running
    pub fn toggle_start_pause(&mut self, now: Instant) {
        if let Some(session) = self.active.as_mut() {
            if session.countdown.is_running() {
                session.countdown.pause();
            } else {
                session.countdown.resume(now);
            }
        }
        self.process_events();
    }

    /// Shift remaining and total time by `delta_minutes` without touching
    /// the running state. Remaining time never drops below one tick.
    pub fn adjust_time(&mut self, delta_minutes: i64) {
        let Some(session) = self.active.as_mut() else {
            return;
        };

        let delta = delta_minutes.saturating_mul(60_000);
        let remaining = (session.countdown.remaining_ms() as i64).saturating_add(delta);
        let total = (session.countdown.total_ms() as i64).saturating_add(delta);

        let remaining = remaining.max(MIN_DURATION_MS as i64) as u64;
        let total = if total > 0 { total as u64 } else { MIN_TOTAL_MS };

        session.countdown.override_time(remaining, total);
        session.progress = 100.0;
        debug!(delta_minutes, remaining, total = session.countdown.total_ms(), "time adjusted");
    }

    /// Reset the countdown to `minutes` and stop it
    pub fn set_time(&mut self, minutes: f64) {
        let Some(session) = self.active.as_mut() else {
            return;
        };

        let duration = minutes_to_millis(minutes).max(MIN_DURATION_MS);
        session.countdown.pause();
        session.countdown.override_time(duration, duration);
        session.progress = 100.0;
        debug!(minutes, "time set");
        self.process_events();
    }

    /// Apply the preset at `index` from the settings, if there is one
    pub fn apply_preset(&mut self, index: usize) {
        if let Some(&minutes) = self.settings.presets.get(index) {
            self.set_time(f64::from(minutes));
        }
    }

    /// Give up on the active subject; records it as incomplete
    pub fn cancel(&mut self) -> Option<SessionOutcome> {
        let session = self.active.take()?;
        let outcome = SessionOutcome::incomplete(session.subject);
        self.record(outcome.clone());
        self.go_to_selection();
        Some(outcome)
    }

    /// Finish the active subject after its countdown ran out; records it as
    /// completed. The next subject starts again from the default duration.
    pub fn complete(&mut self) -> Option<SessionOutcome> {
        let session = self.active.take()?;
        self.play_completion_cue(&session.subject);
        let outcome = SessionOutcome::completed(session.subject);
        self.record(outcome.clone());
        self.go_to_selection();
        Some(outcome)
    }

    fn record(&mut self, outcome: SessionOutcome) {
        info!(subject = %outcome.subject, status = ?outcome.status, key = %outcome.key, "focus session recorded");
        self.history.append(outcome);
    }

    fn play_completion_cue(&mut self, subject: &str) {
        if let Err(e) = self.notifier.play_sound() {
            warn!("{}", e);
        }
        if let Err(e) = self.notifier.vibrate(subject) {
            warn!("{}", e);
        }
    }

    /// Drive the countdown up to `now` and react to what it reported
    pub fn tick(&mut self, now: Instant) {
        if let Some(session) = self.active.as_mut() {
            session.countdown.advance(now);
        }
        if self.process_events() {
            self.complete();
        }
    }

    /// Drain countdown events; true when the run has ended
    fn process_events(&mut self) -> bool {
        let Some(session) = self.active.as_mut() else {
            return false;
        };

        let mut ended = false;
        for event in session.countdown.drain_events() {
            match event {
                CountdownEvent::Started => debug!(subject = %session.subject, "countdown running"),
                CountdownEvent::Paused => {
                    debug!(pause_count = session.countdown.pause_count(), "countdown paused")
                }
                CountdownEvent::Progress(pct) => session.progress = pct,
                CountdownEvent::Ended => ended = true,
            }
        }
        ended
    }

    // ── History ─────────────────────────────────────────────────────

    pub fn clear_history(&mut self) {
        info!(count = self.history.len(), "clearing focus history");
        self.history.clear();
    }

    pub fn needs_save(&self) -> bool {
        self.history.is_dirty()
    }

    /// Flush history to disk. Failures are logged and retried next cycle.
    pub fn save(&mut self) {
        match self.history.persist() {
            Ok(()) => self.last_save_failed = false,
            Err(e) => {
                if !self.last_save_failed {
                    warn!("{}; keeping history in memory", e);
                }
                self.last_save_failed = true;
            }
        }
    }

    /// Called on exit: an unfinished session is recorded as incomplete
    pub fn shutdown(&mut self) {
        if self.cancel().is_some() {
            info!("quit while timing; session recorded as incomplete");
        }
        if self.needs_save() {
            self.save();
        }
    }
}
