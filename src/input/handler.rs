use crate::app::AppState;
use crate::domain::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events; returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.screen {
        Screen::Focus => handle_focus_screen(app, key),
        Screen::Timer => handle_timer_screen(app, key),
    }
}

/// Keys on the subject prompt: typing goes into the input box
fn handle_focus_screen(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Enter => {
            app.submit_input();
        }
        KeyCode::Backspace => app.pop_input(),

        // Clear history
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_history();
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.push_input(c),
        _ => {}
    }
    false
}

/// Keys on the countdown screen
fn handle_timer_screen(app: &mut AppState, key: KeyEvent) -> bool {
    let (small, large) = app.settings.adjust_steps;

    match key.code {
        KeyCode::Char('q') => return true,

        // Start / pause
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_start_pause(Instant::now()),

        // Presets
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.apply_preset(index);
        }

        // Adjust
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_time(small),
        KeyCode::Char('-') | KeyCode::Char('_') => app.adjust_time(-small),
        KeyCode::Char('>') | KeyCode::Char('.') => app.adjust_time(large),
        KeyCode::Char('<') | KeyCode::Char(',') => app.adjust_time(-large),

        // Give up on this subject
        KeyCode::Char('x') | KeyCode::Backspace | KeyCode::Esc => {
            app.cancel();
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SessionStatus;
    use crate::notifications::SilentNotifier;
    use crate::persistence::{HistoryStore, Settings};
    use tempfile::TempDir;

    fn create_test_app() -> (AppState, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let history = HistoryStore::new(temp_dir.path().join("focus_history.json"));
        let app = AppState::new(history, Settings::default(), Box::new(SilentNotifier));
        (app, temp_dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_type_and_submit_subject() {
        let (mut app, _dir) = create_test_app();

        type_text(&mut app, "Essay");
        handle_key(&mut app, key(KeyCode::Backspace));
        type_text(&mut app, "y");
        assert_eq!(app.input, "Essay");

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Timer);
        assert_eq!(app.active_subject(), Some("Essay"));
    }

    #[test]
    fn test_enter_on_empty_input_stays() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Focus);
        assert!(app.active.is_none());
    }

    #[test]
    fn test_q_is_typed_on_focus_screen() {
        let (mut app, _dir) = create_test_app();
        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))));
        assert_eq!(app.input, "q");
    }

    #[test]
    fn test_handle_quit() {
        let (mut app, _dir) = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Esc)));
        assert!(handle_key(&mut app, ctrl('c')));

        app.submit_subject("Essay");
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_timer_keys() {
        let (mut app, _dir) = create_test_app();
        app.submit_subject("Essay");

        handle_key(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.active.as_ref().unwrap().countdown.total_ms(), 600_000);

        handle_key(&mut app, key(KeyCode::Char('+')));
        assert_eq!(app.active.as_ref().unwrap().countdown.remaining_ms(), 660_000);

        handle_key(&mut app, key(KeyCode::Char('<')));
        assert_eq!(app.active.as_ref().unwrap().countdown.remaining_ms(), 360_000);

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.active.as_ref().unwrap().countdown.is_running());

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(!app.active.as_ref().unwrap().countdown.is_running());
    }

    #[test]
    fn test_cancel_key_records_incomplete() {
        let (mut app, _dir) = create_test_app();
        app.submit_subject("Reading");

        handle_key(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.screen, Screen::Focus);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.entries()[0].status, SessionStatus::Incomplete);
    }

    #[test]
    fn test_clear_history_key() {
        let (mut app, _dir) = create_test_app();
        app.submit_subject("Reading");
        app.cancel();

        handle_key(&mut app, ctrl('l'));
        assert!(app.history.is_empty());
        assert!(app.input.is_empty());
    }
}
