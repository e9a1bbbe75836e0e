//! Completion cue: a sound plus a "buzz"
//!
//! On a terminal the sound is the BEL character and the buzz is a desktop
//! notification (osascript on macOS, notify-send elsewhere).

use crate::error::NotificationError;
use std::io::Write;
use std::process::{Command, Stdio};

pub trait Notifier {
    /// Play the completion sound
    fn play_sound(&mut self) -> Result<(), NotificationError>;

    /// Nudge the user with a physical or desktop alert
    fn vibrate(&mut self, subject: &str) -> Result<(), NotificationError>;
}

/// Notifier for the terminal build
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    pub bell: bool,
    pub desktop_notification: bool,
}

impl Notifier for TerminalNotifier {
    fn play_sound(&mut self) -> Result<(), NotificationError> {
        if !self.bell {
            return Ok(());
        }
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(NotificationError::Sound)
    }

    fn vibrate(&mut self, subject: &str) -> Result<(), NotificationError> {
        if !self.desktop_notification {
            return Ok(());
        }
        spawn_detached(alert_command(subject))
    }
}

/// Start `cmd` without blocking the event loop; a background thread reaps it
fn spawn_detached(mut cmd: Command) -> Result<(), NotificationError> {
    let mut child = cmd
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(NotificationError::Alert)?;
    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}

#[cfg(target_os = "macos")]
fn alert_command(subject: &str) -> Command {
    let script = format!(
        r#"display notification "{}" with title "Refocus - Session Complete""#,
        subject.replace('"', "\\\"")
    );
    let mut cmd = Command::new("osascript");
    cmd.arg("-e").arg(script);
    cmd
}

#[cfg(not(target_os = "macos"))]
fn alert_command(subject: &str) -> Command {
    let mut cmd = Command::new("notify-send");
    cmd.arg("Refocus - Session Complete").arg(subject);
    cmd
}

/// Notifier that does nothing (headless commands)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn play_sound(&mut self) -> Result<(), NotificationError> {
        Ok(())
    }

    fn vibrate(&mut self, _subject: &str) -> Result<(), NotificationError> {
        Ok(())
    }
}
