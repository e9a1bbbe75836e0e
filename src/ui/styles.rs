use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Running status badge style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Paused status badge style
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Text being typed into the subject box
pub fn input_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Countdown digits
pub fn clock_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(94, 132, 226))
        .add_modifier(Modifier::BOLD)
}

/// Progress gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Rgb(94, 132, 226)).bg(Color::DarkGray)
}

/// History entry that ran to completion
pub fn completed_style() -> Style {
    Style::default().fg(Color::Green)
}

/// History entry that was cancelled
pub fn incomplete_style() -> Style {
    Style::default().fg(Color::Red)
}
