use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout of the subject prompt screen
pub struct FocusLayout {
    pub keybindings_area: Rect,
    pub prompt_area: Rect,
    pub history_area: Rect,
}

/// Layout of the countdown screen
pub struct TimerLayout {
    pub keybindings_area: Rect,
    pub clock_area: Rect,
    pub subject_area: Rect,
    pub progress_area: Rect,
    pub controls_area: Rect,
}

/// Create the focus screen layout
/// - Top bar: keybindings (1 row)
/// - Prompt with the input box (5 rows)
/// - History list fills the rest
pub fn create_focus_layout(area: Rect) -> FocusLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(5), // Prompt
            Constraint::Min(0),    // History
        ])
        .split(area);

    FocusLayout {
        keybindings_area: chunks[0],
        prompt_area: chunks[1],
        history_area: chunks[2],
    }
}

/// Create the timer screen layout
/// - Top bar: keybindings (1 row)
/// - Clock centred in the upper half
/// - Subject, progress gauge and control hints below it
pub fn create_timer_layout(area: Rect) -> TimerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Keybindings bar
            Constraint::Percentage(40), // Clock
            Constraint::Length(4),      // Subject
            Constraint::Length(3),      // Progress
            Constraint::Min(0),         // Controls
        ])
        .split(area);

    TimerLayout {
        keybindings_area: chunks[0],
        clock_area: centered_box(chunks[1], 13, 3),
        subject_area: chunks[2],
        progress_area: chunks[3],
        controls_area: chunks[4],
    }
}

/// A `width` x `height` box centred in `area`, shrunk to fit if needed
pub fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
