use crate::app::{AppState, MAX_SUBJECT_LEN};
use crate::ui::styles::{border_style, hint_style, input_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input line with a block cursor
fn create_input_line(input: &str) -> Line<'_> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(input, input_style()),
        Span::styled("█", input_style()),
    ])
}

/// Render the subject prompt
pub fn render_focus_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let used = app.input.chars().count();
    let lines = vec![
        Line::raw(""),
        create_input_line(&app.input),
        Line::from(Span::styled(
            format!("  {}/{}", used, MAX_SUBJECT_LEN),
            hint_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" What would you like to focus on? ", title_style())),
    );

    f.render_widget(paragraph, area);
}
