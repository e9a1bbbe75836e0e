use crate::app::AppState;
use crate::domain::SessionOutcome;
use crate::ui::styles::{border_style, completed_style, default_style, incomplete_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Create a line for one history entry: green when completed, red otherwise
fn create_history_line(outcome: &SessionOutcome) -> Line<'_> {
    let style = if outcome.status.is_completed() {
        completed_style()
    } else {
        incomplete_style()
    };

    Line::from(vec![
        Span::styled(format!("{} ", outcome.status.glyph()), style),
        Span::styled(outcome.subject.as_str(), style),
    ])
}

/// Render the history of past sessions
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let count = app.history.len();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Things we've focused on ({}) ", count),
            title_style(),
        ));

    if count == 0 {
        let placeholder = Paragraph::new(Line::styled("  Nothing yet", default_style())).block(block);
        f.render_widget(placeholder, area);
        return;
    }

    // Keep the most recent entries in view
    let visible = area.height.saturating_sub(2) as usize;
    let skip = count.saturating_sub(visible);
    let items: Vec<ListItem> = app
        .history
        .entries()
        .iter()
        .skip(skip)
        .map(|outcome| ListItem::new(create_history_line(outcome)))
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
