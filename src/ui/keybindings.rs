use crate::domain::Screen;
use crate::persistence::Settings;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Preset hint for the number keys actually bound (at most 1-9)
fn presets_hint(count: usize) -> Option<String> {
    match count.min(9) {
        0 => None,
        1 => Some("1 preset   ".to_string()),
        n => Some(format!("1-{} presets   ", n)),
    }
}

/// Hint line for the given screen
fn hints(screen: Screen, settings: &Settings) -> Line<'static> {
    match screen {
        Screen::Focus => Line::from(vec![
            Span::raw(" type a subject   "),
            Span::raw("Enter focus   "),
            Span::raw("Ctrl+L clear history   "),
            Span::raw("Esc quit"),
        ]),
        Screen::Timer => {
            let (small, large) = settings.adjust_steps;
            let mut spans = vec![Span::raw(" Space start/pause   ")];
            if let Some(presets) = presets_hint(settings.presets.len()) {
                spans.push(Span::raw(presets));
            }
            spans.push(Span::raw(format!("+/- {} min   ", small)));
            spans.push(Span::raw(format!("</> {} min   ", large)));
            spans.push(Span::raw("x give up   "));
            spans.push(Span::raw("q quit"));
            Line::from(spans)
        }
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, screen: Screen, settings: &Settings) {
    let paragraph = Paragraph::new(hints(screen, settings)).style(hint_style());
    f.render_widget(paragraph, area);
}
