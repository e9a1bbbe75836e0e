use crate::app::{ActiveSession, AppState};
use crate::ui::layout::TimerLayout;
use crate::ui::styles::{
    border_style, clock_style, default_style, gauge_style, hint_style, paused_style, running_style,
    title_style,
};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Status badge next to the subject, with the pause count once there is one
fn status_badge(session: &ActiveSession) -> Span<'static> {
    let state = session.countdown.state();
    if state.is_running {
        Span::styled("[RUNNING]", running_style())
    } else if state.pause_count > 0 {
        Span::styled(format!("[PAUSED x{}]", state.pause_count), paused_style())
    } else {
        Span::styled("[PAUSED]", paused_style())
    }
}

/// Gauge ratio for a remaining percentage, clamped to 0.0 ..= 1.0
fn progress_ratio(progress_pct: f64) -> f64 {
    (progress_pct / 100.0).clamp(0.0, 1.0)
}

/// Hint listing the configured presets, e.g. "[1] 10m  [2] 15m  [3] 20m"
fn presets_line(presets: &[u32]) -> Line<'static> {
    let spans: Vec<Span> = presets
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, minutes)| Span::styled(format!("[{}] {}m  ", i + 1, minutes), hint_style()))
        .collect();
    Line::from(spans)
}

/// Render the countdown screen for the active session
pub fn render_timer_pane(f: &mut Frame, app: &AppState, layout: &TimerLayout) {
    let Some(session) = app.active.as_ref() else {
        return;
    };

    let clock = Paragraph::new(Line::from(Span::styled(session.countdown.display(), clock_style())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(clock_style()));
    f.render_widget(clock, layout.clock_area);

    let subject = Paragraph::new(vec![
        Line::styled("Focusing on:", default_style()),
        Line::from(vec![
            Span::styled(session.subject.as_str(), title_style()),
            Span::raw("  "),
            status_badge(session),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(subject, layout.subject_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_style(border_style()))
        .gauge_style(gauge_style())
        .ratio(progress_ratio(session.progress))
        .label(format!("{:.0}%", session.progress));
    f.render_widget(gauge, layout.progress_area);

    let controls = Paragraph::new(vec![Line::raw(""), presets_line(&app.settings.presets)])
        .alignment(Alignment::Center);
    f.render_widget(controls, layout.controls_area);
}
