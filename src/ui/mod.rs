pub mod focus_pane;
pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::Screen;
use focus_pane::render_focus_pane;
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::{create_focus_layout, create_timer_layout};
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws whichever screen is active
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    match app.screen {
        Screen::Focus => {
            let layout = create_focus_layout(size);
            render_keybindings(f, layout.keybindings_area, Screen::Focus, &app.settings);
            render_focus_pane(f, app, layout.prompt_area);
            render_history_pane(f, app, layout.history_area);
        }
        Screen::Timer => {
            let layout = create_timer_layout(size);
            render_keybindings(f, layout.keybindings_area, Screen::Timer, &app.settings);
            render_timer_pane(f, app, &layout);
        }
    }
}
