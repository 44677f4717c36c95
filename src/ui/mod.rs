//! Rendering. Everything here draws from [`ListView`] and the theme; no
//! list state is changed apart from fitting the viewport.
pub mod components;
pub mod contacts;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{AppState, ModalState};
use crate::list::ListView;

pub fn render(f: &mut Frame, app: &mut AppState) {
    let error_height = if app.list.error().is_some() { 4 } else { 0 };
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(error_height),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    // Borders and the table header take three rows.
    let visible_rows = root[2].height.saturating_sub(3) as usize;
    app.sync_viewport(visible_rows);

    let app = &*app;
    let view = ListView::from_controller(&app.list);

    components::render_header(f, root[0], app, &view);
    if let Some(message) = view.error {
        components::render_error_state(f, root[1], app, message);
    }
    contacts::render_contact_table(f, root[2], app, &view);
    if view.loading {
        components::render_loading_state(f, root[2], app);
    }
    components::render_load_more(f, root[3], app, &view);
    components::render_status_bar(f, root[4], app, &view);

    match &app.modal {
        Some(ModalState::Help { scroll }) => {
            components::render_help_modal(f, f.area(), app, *scroll);
        }
        Some(state @ ModalState::Info { .. }) => {
            components::render_info_modal(f, f.area(), app, state);
        }
        None => {}
    }
}
