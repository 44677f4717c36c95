use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::keymap::KeyAction;
use crate::app::worker::FetchWorker;
use crate::app::{AppState, ModalState};
use crate::ui;

/// What the event loop has to do after a key was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A fetch was started on the controller; hand it to the worker.
    Fetch,
    Quit,
}

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    worker: &FetchWorker,
) -> Result<()> {
    info!("event loop started");
    if app.list.start_initial_fetch() {
        dispatch_fetch(app, worker);
    }

    loop {
        if app.list.is_loading() {
            if let Some(result) = worker.try_result() {
                app.list.complete_fetch(result);
            }
        }

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key(app, key) {
                    Effect::Quit => break,
                    Effect::Fetch => dispatch_fetch(app, worker),
                    Effect::None => {}
                }
            }
        }
    }
    info!(
        loaded = app.list.contacts().len(),
        selected = app.list.selected_count(),
        uptime_ms = app.started_at.elapsed().as_millis() as u64,
        "event loop finished"
    );
    Ok(())
}

fn dispatch_fetch(app: &mut AppState, worker: &FetchWorker) {
    if let Err(err) = worker.request() {
        app.list.complete_fetch(Err(err));
    }
}

/// Route a key press to the open overlay or, if none, through the keymap.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Effect {
    if app.modal.is_some() {
        handle_modal_key(app, key.code);
        return Effect::None;
    }
    match app.keymap.resolve(&key) {
        Some(action) => apply_action(app, action),
        None => Effect::None,
    }
}

pub fn apply_action(app: &mut AppState, action: KeyAction) -> Effect {
    let rows = app.list.contacts().len();
    let page = app.rows_per_page.max(1);
    match action {
        KeyAction::Quit => return Effect::Quit,
        KeyAction::MoveUp => app.cursor = app.cursor.saturating_sub(1),
        KeyAction::MoveDown => app.cursor = (app.cursor + 1).min(rows.saturating_sub(1)),
        KeyAction::PageUp => app.cursor = app.cursor.saturating_sub(page),
        KeyAction::PageDown => app.cursor = (app.cursor + page).min(rows.saturating_sub(1)),
        KeyAction::Home => app.cursor = 0,
        KeyAction::End => app.cursor = rows.saturating_sub(1),
        KeyAction::ToggleSelect => {
            let id = app
                .list
                .derived_order()
                .get(app.cursor)
                .map(|c| c.id.clone());
            if let Some(id) = id {
                app.list.toggle_selection(&id, app.list_offset);
            }
        }
        KeyAction::LoadMore => {
            if app.list.can_load_more() && app.list.begin_fetch() {
                return Effect::Fetch;
            }
            debug!("load more unavailable");
        }
        KeyAction::Retry => {
            if app.list.error().is_some() && app.list.begin_fetch() {
                return Effect::Fetch;
            }
        }
        KeyAction::OpenEmail => {
            let order = app.list.derived_order();
            if let Some(contact) = order.get(app.cursor) {
                app.modal = Some(ModalState::Info {
                    title: contact.name.clone(),
                    message: format!("{}\n\n{}", contact.email, contact.mailto()),
                });
            }
        }
        KeyAction::OpenHelp => app.modal = Some(ModalState::Help { scroll: 0 }),
        KeyAction::Ignore => {}
    }
    Effect::None
}

fn handle_modal_key(app: &mut AppState, code: KeyCode) {
    if let Some(ModalState::Help { scroll }) = &mut app.modal {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                *scroll = scroll.saturating_sub(1);
                return;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                *scroll = scroll.saturating_add(1);
                return;
            }
            _ => {}
        }
    }
    if matches!(
        code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char(' ')
    ) {
        app.modal = None;
    }
}
