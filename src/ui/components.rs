//! Shared UI components: header, loading and error states, load-more
//! button, status bar, and overlays.
//!
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, ModalState};
use crate::list::ListView;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Title bar with the selection counter.
pub fn render_header(f: &mut Frame, area: Rect, app: &AppState, view: &ListView) {
    let line = Line::from(vec![
        Span::raw("Selected contacts: "),
        Span::styled(
            view.selection_counter_text(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let p = Paragraph::new(line)
        .block(
            Block::default()
                .title("contact-directory")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(
            Style::default()
                .fg(app.theme.header_fg)
                .bg(app.theme.header_bg),
        );
    f.render_widget(p, area);
}

/// Small overlay in the middle of `area` while a page is in flight.
pub fn render_loading_state(f: &mut Frame, area: Rect, app: &AppState) {
    let tick = (app.started_at.elapsed().as_millis() / 120) as usize;
    let frame = SPINNER[tick % SPINNER.len()];
    let rect = centered_rect(20, 3, area);
    let p = Paragraph::new(format!("{frame} Loading..."))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(Style::default().fg(app.theme.highlight_fg));
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// Inline notice with the failure message and how to retry.
pub fn render_error_state(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let retry = key_hint(app, KeyAction::Retry);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(app.theme.error_fg),
        )),
        Line::from(vec![
            Span::styled("[ Try again ]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  press {retry}")),
        ]),
    ];
    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Error")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.error_fg)),
    );
    f.render_widget(p, area);
}

/// The load-more button line; blank once everything is loaded.
pub fn render_load_more(f: &mut Frame, area: Rect, app: &AppState, view: &ListView) {
    let Some(button) = view.load_more else {
        f.render_widget(Clear, area);
        return;
    };
    let hint = key_hint(app, KeyAction::LoadMore);
    let style = if button.enabled {
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.theme.muted)
            .add_modifier(Modifier::DIM)
    };
    let p = Paragraph::new(Line::from(vec![
        Span::styled("[ Load more ]", style),
        Span::raw(format!("  {hint}")),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(p, area);
}

/// Bottom status bar with counts, the row under the cursor, and the main key hints.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState, view: &ListView) {
    let mode = if app.modal.is_some() { "OVERLAY" } else { "NORMAL" };
    let state = if view.loading {
        "loading"
    } else if view.error.is_some() {
        "error"
    } else {
        "idle"
    };
    let focus = view
        .rows
        .get(app.cursor)
        .map(|row| format!("{}  ", row.label()))
        .unwrap_or_default();
    let msg = format!(
        "mode: {mode}  {state}  loaded:{}/{}  selected:{}  {focus}{}: select  {}: email  {}: help  {}: quit",
        view.rows.len(),
        app.list.total(),
        view.selected_count,
        key_hint(app, KeyAction::ToggleSelect),
        key_hint(app, KeyAction::OpenEmail),
        key_hint(app, KeyAction::OpenHelp),
        key_hint(app, KeyAction::Quit),
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}

fn key_hint(app: &AppState, action: KeyAction) -> String {
    app.keymap
        .keys_for(action)
        .first()
        .cloned()
        .unwrap_or_else(|| "-".to_string())
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render a generic informational modal dialog.
pub fn render_info_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    if let ModalState::Info { title, message } = state {
        let max_w = area.width.saturating_sub(6).max(30);
        let longest = message.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let width = (longest + 4).clamp(30, max_w);
        let height = (message.lines().count() as u16 + 2).max(5);
        let rect = centered_rect(width, height, area);
        let p = Paragraph::new(message.clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(title.as_str())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        f.render_widget(Clear, rect);
        f.render_widget(p, rect);
    }
}

/// Render the help modal listing every action and its keys.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState, scroll: u16) {
    let width = 60u16.min(area.width.saturating_sub(4)).max(40);
    let height = 20u16.min(area.height.saturating_sub(4)).max(10);
    let rect = centered_rect(width, height, area);

    let entries = [
        ("Move", KeyAction::MoveDown, KeyAction::MoveUp),
        ("Page", KeyAction::PageDown, KeyAction::PageUp),
        ("Jump", KeyAction::Home, KeyAction::End),
    ];
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Help",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for (label, a, b) in entries {
        lines.push(Line::from(vec![
            Span::raw(format!("{label}: ")),
            Span::styled(
                format!("{} / {}", key_hint(app, a), key_hint(app, b)),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
    let singles = [
        ("Select / deselect contact", KeyAction::ToggleSelect),
        ("Load more contacts", KeyAction::LoadMore),
        ("Retry after an error", KeyAction::Retry),
        ("Show email link", KeyAction::OpenEmail),
        ("Open this help", KeyAction::OpenHelp),
        ("Quit", KeyAction::Quit),
    ];
    for (label, action) in singles {
        lines.push(Line::from(vec![
            Span::raw(format!("{label}: ")),
            Span::styled(
                app.keymap.keys_for(action).join(", "),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw(
        "Selected contacts move to the top, most recent first.",
    ));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("Close help: "),
        Span::styled(
            "Esc / Enter",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ]));

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
