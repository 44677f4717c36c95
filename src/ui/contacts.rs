use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::AppState;
use crate::list::view::ContactRow;
use crate::list::ListView;

/// Draw the visible slice of the list, one row per contact.
pub fn render_contact_table(f: &mut Frame, area: Rect, app: &AppState, view: &ListView) {
    let start = app.list_offset.min(view.rows.len());
    let end = (start + app.rows_per_page).min(view.rows.len());
    let slice = &view.rows[start..end];

    let rows = slice.iter().enumerate().map(|(i, row)| {
        let absolute_index = start + i;
        contact_item(row, absolute_index == app.cursor, app)
    });

    let widths = [
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(40),
    ];

    let header = Row::new(vec!["", "", "NAME", "JOB TITLE", "EMAIL"])
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD));

    let title = format!("Contacts ({}/{})", view.rows.len(), app.list.total());
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

/// One contact row: selection mark, avatar initials, name, job title, email.
pub fn contact_item<'a>(row: &ContactRow<'a>, under_cursor: bool, app: &AppState) -> Row<'a> {
    let contact = row.contact;
    let mark = if row.selected { "[x]" } else { "[ ]" };
    let mut style = Style::default().fg(app.theme.text);
    if row.selected {
        style = style.fg(app.theme.selected_fg).add_modifier(Modifier::BOLD);
    }
    if under_cursor {
        style = style
            .bg(app.theme.highlight_bg)
            .add_modifier(Modifier::REVERSED);
    }
    Row::new(vec![
        Cell::from(mark),
        Cell::from(contact.initials()),
        Cell::from(contact.name.as_str()),
        Cell::from(contact.job_title.as_str()).style(Style::default().fg(app.theme.muted)),
        Cell::from(contact.email.as_str()),
    ])
    .style(style)
}
