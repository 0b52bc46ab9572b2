use chrono::Local;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::analytics::format_currency;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_date, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.expenses.is_empty() {
        render_empty(f, area);
        return;
    }

    let today = Local::now();
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Name"),
        Cell::from("Category"),
        Cell::from("Date"),
        Cell::from("Amount"),
    ])
    .style(theme::header_style());

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(app.visible_rows)
        .map(|(i, e)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let name = match &e.description {
                Some(note) => format!("{} · {}", e.name, note),
                None => e.name.clone(),
            };
            Row::new(vec![
                Cell::from(e.category.emoji()),
                Cell::from(truncate(&name, 40)),
                Cell::from(Span::styled(
                    e.category.as_str(),
                    Style::default().fg(theme::category_color(e.category)),
                )),
                Cell::from(format_date(e.local_date(), today)),
                Cell::from(Line::from(format_currency(e.amount)).right_aligned()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Your Expenses ({}) ", app.expenses.len()),
                theme::title_style(),
            )),
    );
    f.render_widget(table, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No expenses yet!",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Add your first expense on the Add tab (2) or with :add <amount> <category> <name>",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Your Expenses ", theme::title_style())),
    );
    f.render_widget(msg, area);
}
