use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::forms::Field;
use crate::models::Mascot;
use crate::ui::app::{App, InputMode};
use crate::ui::{mascot, theme};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(area);

    render_greeting(f, chunks[0]);
    render_form(f, chunks[1], app);
}

fn render_greeting(f: &mut Frame, area: Rect) {
    let color = theme::mascot_color(Mascot::Bunny);
    let mut lines = vec![Line::from("")];
    for row in mascot::art(Mascot::Bunny) {
        lines.push(Line::from(Span::styled(row, Style::default().fg(color))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Let's track this",
        theme::dim_style(),
    )));
    lines.push(Line::from(Span::styled(
        "spending together! 🐰",
        theme::dim_style(),
    )));

    let panel = Paragraph::new(lines).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(panel, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected_field();
    let editing = app.input_mode == InputMode::Editing;
    let mut lines = vec![Line::from("")];

    for &field in Field::expense_fields() {
        let is_selected = field == selected;
        let marker = if is_selected { "▸ " } else { "  " };
        let label_style = if is_selected {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::normal_style()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme::ACCENT)),
            Span::styled(field.label(), label_style),
        ]));

        let value_line = match field {
            Field::Category => {
                let cat = app.draft_category();
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled("◂ ", theme::dim_style()),
                    Span::styled(
                        format!("{} {}", cat.emoji(), cat.label()),
                        Style::default()
                            .fg(theme::category_color(cat))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" ▸", theme::dim_style()),
                ])
            }
            _ => {
                let value = app.draft.field(field);
                let prefix = if field == Field::Amount { "₹ " } else { "" };
                let cursor = if is_selected && editing { "▏" } else { "" };
                let shown = if value.is_empty() && !(is_selected && editing) {
                    Span::styled(placeholder(field), theme::dim_style())
                } else {
                    Span::styled(format!("{value}{cursor}"), theme::normal_style())
                };
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(prefix, theme::dim_style()),
                    shown,
                ])
            }
        };
        lines.push(value_line);

        if let Some(err) = app.field_error(field) {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(err.message, theme::error_style()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Enter edit · ←/→ category · s Save & Hug 🐰",
        theme::dim_style(),
    )));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Add New Expense ", theme::title_style())),
    );
    f.render_widget(form, area);
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Coffee, groceries, movie tickets...",
        Field::Amount => "0",
        Field::Description => "Any extra details...",
        Field::Category | Field::MonthlyLimit => "",
    }
}
