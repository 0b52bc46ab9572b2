use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::analytics::format_currency;
use crate::models::Mascot;
use crate::ui::app::{App, InputMode};
use crate::ui::{mascot, theme};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let color = theme::mascot_color(Mascot::Bear);

    let mut lines = vec![Line::from("")];
    for row in mascot::art(Mascot::Bear) {
        lines.push(Line::from(Span::styled(row, Style::default().fg(color))));
    }
    lines.push(Line::from(""));

    match (&app.budget, editing) {
        (Some(budget), false) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "Your monthly budget is set to {}! 🍯",
                    format_currency(budget.monthly_limit)
                ),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("Set for {}", budget.period_label()),
                theme::dim_style(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press Enter to update budget",
                Style::default().fg(theme::ACCENT),
            )));
        }
        (existing, _) => {
            let prompt = if existing.is_some() {
                "Let's adjust your monthly spending goal! 🐻"
            } else {
                "Let's set your monthly spending goal together! 🐻✨"
            };
            lines.push(Line::from(Span::styled(prompt, theme::dim_style())));
            lines.push(Line::from(""));

            let cursor = if editing { "▏" } else { "" };
            let input = if app.budget_input.is_empty() && !editing {
                Span::styled("5000", theme::dim_style())
            } else {
                Span::styled(
                    format!("{}{cursor}", app.budget_input),
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
            };
            lines.push(Line::from(vec![
                Span::styled("Monthly Budget Limit  ₹ ", theme::normal_style()),
                input,
            ]));
            if let Some(err) = &app.budget_error {
                lines.push(Line::from(Span::styled(err.message, theme::error_style())));
            }
            lines.push(Line::from(""));
            let hint = match (editing, existing.is_some()) {
                (true, true) => "Enter Update Goal 🐻 · Esc cancel",
                (true, false) => "Enter Set Goal 🐻",
                (false, _) => "Press Enter to start typing",
            };
            lines.push(Line::from(Span::styled(
                hint,
                Style::default().fg(theme::ACCENT),
            )));
        }
    }

    let title = if app.budget.is_some() {
        " Update Budget "
    } else {
        " Set Your Budget "
    };
    let panel = Paragraph::new(lines).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(title, theme::title_style())),
    );
    f.render_widget(panel, area);
}
