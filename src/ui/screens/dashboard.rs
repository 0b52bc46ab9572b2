use chrono::{Datelike, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::analytics::{format_currency, format_percent};
use crate::models::{Budget, Mascot, Trend};
use crate::ui::app::App;
use crate::ui::{mascot, theme};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(budget) = app.budget.as_ref() else {
        render_welcome(f, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Length(3), // Progress gauge
            Constraint::Min(6),    // Mascot + trend
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_progress(f, chunks[1], app, budget);
    render_mascot_and_trend(f, chunks[2], app);
}

fn block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_welcome(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for row in mascot::art(Mascot::Bear) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(theme::mascot_color(Mascot::Bear)),
        )));
    }
    lines.extend([
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to BunnyBudget!",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Let's set up your monthly budget first to get started",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or 4 to set your budget →",
            Style::default().fg(theme::ACCENT),
        )),
    ]);

    let msg = Paragraph::new(lines).centered().block(block("Dashboard"));
    f.render_widget(msg, area);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let s = &app.summary;
    let now = Local::now();
    let month_count = app
        .expenses
        .iter()
        .filter(|e| {
            let d = e.local_date();
            d.month() == now.month() && d.year() == now.year()
        })
        .count();

    render_card(
        f,
        cards[0],
        "Spent",
        format_currency(s.total_spent),
        theme::PEACH,
        format!("{month_count} this month"),
    );
    render_card(
        f,
        cards[1],
        "Budget",
        format_currency(s.budget_limit),
        theme::BLUE,
        "monthly limit".into(),
    );

    let (label, color) = if s.remaining_budget >= Decimal::ZERO {
        ("Remaining", theme::GREEN)
    } else {
        ("Over Budget", theme::RED)
    };
    render_card(
        f,
        cards[2],
        label,
        format_currency(s.remaining_budget.abs()),
        color,
        String::new(),
    );
    render_card(
        f,
        cards[3],
        "Used",
        format_percent(s.percentage_used),
        tier_color(app),
        if s.is_over_budget {
            "over the limit".into()
        } else {
            String::new()
        },
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: String,
) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block(title));

    f.render_widget(text, area);
}

/// Red once over budget, yellow from 80%, pink otherwise.
fn tier_color(app: &App) -> Color {
    if app.summary.is_over_budget {
        theme::RED
    } else if app.summary.percentage_used >= Decimal::from(80) {
        theme::YELLOW
    } else {
        theme::ACCENT
    }
}

fn render_progress(f: &mut Frame, area: Rect, app: &App, budget: &Budget) {
    let ratio = (app.summary.percentage_used / Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(block(&format!(
            "Budget Progress · {}",
            budget.period_label()
        )))
        .gauge_style(Style::default().fg(tier_color(app)).bg(theme::SURFACE))
        .ratio(ratio)
        .label(format!(
            "{} of {}",
            format_percent(app.summary.percentage_used),
            format_currency(app.summary.budget_limit)
        ));

    f.render_widget(gauge, area);
}

fn render_mascot_and_trend(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mood_color = theme::mascot_color(app.mood.mascot);
    let mut lines = vec![Line::from("")];
    for row in mascot::art(app.mood.mascot) {
        lines.push(Line::from(Span::styled(row, Style::default().fg(mood_color))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("“{}”", app.mood.message),
        Style::default().fg(theme::TEXT).add_modifier(Modifier::ITALIC),
    )));

    let mascot_panel = Paragraph::new(lines)
        .centered()
        .wrap(Wrap { trim: true })
        .block(block(mascot::name(app.mood.mascot)));
    f.render_widget(mascot_panel, cols[0]);

    let (arrow, color) = match app.trend {
        Trend::Increasing => ("↗", theme::RED),
        Trend::Decreasing => ("↘", theme::GREEN),
        Trend::Stable => ("→", theme::BLUE),
    };
    let trend_panel = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            arrow,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(app.trend.message(), Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} expenses recorded", app.expenses.len()),
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(block("Spending Trend"));
    f.render_widget(trend_panel, cols[1]);
}
