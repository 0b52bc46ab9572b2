use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;

/// Key bindings listed in the help overlay, two per row.
const KEY_HELP: &[(&str, &str)] = &[
    ("j/k, Up/Down", "Move cursor"),
    ("1-4", "Switch tabs"),
    ("Tab/Shift-Tab", "Cycle tabs"),
    ("g/G", "Top/Bottom"),
    ("Ctrl-d/u", "Page Down/Up"),
    ("Ctrl-q", "Quit"),
    (":", "Command mode"),
    ("Enter, i", "Edit field"),
    ("h/l (Add)", "Change category"),
    ("s (Add)", "Save expense"),
    ("D (Expenses)", "Delete expense"),
    ("Esc", "Cancel/Back"),
];

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, chunks[1], app),
        Screen::Add => super::screens::add::render(f, chunks[1], app),
        Screen::Expenses => super::screens::expenses::render(f, chunks[1], app),
        Screen::Budget => super::screens::budget::render(f, chunks[1], app),
    }
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn tab_icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => "🏠",
        Screen::Add => "➕",
        Screen::Expenses => "🧾",
        Screen::Budget => "🎯",
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let label = format!("{}:{} {s}", i + 1, tab_icon(*s));
            let style = if *s == app.screen {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_DIM)
            };
            Line::from(Span::styled(label, style))
        })
        .collect();

    let selected = Screen::all()
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .highlight_style(Style::default().fg(theme::ACCENT))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn mode_color(mode: InputMode) -> Color {
    match mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command | InputMode::Editing => theme::GREEN,
        InputMode::Confirm => theme::RED,
    }
}

fn key_hints(app: &App) -> &'static str {
    match (app.screen, app.input_mode) {
        (Screen::Add, InputMode::Editing) => " Enter next | Esc done ",
        (Screen::Budget, InputMode::Editing) => " Enter save | Esc cancel ",
        (Screen::Dashboard, _) if app.budget.is_none() => " Enter set budget | ? help ",
        (Screen::Dashboard, _) => " :add | :budget | ? help ",
        (Screen::Add, _) => " j/k field | h/l category | s save | ? help ",
        (Screen::Expenses, _) => " D delete | g/G top/bottom | ? help ",
        (Screen::Budget, _) => " Enter edit | ? help ",
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_color(app.input_mode))
        .add_modifier(Modifier::BOLD);

    let period = app
        .budget
        .as_ref()
        .map_or_else(|| "no budget".to_string(), |b| b.period_label());
    let info = format!(" {period} | {} expenses", app.expenses.len());
    let right = key_hints(app);

    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = (area.width as usize).saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut cursor = None;
    let content = match app.input_mode {
        InputMode::Command => {
            cursor = Some(1 + app.command_input.chars().count() as u16);
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(app.command_input.as_str(), theme::command_bar_style()),
            ])
        }
        InputMode::Editing => {
            let label = match app.screen {
                Screen::Add => app.selected_field().label(),
                _ => "Monthly Budget Limit",
            };
            Line::from(vec![
                Span::styled("editing ", Style::default().fg(theme::GREEN)),
                Span::styled(label, theme::command_bar_style()),
            ])
        }
        InputMode::Confirm => Line::from(vec![
            Span::styled(
                app.confirm_message.as_str(),
                Style::default().fg(theme::YELLOW),
            ),
            Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
        ]),
        InputMode::Normal if app.status_message.is_empty() => Line::from(Span::styled(
            " Press : for commands, ? for help",
            theme::dim_style(),
        )),
        InputMode::Normal => Line::from(Span::styled(
            app.status_message.as_str(),
            theme::command_bar_style(),
        )),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            " BunnyBudget Help 🐰 ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Keys"),
    ];

    for pair in KEY_HELP.chunks(2) {
        let row: String = pair
            .iter()
            .map(|(key, what)| format!("  {key:<15} {what:<17}"))
            .collect();
        lines.push(Line::from(Span::styled(row, theme::normal_style())));
    }

    lines.push(Line::from(""));
    lines.push(section(" Commands"));

    // Single-letter aliases are left out.
    let mut cmds: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 2)
        .map(|(name, cmd)| (*name, cmd.description))
        .collect();
    cmds.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmds {
        lines.push(Line::from(Span::styled(
            format!("  :{name:<12} {desc}"),
            theme::normal_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let popup_area = Rect::new(
        area.x + area.width.saturating_sub(popup_width) / 2,
        area.y + area.height.saturating_sub(popup_height) / 2,
        popup_width,
        popup_height,
    );

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
