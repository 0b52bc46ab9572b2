use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::forms::Field;
use crate::storage::LocalStorage;
use crate::ui::app::{App, InputMode, PendingAction, Screen};
use crate::ui::commands;
use crate::ui::util::move_cursor;

pub(crate) fn as_tui(storage: &mut LocalStorage) -> Result<()> {
    let mut app = App::new();
    app.load(storage);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, storage);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    storage: &mut LocalStorage,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, storage)?,
                InputMode::Command => handle_command_input(key, app, storage)?,
                InputMode::Editing => handle_editing_input(key, app, storage),
                InputMode::Confirm => handle_confirm_input(key, app, storage),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, storage: &mut LocalStorage) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            move_by(app, (app.visible_rows / 2) as isize);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            move_by(app, -((app.visible_rows / 2) as isize));
        }
        KeyCode::Char('j') | KeyCode::Down => move_by(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_by(app, -1),
        KeyCode::Char('1') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, Screen::Add),
        KeyCode::Char('3') => switch_screen(app, Screen::Expenses),
        KeyCode::Char('4') => switch_screen(app, Screen::Budget),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Enter | KeyCode::Char('i') => handle_enter(app),
        KeyCode::Esc => app.status_message.clear(),
        KeyCode::Char('h') | KeyCode::Left if app.screen == Screen::Add => {
            app.cycle_draft_category(-1);
        }
        KeyCode::Char('l') | KeyCode::Right if app.screen == Screen::Add => {
            app.cycle_draft_category(1);
        }
        KeyCode::Char('s') if app.screen == Screen::Add => {
            app.submit_expense(storage);
        }
        KeyCode::Char('g') => move_by(app, isize::MIN),
        KeyCode::Char('G') => move_by(app, isize::MAX),
        KeyCode::Char('D') if app.screen == Screen::Expenses => {
            commands::handle_command("delete", app, storage)?;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App, storage: &mut LocalStorage) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, storage)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: KeyEvent, app: &mut App, storage: &mut LocalStorage) {
    match app.screen {
        Screen::Add => handle_form_input(key, app, storage),
        Screen::Budget => handle_budget_input(key, app, storage),
        _ => app.input_mode = InputMode::Normal,
    }
}

fn handle_form_input(key: KeyEvent, app: &mut App, storage: &mut LocalStorage) {
    let field = app.selected_field();
    let last = Field::expense_fields().len() - 1;
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter | KeyCode::Tab => {
            if app.draft_field >= last {
                app.input_mode = InputMode::Normal;
                app.submit_expense(storage);
            } else {
                app.draft_field += 1;
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.draft_field = app.draft_field.saturating_sub(1);
        }
        KeyCode::Down => {
            app.draft_field = (app.draft_field + 1).min(last);
        }
        KeyCode::Left if field == Field::Category => app.cycle_draft_category(-1),
        KeyCode::Right | KeyCode::Char(' ') if field == Field::Category => {
            app.cycle_draft_category(1);
        }
        KeyCode::Backspace if field != Field::Category => {
            if let Some(value) = app.draft.field_mut(field) {
                value.pop();
            }
        }
        KeyCode::Char(c) if field != Field::Category => {
            if let Some(value) = app.draft.field_mut(field) {
                value.push(c);
            }
        }
        _ => {}
    }
}

fn handle_budget_input(key: KeyEvent, app: &mut App, storage: &mut LocalStorage) {
    match key.code {
        KeyCode::Enter => {
            let input = app.budget_input.clone();
            if app.submit_budget(&input, storage) {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Esc => {
            app.cancel_budget_edit();
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.budget_input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.budget_input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: KeyEvent, app: &mut App, storage: &mut LocalStorage) {
    let accepted = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
    if accepted {
        if let Some(PendingAction::DeleteExpense { name, .. }) = &app.pending_action {
            tracing::info!(name = %name, "delete confirmed");
        }
    }
    app.resolve_confirm(accepted, storage);
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    if screen == Screen::Dashboard {
        app.refresh_summary();
    }
}

fn handle_enter(app: &mut App) {
    match app.screen {
        Screen::Dashboard if app.budget.is_none() => app.screen = Screen::Budget,
        Screen::Add => {
            if app.selected_field() == Field::Category {
                app.cycle_draft_category(1);
            } else {
                app.input_mode = InputMode::Editing;
            }
        }
        Screen::Budget => {
            app.budget_error = None;
            app.input_mode = InputMode::Editing;
        }
        _ => {}
    }
}

fn move_by(app: &mut App, delta: isize) {
    match app.screen {
        Screen::Expenses => move_cursor(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.expenses.len(),
            app.visible_rows,
            delta,
        ),
        Screen::Add => {
            let mut scroll = 0;
            let fields = Field::expense_fields().len();
            move_cursor(&mut app.draft_field, &mut scroll, fields, fields, delta);
        }
        _ => {}
    }
}
