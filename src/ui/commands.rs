use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::forms::ExpenseDraft;
use crate::storage::LocalStorage;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut LocalStorage) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BunnyBudget", cmd_quit, r);
    register_command!("quit", "Quit BunnyBudget", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 250 food Lunch --note with Dobu)",
        cmd_add,
        r
    );
    register_command!("a", "Add expense (e.g. :a 80 transport Auto)", cmd_add, r);
    register_command!(
        "budget",
        "Set monthly budget (e.g. :budget 5000)",
        cmd_budget,
        r
    );
    register_command!("b", "Set monthly budget (e.g. :b 5000)", cmd_budget, r);
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!("clear", "Delete all expenses and the budget", cmd_clear, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    storage: &mut LocalStorage,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, "running command");
        (cmd.run)(args, app, storage)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _storage: &mut LocalStorage) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _storage: &mut LocalStorage) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_summary();
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, _storage: &mut LocalStorage) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, storage: &mut LocalStorage) -> anyhow::Result<()> {
    if args.is_empty() {
        app.screen = Screen::Add;
        app.set_status("Fill in the form, or :add <amount> <category> <name>");
        return Ok(());
    }

    let words: Vec<&str> = args.split_whitespace().collect();
    app.submit_draft(ExpenseDraft::from_args(&words), storage);
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, storage: &mut LocalStorage) -> anyhow::Result<()> {
    if args.is_empty() {
        app.screen = Screen::Budget;
        app.input_mode = InputMode::Editing;
        return Ok(());
    }

    app.submit_budget(args, storage);
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _storage: &mut LocalStorage) -> anyhow::Result<()> {
    if app.screen != Screen::Expenses {
        app.set_status("Select an expense on the Expenses tab first");
        return Ok(());
    }

    if let Some(expense) = app.selected_expense() {
        let id = expense.id.clone();
        let name = expense.name.clone();
        app.request_confirm(
            PendingAction::DeleteExpense {
                id,
                name: name.clone(),
            },
            format!("Delete '{name}'?"),
        );
    } else {
        app.set_status("No expense selected");
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, _storage: &mut LocalStorage) -> anyhow::Result<()> {
    app.request_confirm(
        PendingAction::ClearAll,
        "Delete ALL expenses and your budget?",
    );
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _storage: &mut LocalStorage) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
