use anyhow::Result;
use chrono::{Local, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::analytics::{
    calculate_budget_summary, format_currency, format_percent, get_budget_mood,
    get_spending_trend, sum_amounts,
};
use crate::forms::{BudgetDraft, ExpenseDraft};
use crate::models::Category;
use crate::storage::LocalStorage;
use crate::ui::util::{format_date, progress_bar, truncate};

pub(crate) fn as_cli(args: &[String], storage: &mut LocalStorage) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], storage),
        "list" | "ls" => cli_list(storage),
        "delete" | "rm" => cli_delete(&args[2..], storage),
        "budget" | "b" => cli_budget(&args[2..], storage),
        "summary" | "s" => cli_summary(storage),
        "clear" => cli_clear(&args[2..], storage),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("bunnybudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("BunnyBudget 🐰 local-only monthly budget tracker");
    println!();
    println!("Usage: bunnybudget [command]");
    println!();
    println!("Commands:");
    println!("  (none)                              Launch interactive TUI");
    println!("  add <amount> <category> <name...>   Record an expense");
    println!("    --note <text...>                  Optional note");
    println!("  list                                List expenses, newest first");
    println!("  delete <id>                         Delete an expense by id (or id prefix)");
    println!("  budget [amount]                     Show or set the monthly budget");
    println!("  summary                             Print this month's summary");
    println!("  clear --yes                         Delete all expenses and the budget");
    println!("  --help, -h                          Show this help");
    println!("  --version, -V                       Show version");
    println!();
    let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
    println!("Categories: {}", names.join(", "));
}

fn cli_add(args: &[String], storage: &mut LocalStorage) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: bunnybudget add <amount> <category> <name...> [--note <text>]");
    }

    let draft = ExpenseDraft::from_args(args);
    let expense = draft.validate(Utc::now()).map_err(|errors| {
        let lines: Vec<String> = errors
            .iter()
            .map(|e| format!("  {}: {e}", e.field.label()))
            .collect();
        anyhow::anyhow!("Could not add expense:\n{}", lines.join("\n"))
    })?;

    println!(
        "Expense added! 🐰 Added {} for {} {}",
        format_currency(expense.amount),
        expense.category.emoji(),
        expense.name
    );
    tracing::info!(id = %expense.id, "expense added from cli");
    storage.add_expense(expense);
    Ok(())
}

fn cli_list(storage: &mut LocalStorage) -> Result<()> {
    let expenses = storage.get_expenses();
    if expenses.is_empty() {
        println!("No expenses yet!");
        return Ok(());
    }

    let today = Local::now();
    println!(
        "{:<8} {:<12} {:<28} {:<15} {:>10}",
        "ID", "Date", "Name", "Category", "Amount"
    );
    println!("{}", "─".repeat(77));
    for e in &expenses {
        println!(
            "{:<8} {:<12} {:<28} {:<15} {:>10}",
            short_id(&e.id),
            format_date(e.local_date(), today),
            truncate(&e.name, 28),
            format!("{} {}", e.category.emoji(), e.category),
            format_currency(e.amount),
        );
    }
    Ok(())
}

fn cli_delete(args: &[String], storage: &mut LocalStorage) -> Result<()> {
    let Some(wanted) = args.first().map(|a| a.trim()).filter(|a| !a.is_empty()) else {
        anyhow::bail!("Usage: bunnybudget delete <id>");
    };

    let expenses = storage.get_expenses();
    let matches: Vec<_> = expenses
        .iter()
        .filter(|e| e.id.starts_with(wanted))
        .collect();

    match matches.as_slice() {
        [] => anyhow::bail!("Expense not found: {wanted}"),
        [expense] => {
            println!(
                "Expense deleted! 🗑️ Removed {} ({})",
                expense.name,
                format_currency(expense.amount)
            );
            let id = expense.id.clone();
            storage.delete_expense(&id);
            Ok(())
        }
        _ => anyhow::bail!("Id prefix '{wanted}' matches {} expenses", matches.len()),
    }
}

fn cli_budget(args: &[String], storage: &mut LocalStorage) -> Result<()> {
    let existing = storage.get_budget();

    let Some(amount) = args.first() else {
        match existing {
            Some(b) => println!(
                "Monthly budget: {} (set for {})",
                format_currency(b.monthly_limit),
                b.period_label()
            ),
            None => println!("No budget set. Use: bunnybudget budget <amount>"),
        }
        return Ok(());
    };

    let budget = BudgetDraft::new(amount.as_str())
        .validate(existing.as_ref(), Local::now())
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    storage.save_budget(&budget);
    println!(
        "Budget set! 🎯 Monthly budget: {}",
        format_currency(budget.monthly_limit)
    );
    Ok(())
}

fn cli_summary(storage: &mut LocalStorage) -> Result<()> {
    let expenses = storage.get_expenses();
    let budget = storage.get_budget();
    let summary = calculate_budget_summary(&expenses, budget.as_ref());
    let mood = get_budget_mood(&summary);
    let trend = get_spending_trend(&expenses);

    let period = budget
        .as_ref()
        .map_or_else(|| Local::now().format("%B %Y").to_string(), |b| b.period_label());

    println!("BunnyBudget 🐰 {period}");
    println!("{}", "─".repeat(40));
    println!("  Spent:      {}", format_currency(summary.total_spent));
    if budget.is_some() {
        println!("  Budget:     {}", format_currency(summary.budget_limit));
        if summary.is_over_budget {
            println!(
                "  Over by:    {}",
                format_currency(summary.remaining_budget.abs())
            );
        } else {
            println!("  Remaining:  {}", format_currency(summary.remaining_budget));
        }
        let pct = summary.percentage_used.to_f64().unwrap_or(0.0);
        println!(
            "  Used:       {} {}",
            progress_bar(pct, 20),
            format_percent(summary.percentage_used)
        );
        println!();
        println!("  {} says: {}", crate::ui::mascot::name(mood.mascot), mood.message);
    } else {
        println!("  No budget set. Use: bunnybudget budget <amount>");
    }
    println!("  Trend:      {}", trend.message());

    let by_category = spending_by_category(&expenses);
    if !by_category.is_empty() {
        println!();
        println!("Spending by Category (all time):");
        for (cat, amount) in &by_category {
            println!(
                "  {} {:<16} {:>10}",
                cat.emoji(),
                cat.label(),
                format_currency(*amount)
            );
        }
    }
    Ok(())
}

fn cli_clear(args: &[String], storage: &mut LocalStorage) -> Result<()> {
    if !args.iter().any(|a| a == "--yes" || a == "-y") {
        anyhow::bail!("This deletes every expense and the budget. Re-run with --yes to confirm");
    }
    storage.clear_all_data();
    tracing::warn!("all data cleared from cli");
    println!("All data cleared.");
    Ok(())
}

/// Totals per category, largest first. Categories with no spending are left out.
fn spending_by_category(expenses: &[crate::models::Expense]) -> Vec<(Category, Decimal)> {
    let mut totals: Vec<(Category, Decimal)> = Category::all()
        .iter()
        .map(|cat| {
            let total = sum_amounts(
                expenses
                    .iter()
                    .filter(|e| e.category == *cat)
                    .map(|e| e.amount),
            );
            (*cat, total)
        })
        .filter(|(_, total)| *total > Decimal::ZERO)
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
