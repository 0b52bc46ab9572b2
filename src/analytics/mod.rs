//! Month-to-date aggregation over the expense list, plus the mood and trend
//! classifiers the dashboard is built from.

use chrono::{DateTime, Datelike, Local};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Budget, BudgetSummary, Expense, Mascot, Mood, Trend};

/// Entries per trend window.
const TREND_WINDOW: usize = 7;

/// Summarise spending for the current calendar month.
pub(crate) fn calculate_budget_summary(
    expenses: &[Expense],
    budget: Option<&Budget>,
) -> BudgetSummary {
    calculate_budget_summary_at(expenses, budget, Local::now())
}

/// Same as [`calculate_budget_summary`] with an explicit clock.
pub(crate) fn calculate_budget_summary_at(
    expenses: &[Expense],
    budget: Option<&Budget>,
    now: DateTime<Local>,
) -> BudgetSummary {
    let total_spent = sum_amounts(
        expenses
            .iter()
            .filter(|e| {
                let date = e.local_date();
                date.month() == now.month() && date.year() == now.year()
            })
            .map(|e| e.amount),
    );

    let budget_limit = budget.map_or(Decimal::ZERO, |b| b.monthly_limit);
    let remaining_budget = budget_limit
        .checked_sub(total_spent)
        .unwrap_or(if total_spent.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        });
    // A ratio too large to represent is far past the cap anyway.
    let percentage_used = if budget_limit > Decimal::ZERO {
        total_spent
            .checked_div(budget_limit)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };
    let is_over_budget = total_spent > budget_limit && budget_limit > Decimal::ZERO;

    BudgetSummary {
        total_spent,
        budget_limit,
        remaining_budget,
        percentage_used: percentage_used.min(Decimal::ONE_HUNDRED),
        is_over_budget,
    }
}

/// Pick the mascot for a summary. Checked from most to least urgent; the
/// first tier that matches wins.
pub(crate) fn get_budget_mood(summary: &BudgetSummary) -> Mood {
    let eighty = Decimal::from(80);
    let fifty = Decimal::from(50);

    if summary.is_over_budget {
        return Mood {
            mascot: Mascot::Cat,
            message: "Oops! Spending went a bit wild this month 🙈".into(),
        };
    }

    if summary.percentage_used >= eighty {
        return Mood {
            mascot: Mascot::Bear,
            message: "Almost at your limit! Let's be careful now 🐻".into(),
        };
    }

    if summary.percentage_used >= fifty {
        return Mood {
            mascot: Mascot::Bunny,
            message: "Great progress! You're staying on track 🌟".into(),
        };
    }

    let left = summary
        .remaining_budget
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Mood {
        mascot: Mascot::Fox,
        message: format!("Amazing! You have ₹{left} left to enjoy! 🎉"),
    }
}

/// Compare the newest seven entries against the seven before them.
///
/// Windows are taken in list order. Callers keep the list newest-first
/// (`Storage::add_expense` prepends), so dates are never consulted here.
pub(crate) fn get_spending_trend(expenses: &[Expense]) -> Trend {
    if expenses.len() < TREND_WINDOW {
        return Trend::Stable;
    }

    let window_total = |window: &[Expense]| sum_amounts(window.iter().map(|e| e.amount));

    let last_week = window_total(&expenses[..TREND_WINDOW]);
    let end = expenses.len().min(TREND_WINDOW * 2);
    let previous_week = window_total(&expenses[TREND_WINDOW..end]);

    let difference = last_week
        .checked_sub(previous_week)
        .unwrap_or(if previous_week.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        });
    let threshold = previous_week / Decimal::TEN;

    if difference > threshold {
        Trend::Increasing
    } else if difference < -threshold {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

/// Add up amounts, saturating at `Decimal::MAX`/`Decimal::MIN` instead of
/// overflowing.
pub(crate) fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).unwrap_or(if amount.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    })
}

/// Whole percent, halves rounded away from zero: `62.5` → `"63%"`.
pub(crate) fn format_percent(percentage: Decimal) -> String {
    let rounded = percentage.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", rounded.trunc())
}

/// Rupees, no decimals, Indian digit grouping: `1234567` → `"₹12,34,567"`.
pub(crate) fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_indian(&digits);

    if rounded < Decimal::ZERO {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Last three digits form one group, everything above is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_grouped: String = head
        .as_bytes()
        .rchunks(2)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");
    format!("{head_grouped},{tail}")
}

#[cfg(test)]
mod tests;
