#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Local, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;

fn now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn expense_on(amount: Decimal, y: i32, m: u32, d: u32) -> Expense {
    let date = Local
        .with_ymd_and_hms(y, m, d, 12, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    Expense::new("Test".into(), amount, Category::Food, None, date)
}

fn this_month(amount: Decimal) -> Expense {
    expense_on(amount, 2024, 6, 10)
}

fn budget(limit: Decimal) -> Budget {
    Budget::for_month(Some("b".into()), limit, &now())
}

fn amounts(values: &[i64]) -> Vec<Expense> {
    values.iter().map(|v| this_month(Decimal::from(*v))).collect()
}

// ── calculate_budget_summary ──────────────────────────────────

#[test]
fn test_summary_over_budget_example() {
    let expenses = vec![this_month(dec!(700)), this_month(dec!(500))];
    let s = calculate_budget_summary_at(&expenses, Some(&budget(dec!(1000))), now());
    assert_eq!(s.total_spent, dec!(1200));
    assert_eq!(s.budget_limit, dec!(1000));
    assert_eq!(s.remaining_budget, dec!(-200));
    assert_eq!(s.percentage_used, dec!(100));
    assert!(s.is_over_budget);
    assert_eq!(get_budget_mood(&s).mascot, Mascot::Cat);
}

#[test]
fn test_summary_without_budget() {
    let s = calculate_budget_summary_at(&[], None, now());
    assert_eq!(s.budget_limit, Decimal::ZERO);
    assert_eq!(s.remaining_budget, Decimal::ZERO);
    assert_eq!(s.percentage_used, Decimal::ZERO);
    assert!(!s.is_over_budget);
}

#[test]
fn test_summary_without_budget_never_over_budget() {
    let expenses = vec![this_month(dec!(9999))];
    let s = calculate_budget_summary_at(&expenses, None, now());
    assert_eq!(s.total_spent, dec!(9999));
    assert_eq!(s.remaining_budget, dec!(-9999));
    assert_eq!(s.percentage_used, Decimal::ZERO);
    assert!(!s.is_over_budget);
}

#[test]
fn test_summary_ignores_other_months_and_years() {
    let expenses = vec![
        this_month(dec!(100)),
        expense_on(dec!(50), 2024, 5, 31),
        expense_on(dec!(70), 2024, 7, 1),
        expense_on(dec!(900), 2023, 6, 10),
    ];
    let s = calculate_budget_summary_at(&expenses, Some(&budget(dec!(1000))), now());
    assert_eq!(s.total_spent, dec!(100));
    assert_eq!(s.remaining_budget, dec!(900));
    assert_eq!(s.percentage_used, dec!(10));
}

#[test]
fn test_summary_exactly_at_limit_is_not_over() {
    let expenses = vec![this_month(dec!(1000))];
    let s = calculate_budget_summary_at(&expenses, Some(&budget(dec!(1000))), now());
    assert_eq!(s.percentage_used, dec!(100));
    assert!(!s.is_over_budget);
    assert_eq!(s.remaining_budget, Decimal::ZERO);
}

#[test]
fn test_summary_remaining_is_exact() {
    let expenses = vec![this_month(dec!(0.5)), this_month(dec!(19.25))];
    let s = calculate_budget_summary_at(&expenses, Some(&budget(dec!(100))), now());
    assert_eq!(s.remaining_budget, s.budget_limit - s.total_spent);
    assert_eq!(s.remaining_budget, dec!(80.25));
}

#[test]
fn test_summary_percentage_always_within_bounds() {
    for (spent, limit) in [(1, 1_000_000), (5, 10), (10, 10), (1_000_000, 1), (0, 50)] {
        let expenses = amounts(&[spent]);
        let s = calculate_budget_summary_at(
            &expenses,
            Some(&budget(Decimal::from(limit))),
            now(),
        );
        assert!(s.percentage_used >= Decimal::ZERO);
        assert!(s.percentage_used <= dec!(100));
        assert_eq!(
            s.is_over_budget,
            s.total_spent > s.budget_limit && s.budget_limit > Decimal::ZERO
        );
    }
}

#[test]
fn test_summary_uses_wall_clock() {
    let expense = Expense::new("Now".into(), dec!(42), Category::Other, None, Utc::now());
    let s = calculate_budget_summary(&[expense], None);
    assert_eq!(s.total_spent, dec!(42));
}

#[test]
fn test_summary_saturates_instead_of_overflowing() {
    let huge = dec!(50000000000000000000000000000);
    let expenses = vec![this_month(huge), this_month(huge)];
    let s = calculate_budget_summary_at(&expenses, None, now());
    assert_eq!(s.total_spent, Decimal::MAX);
    assert_eq!(s.percentage_used, Decimal::ZERO);

    let s = calculate_budget_summary_at(&expenses, Some(&budget(dec!(1000))), now());
    assert_eq!(s.percentage_used, dec!(100));
    assert!(s.is_over_budget);
    assert!(s.remaining_budget < Decimal::ZERO);
}

#[test]
fn test_summary_tiny_budget_caps_percentage() {
    let tiny = dec!(0.0000000000000000000000000001);
    let s = calculate_budget_summary_at(&[this_month(dec!(1))], Some(&budget(tiny)), now());
    assert_eq!(s.percentage_used, dec!(100));
    assert!(s.is_over_budget);
    assert_eq!(get_budget_mood(&s).mascot, Mascot::Cat);
}

// ── get_budget_mood ───────────────────────────────────────────

fn summary(percentage: Decimal, over: bool, remaining: Decimal) -> BudgetSummary {
    BudgetSummary {
        total_spent: Decimal::ZERO,
        budget_limit: dec!(1000),
        remaining_budget: remaining,
        percentage_used: percentage,
        is_over_budget: over,
    }
}

#[test]
fn test_mood_tiers() {
    assert_eq!(get_budget_mood(&summary(dec!(100), true, dec!(-5))).mascot, Mascot::Cat);
    assert_eq!(get_budget_mood(&summary(dec!(80), false, dec!(200))).mascot, Mascot::Bear);
    assert_eq!(get_budget_mood(&summary(dec!(99.9), false, dec!(1))).mascot, Mascot::Bear);
    assert_eq!(get_budget_mood(&summary(dec!(50), false, dec!(500))).mascot, Mascot::Bunny);
    assert_eq!(get_budget_mood(&summary(dec!(79.99), false, dec!(200))).mascot, Mascot::Bunny);
    assert_eq!(get_budget_mood(&summary(dec!(49.99), false, dec!(500))).mascot, Mascot::Fox);
}

#[test]
fn test_mood_over_budget_wins_over_percentage() {
    // Over-budget is checked first even if the percentage would say otherwise.
    let mood = get_budget_mood(&summary(dec!(10), true, dec!(-1)));
    assert_eq!(mood.mascot, Mascot::Cat);
    assert_eq!(mood.message, "Oops! Spending went a bit wild this month 🙈");
}

#[test]
fn test_mood_fox_message_mentions_remaining() {
    let mood = get_budget_mood(&summary(dec!(12), false, dec!(879.5)));
    assert_eq!(mood.message, "Amazing! You have ₹880 left to enjoy! 🎉");
}

// ── get_spending_trend ────────────────────────────────────────

#[test]
fn test_trend_needs_seven_entries() {
    assert_eq!(get_spending_trend(&[]), Trend::Stable);
    assert_eq!(get_spending_trend(&amounts(&[1000, 1, 1, 1, 1, 1])), Trend::Stable);
}

#[test]
fn test_trend_increasing() {
    // newest seven: 7 * 200 = 1400, previous seven: 7 * 100 = 700
    let mut values = vec![200; 7];
    values.extend([100; 7]);
    assert_eq!(get_spending_trend(&amounts(&values)), Trend::Increasing);
}

#[test]
fn test_trend_decreasing() {
    let mut values = vec![50; 7];
    values.extend([100; 7]);
    assert_eq!(get_spending_trend(&amounts(&values)), Trend::Decreasing);
}

#[test]
fn test_trend_within_ten_percent_is_stable() {
    // 770 vs 700 is exactly +10%, which is not strictly greater.
    let mut values = vec![110; 7];
    values.extend([100; 7]);
    assert_eq!(get_spending_trend(&amounts(&values)), Trend::Stable);

    let mut values = vec![95; 7];
    values.extend([100; 7]);
    assert_eq!(get_spending_trend(&amounts(&values)), Trend::Stable);
}

#[test]
fn test_trend_only_looks_at_fourteen_entries() {
    let mut values = vec![100; 14];
    values.extend([10_000; 5]);
    assert_eq!(get_spending_trend(&amounts(&values)), Trend::Stable);
}

#[test]
fn test_trend_exactly_seven_has_empty_previous_window() {
    assert_eq!(get_spending_trend(&amounts(&[1; 7])), Trend::Increasing);
}

#[test]
fn test_trend_partial_previous_window() {
    // 7 * 10 = 70 against a partial window of 2 * 100 = 200
    let mut values = vec![10; 7];
    values.extend([100, 100]);
    assert_eq!(get_spending_trend(&amounts(&values)), Trend::Decreasing);
}

#[test]
fn test_trend_follows_list_order_not_dates() {
    // Oldest entries first: the "newest" window is whatever comes first.
    let mut expenses: Vec<Expense> = (1..=7).map(|d| expense_on(dec!(500), 2024, 6, d)).collect();
    expenses.extend((8..=14).map(|d| expense_on(dec!(10), 2024, 6, d)));
    assert_eq!(get_spending_trend(&expenses), Trend::Increasing);
}

#[test]
fn test_trend_with_huge_amounts_does_not_overflow() {
    let huge = dec!(50000000000000000000000000000);
    let mut expenses: Vec<Expense> = (0..7).map(|_| this_month(huge)).collect();
    expenses.extend(amounts(&[1; 7]));
    assert_eq!(get_spending_trend(&expenses), Trend::Increasing);
}

// ── sum_amounts ───────────────────────────────────────────────

#[test]
fn test_sum_amounts_saturates_both_ways() {
    assert_eq!(sum_amounts([dec!(1.5), dec!(2.25)]), dec!(3.75));
    assert_eq!(sum_amounts([Decimal::MAX, dec!(1)]), Decimal::MAX);
    assert_eq!(sum_amounts([Decimal::MIN, dec!(-1)]), Decimal::MIN);
    assert_eq!(sum_amounts(Vec::new()), Decimal::ZERO);
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent_rounds_half_away_from_zero() {
    assert_eq!(format_percent(dec!(62.5)), "63%");
    assert_eq!(format_percent(dec!(99.5)), "100%");
    assert_eq!(format_percent(dec!(12.4)), "12%");
    assert_eq!(format_percent(Decimal::ZERO), "0%");
    assert_eq!(format_percent(dec!(100)), "100%");
}

// ── format_currency ───────────────────────────────────────────

#[test]
fn test_format_currency_small() {
    assert_eq!(format_currency(Decimal::ZERO), "₹0");
    assert_eq!(format_currency(dec!(999)), "₹999");
}

#[test]
fn test_format_currency_indian_grouping() {
    assert_eq!(format_currency(dec!(1000)), "₹1,000");
    assert_eq!(format_currency(dec!(12345)), "₹12,345");
    assert_eq!(format_currency(dec!(123456)), "₹1,23,456");
    assert_eq!(format_currency(dec!(1234567)), "₹12,34,567");
    assert_eq!(format_currency(dec!(123456789)), "₹12,34,56,789");
}

#[test]
fn test_format_currency_rounds_to_whole_rupees() {
    assert_eq!(format_currency(dec!(99.4)), "₹99");
    assert_eq!(format_currency(dec!(99.5)), "₹100");
    assert_eq!(format_currency(dec!(1999.99)), "₹2,000");
}

#[test]
fn test_format_currency_negative() {
    assert_eq!(format_currency(dec!(-200)), "-₹200");
    assert_eq!(format_currency(dec!(-150000)), "-₹1,50,000");
    assert_eq!(format_currency(dec!(-0.4)), "₹0");
}
