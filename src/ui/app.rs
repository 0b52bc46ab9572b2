use chrono::{Local, Utc};

use crate::analytics::{
    calculate_budget_summary, format_currency, get_budget_mood, get_spending_trend,
};
use crate::forms::{BudgetDraft, ExpenseDraft, Field, FieldError};
use crate::models::*;
use crate::storage::LocalStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Add,
    Expenses,
    Budget,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Add, Self::Expenses, Self::Budget]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Add => write!(f, "Add"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Budget => write!(f, "Budget"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteExpense { id: String, name: String },
    ClearAll,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Persisted state, mirrored in memory
    pub(crate) expenses: Vec<Expense>,
    pub(crate) budget: Option<Budget>,

    // Dashboard
    pub(crate) summary: BudgetSummary,
    pub(crate) mood: Mood,
    pub(crate) trend: Trend,

    // Expenses
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Add form
    pub(crate) draft: ExpenseDraft,
    pub(crate) draft_field: usize,
    pub(crate) draft_errors: Vec<FieldError>,

    // Budget form
    pub(crate) budget_input: String,
    pub(crate) budget_error: Option<FieldError>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        let summary = BudgetSummary::default();
        let mood = get_budget_mood(&summary);
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            expenses: Vec::new(),
            budget: None,

            summary,
            mood,
            trend: Trend::Stable,

            expense_index: 0,
            expense_scroll: 0,

            draft: ExpenseDraft {
                category: Category::Food.as_str().to_string(),
                ..ExpenseDraft::default()
            },
            draft_field: 0,
            draft_errors: Vec::new(),

            budget_input: String::new(),
            budget_error: None,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Read both records from storage. With no budget yet, start on the
    /// Budget tab.
    pub(crate) fn load(&mut self, storage: &LocalStorage) {
        self.expenses = storage.get_expenses();
        self.budget = storage.get_budget();
        if self.budget.is_none() {
            self.screen = Screen::Budget;
        }
        self.budget_input = self.budget_limit_text();
        self.refresh_summary();
    }

    /// Recompute everything derived from the expense list and budget.
    pub(crate) fn refresh_summary(&mut self) {
        self.summary = calculate_budget_summary(&self.expenses, self.budget.as_ref());
        self.mood = get_budget_mood(&self.summary);
        self.trend = get_spending_trend(&self.expenses);
        tracing::debug!(
            spent = %self.summary.total_spent,
            mascot = %self.mood.mascot,
            trend = %self.trend,
            "summary refreshed"
        );
        if self.expense_index >= self.expenses.len() {
            self.expense_index = self.expenses.len().saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    // ── Add form ──────────────────────────────────────────────

    pub(crate) fn selected_field(&self) -> Field {
        let fields = Field::expense_fields();
        fields[self.draft_field.min(fields.len() - 1)]
    }

    pub(crate) fn draft_category(&self) -> Category {
        Category::parse(&self.draft.category).unwrap_or(Category::Food)
    }

    pub(crate) fn cycle_draft_category(&mut self, delta: i32) {
        let next = self.draft_category().cycle(delta);
        self.draft.category = next.as_str().to_string();
    }

    pub(crate) fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.draft_errors.iter().find(|e| e.field == field)
    }

    /// Validate the draft and store it. Returns true when an expense was added.
    pub(crate) fn submit_expense(&mut self, storage: &mut LocalStorage) -> bool {
        self.submit_draft(self.draft.clone(), storage)
    }

    /// Validate any draft (form or `:add` arguments) and store it.
    pub(crate) fn submit_draft(&mut self, draft: ExpenseDraft, storage: &mut LocalStorage) -> bool {
        match draft.validate(Utc::now()) {
            Ok(expense) => {
                let msg = format!(
                    "Expense added! 🐰 Added ₹{} for {}",
                    expense.amount, expense.name
                );
                tracing::info!(id = %expense.id, category = %expense.category, "expense added");
                self.expenses = storage.add_expense(expense);
                self.reset_draft();
                self.refresh_summary();
                self.set_status(msg);
                true
            }
            Err(errors) => {
                if let Some(first) = errors.first() {
                    self.set_status(format!("{}: {first}", first.field.label()));
                }
                self.draft_errors = errors;
                false
            }
        }
    }

    pub(crate) fn reset_draft(&mut self) {
        let category = self.draft.category.clone();
        self.draft = ExpenseDraft {
            category,
            ..ExpenseDraft::default()
        };
        self.draft_field = 0;
        self.draft_errors.clear();
    }

    // ── Budget form ───────────────────────────────────────────

    fn budget_limit_text(&self) -> String {
        self.budget
            .as_ref()
            .map(|b| b.monthly_limit.normalize().to_string())
            .unwrap_or_default()
    }

    /// Validate `input` as the monthly limit and save it. On success the
    /// Budget tab hands over to the Dashboard.
    pub(crate) fn submit_budget(&mut self, input: &str, storage: &mut LocalStorage) -> bool {
        match BudgetDraft::new(input).validate(self.budget.as_ref(), Local::now()) {
            Ok(budget) => {
                storage.save_budget(&budget);
                tracing::info!(
                    limit = %budget.monthly_limit,
                    period = %budget.period_label(),
                    "budget saved"
                );
                self.set_status(format!(
                    "Budget set! 🎯 Monthly budget: {}",
                    format_currency(budget.monthly_limit)
                ));
                self.budget = Some(budget);
                self.budget_input = self.budget_limit_text();
                self.budget_error = None;
                if self.screen == Screen::Budget {
                    self.screen = Screen::Dashboard;
                }
                self.refresh_summary();
                true
            }
            Err(e) => {
                self.set_status(e.to_string());
                self.budget_error = Some(e);
                false
            }
        }
    }

    /// Put the budget input back to the stored value.
    pub(crate) fn cancel_budget_edit(&mut self) {
        self.budget_input = self.budget_limit_text();
        self.budget_error = None;
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.expense_index)
    }

    pub(crate) fn delete_expense(&mut self, id: &str, storage: &mut LocalStorage) {
        let removed = self.expenses.iter().find(|e| e.id == id).cloned();
        self.expenses = storage.delete_expense(id);
        self.refresh_summary();
        match removed {
            Some(e) => self.set_status(format!(
                "Expense deleted! 🗑️ Removed {} ({})",
                e.name,
                format_currency(e.amount)
            )),
            None => self.set_status("Expense not found"),
        }
    }

    pub(crate) fn clear_all(&mut self, storage: &mut LocalStorage) {
        storage.clear_all_data();
        tracing::warn!("all data cleared");
        self.expenses.clear();
        self.budget = None;
        self.budget_input.clear();
        self.expense_index = 0;
        self.expense_scroll = 0;
        self.screen = Screen::Budget;
        self.refresh_summary();
        self.set_status("All data cleared. Let's set a new budget 🐻");
    }

    // ── Confirmation ──────────────────────────────────────────

    pub(crate) fn request_confirm(&mut self, action: PendingAction, message: impl Into<String>) {
        self.pending_action = Some(action);
        self.confirm_message = message.into();
        self.input_mode = InputMode::Confirm;
    }

    /// Run or drop the pending action and go back to normal mode.
    pub(crate) fn resolve_confirm(&mut self, accepted: bool, storage: &mut LocalStorage) {
        let action = self.pending_action.take();
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        match (action, accepted) {
            (Some(PendingAction::DeleteExpense { id, .. }), true) => {
                self.delete_expense(&id, storage);
            }
            (Some(PendingAction::ClearAll), true) => self.clear_all(storage),
            _ => self.set_status("Cancelled"),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
