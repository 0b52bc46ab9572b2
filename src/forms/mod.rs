//! Validation for user-entered expenses and budgets. Errors are plain values
//! so the caller can show them next to the offending field.

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Budget, Category, Expense};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Name,
    Amount,
    Category,
    Description,
    MonthlyLimit,
}

impl Field {
    /// Fields of the expense form, top to bottom.
    pub(crate) fn expense_fields() -> &'static [Field] {
        &[Self::Name, Self::Amount, Self::Category, Self::Description]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Name => "What did you buy?",
            Self::Amount => "How much?",
            Self::Category => "Category",
            Self::Description => "Notes (optional)",
            Self::MonthlyLimit => "Monthly Budget Limit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldError {
    pub(crate) field: Field,
    pub(crate) message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Raw text of the add-expense form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExpenseDraft {
    pub(crate) name: String,
    pub(crate) amount: String,
    pub(crate) category: String,
    pub(crate) description: String,
}

impl ExpenseDraft {
    /// Build a draft from `<amount> <category> <name...> [--note <text...>]`.
    /// Missing pieces stay empty and are reported by [`ExpenseDraft::validate`].
    pub(crate) fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let words: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        let note_at = words.iter().position(|w| *w == "--note");
        let (main, note) = match note_at {
            Some(i) => (&words[..i], &words[i + 1..]),
            None => (&words[..], &[][..]),
        };

        Self {
            amount: main.first().map(|s| s.to_string()).unwrap_or_default(),
            category: main.get(1).map(|s| s.to_string()).unwrap_or_default(),
            name: main.get(2..).map(|rest| rest.join(" ")).unwrap_or_default(),
            description: note.join(" "),
        }
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Amount => Some(&mut self.amount),
            Field::Category => Some(&mut self.category),
            Field::Description => Some(&mut self.description),
            Field::MonthlyLimit => None,
        }
    }

    pub(crate) fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Amount => &self.amount,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::MonthlyLimit => "",
        }
    }

    /// Check every field and build the expense, stamped with `now`.
    pub(crate) fn validate(&self, now: DateTime<Utc>) -> Result<Expense, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(Field::Name, "Please name your expense"));
        }

        let amount = if self.amount.trim().is_empty() {
            errors.push(FieldError::new(Field::Amount, "Amount is required"));
            None
        } else {
            match parse_amount(&self.amount) {
                Ok(amount) => Some(amount),
                Err(AmountError::Invalid) => {
                    errors.push(FieldError::new(Field::Amount, "Please enter a valid amount"));
                    None
                }
                Err(AmountError::TooLarge) => {
                    errors.push(FieldError::new(Field::Amount, "Amount is too large"));
                    None
                }
            }
        };

        let category = Category::parse(&self.category);
        if category.is_none() {
            errors.push(FieldError::new(Field::Category, "Please pick a category"));
        }

        match (amount, category) {
            (Some(amount), Some(category)) if errors.is_empty() => {
                let note = self.description.trim();
                let description = (!note.is_empty()).then(|| note.to_string());
                Ok(Expense::new(name.to_string(), amount, category, description, now))
            }
            _ => Err(errors),
        }
    }
}

/// Raw text of the budget form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BudgetDraft {
    pub(crate) monthly_limit: String,
}

impl BudgetDraft {
    pub(crate) fn new(monthly_limit: impl Into<String>) -> Self {
        Self {
            monthly_limit: monthly_limit.into(),
        }
    }

    /// Build the budget for the month containing `now`, keeping the id of
    /// `existing` when there is one.
    pub(crate) fn validate(
        &self,
        existing: Option<&Budget>,
        now: DateTime<Local>,
    ) -> Result<Budget, FieldError> {
        if self.monthly_limit.trim().is_empty() {
            return Err(FieldError::new(Field::MonthlyLimit, "Budget amount is required"));
        }
        let limit = parse_amount(&self.monthly_limit).map_err(|e| {
            let message = match e {
                AmountError::Invalid => "Please enter a valid budget amount",
                AmountError::TooLarge => "Budget amount is too large",
            };
            FieldError::new(Field::MonthlyLimit, message)
        })?;
        Ok(Budget::for_month(existing.map(|b| b.id.clone()), limit, &now))
    }
}

/// Largest amount or budget accepted from input: ₹1,00,00,00,00,000 (1e12).
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmountError {
    Invalid,
    TooLarge,
}

/// Accepts plain (`12.50`) and scientific (`1e3`) notation. Zero and
/// negatives are invalid; anything above [`MAX_AMOUNT`] is too large.
fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    let s = raw.trim();
    let value = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| AmountError::Invalid)?;
    if value <= Decimal::ZERO {
        Err(AmountError::Invalid)
    } else if value > MAX_AMOUNT {
        Err(AmountError::TooLarge)
    } else {
        Ok(value)
    }
}
