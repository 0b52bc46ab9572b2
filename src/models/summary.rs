use rust_decimal::Decimal;

/// Derived view of the current month. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total_spent: Decimal,
    pub budget_limit: Decimal,
    /// `budget_limit - total_spent`; negative once over budget.
    pub remaining_budget: Decimal,
    /// Clamped to 100 for display.
    pub percentage_used: Decimal,
    pub is_over_budget: bool,
}

impl Default for BudgetSummary {
    fn default() -> Self {
        Self {
            total_spent: Decimal::ZERO,
            budget_limit: Decimal::ZERO,
            remaining_budget: Decimal::ZERO,
            percentage_used: Decimal::ZERO,
            is_over_budget: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mascot {
    Bunny,
    Bear,
    Fox,
    Cat,
}

impl Mascot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bunny => "bunny",
            Self::Bear => "bear",
            Self::Fox => "fox",
            Self::Cat => "cat",
        }
    }
}

impl std::fmt::Display for Mascot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mood {
    pub mascot: Mascot,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Increasing => "Spending is trending up",
            Self::Decreasing => "Great! Spending is going down",
            Self::Stable => "Spending is steady",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
