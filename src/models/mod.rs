mod budget;
mod category;
mod expense;
mod summary;

pub use budget::Budget;
pub use category::Category;
pub use expense::Expense;
pub use summary::{BudgetSummary, Mascot, Mood, Trend};
