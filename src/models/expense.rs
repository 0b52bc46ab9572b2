use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: Category,
    /// Creation time, stored as RFC 3339.
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    pub fn new(
        name: String,
        amount: Decimal,
        category: Category,
        description: Option<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            amount,
            category,
            date,
            description,
        }
    }

    pub fn local_date(&self) -> DateTime<Local> {
        self.date.with_timezone(&Local)
    }
}
