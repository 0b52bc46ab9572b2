use chrono::{DateTime, Datelike, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub monthly_limit: Decimal,
    /// Long month name, e.g. "October".
    pub month: String,
    pub year: i32,
}

impl Budget {
    /// Budget for the month containing `now`. Pass the previous budget's id
    /// to keep identity across updates.
    pub fn for_month(id: Option<String>, monthly_limit: Decimal, now: &DateTime<Local>) -> Self {
        Self {
            id: id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            monthly_limit,
            month: now.format("%B").to_string(),
            year: now.year(),
        }
    }

    pub fn period_label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}
