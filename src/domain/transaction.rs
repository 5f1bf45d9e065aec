use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::budget::lenient_f64;
use super::Frequency;

/// Payload for logging one expense through `transactions/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewTransaction {
    pub category: i64,
    pub subcategory: i64,
    pub amount_currency: f64,
    pub currency: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Payload for creating a recurring expense template through
/// `transactions/recurring-transactions/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewRecurringTransaction {
    pub category: i64,
    pub subcategory: i64,
    pub amount_currency: f64,
    pub currency: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub frequency: Frequency,
    pub day_of_month: u32,
}

/// A recurring expense template as listed by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecurringTransaction {
    pub id: i64,
    pub category: i64,
    pub subcategory: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount_currency: f64,
    pub currency: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub frequency: Frequency,
    pub day_of_month: u32,
    pub is_active: bool,
}
