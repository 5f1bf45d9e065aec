//! Expands a multi-month budget request into per-month records.

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::{BudgetRecord, BudgetRequest};
use crate::errors::ValidationError;

/// Splits `request` into one record per calendar month.
///
/// The start date is normalized to the 1st of its month and the end date to
/// the last day of its month; every month in between (inclusive, ascending)
/// yields a record whose name is suffixed with the long month name and year.
/// Each record carries the full requested amount, not a per-month share; the
/// backend stores every month as its own budget row.
pub fn expand_budget(request: &BudgetRequest) -> Result<Vec<BudgetRecord>, ValidationError> {
    let (start, end, frequency) = request.validate()?;
    let base_name = request.name.trim();

    let mut cursor = month_start(start);
    let last = month_start(end);
    let mut records = Vec::with_capacity(month_span(cursor, last) as usize);
    while cursor <= last {
        records.push(BudgetRecord {
            name: format!("{} - {}", base_name, month_label(cursor)),
            total_limit: request.amount,
            start_date: cursor,
            end_date: month_end(cursor),
            currency: request.currency.clone(),
            frequency,
            is_active: request.is_active,
        });
        cursor = next_month(cursor);
    }
    Ok(records)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// Last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    next_month(date) - Duration::days(1)
}

/// First day of the following month, with year carry.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() + 1;
    if month > 12 {
        month = 1;
        year += 1;
    }
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Long month name plus year, e.g. `January 2024`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Inclusive count of calendar months between two dates.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32 + 1
}
