use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ValidationError;

/// How often a budget renews.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    #[serde(rename = "one-time")]
    OneTime,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "quarterly")]
    Quarterly,
    #[serde(rename = "yearly")]
    Yearly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::OneTime,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Yearly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }
}

/// A budget as the user enters it: one request covering a whole date range.
///
/// Optional fields mirror an unfinished form; [`BudgetRequest::validate`]
/// rejects the request before anything is sent to the backend.
#[derive(Debug, Clone, Default)]
pub struct BudgetRequest {
    pub name: String,
    pub amount: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub currency: String,
    pub frequency: Option<Frequency>,
    pub is_active: bool,
}

impl BudgetRequest {
    /// Checks every required field and the date ordering invariant.
    /// Returns the raw (not yet normalized) date bounds and frequency.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate, Frequency), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(self.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.currency.trim().is_empty() {
            return Err(ValidationError::MissingField("currency"));
        }
        let frequency = self
            .frequency
            .ok_or(ValidationError::MissingField("frequency"))?;
        let start = self
            .start_date
            .ok_or(ValidationError::MissingField("start date"))?;
        let end = self
            .end_date
            .ok_or(ValidationError::MissingField("end date"))?;
        if end <= start {
            return Err(ValidationError::EndBeforeStart);
        }
        Ok((start, end, frequency))
    }
}

/// One calendar-month budget row, as posted to `budgets/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRecord {
    pub name: String,
    pub total_limit: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub currency: String,
    pub frequency: Frequency,
    pub is_active: bool,
}

/// A budget row as returned by the backend listing endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Budget {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_limit: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Accepts both numbers and stringified decimals; the backend serializes
/// decimal columns as strings.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text.trim().parse().unwrap_or(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_listing_accepts_decimal_strings() {
        let budget: Budget = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Groceries - January 2024",
                "total_limit": "900.00",
                "start_date": "2024-01-01",
                "end_date": "2024-01-31"
            }"#,
        )
        .unwrap();
        assert_eq!(budget.total_limit, 900.0);
        assert_eq!(budget.currency, None);
    }

    #[test]
    fn frequency_uses_backend_wire_names() {
        assert_eq!(
            serde_json::to_string(&Frequency::OneTime).unwrap(),
            "\"one-time\""
        );
        let parsed: Frequency = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(parsed, Frequency::Quarterly);
    }

    #[test]
    fn validate_requires_every_field() {
        let mut request = BudgetRequest {
            name: "Groceries".into(),
            amount: 900.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 10),
            currency: "USD".into(),
            frequency: Some(Frequency::Monthly),
            is_active: true,
        };
        assert!(request.validate().is_ok());

        request.frequency = None;
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingField("frequency"))
        );
    }
}
