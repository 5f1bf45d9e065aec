//! Interactive prompts for the shell commands.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Password, Select};

use crate::config::Config;
use crate::domain::{BudgetRequest, Frequency};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub fn credentials(last_username: Option<&str>) -> Result<Credentials> {
    let mut input = Input::<String>::new().with_prompt("Username");
    if let Some(username) = last_username {
        input = input.default(username.to_string());
    }
    let username = input.interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;
    Ok(Credentials { username, password })
}

/// Collects a budget request covering a whole date range. Validation happens
/// in the library, not here; this only gathers raw input.
pub fn budget_request(config: &Config) -> Result<BudgetRequest> {
    let name: String = Input::new().with_prompt("Budget name").interact_text()?;
    let amount: f64 = Input::new()
        .with_prompt("Amount per month")
        .interact_text()?;
    let frequency_idx = Select::new()
        .with_prompt("Frequency")
        .items(&Frequency::ALL.map(|f| f.label()))
        .default(1)
        .interact()?;
    let currency: String = Input::new()
        .with_prompt("Currency")
        .default(config.default_currency.clone())
        .interact_text()?;
    let start_date = prompt_date("Start date (YYYY-MM-DD)")?;
    let end_date = prompt_date("End date (YYYY-MM-DD)")?;
    let is_active = Confirm::new()
        .with_prompt("Active immediately?")
        .default(true)
        .interact()?;

    Ok(BudgetRequest {
        name,
        amount,
        start_date: Some(start_date),
        end_date: Some(end_date),
        currency,
        frequency: Some(Frequency::ALL[frequency_idx]),
        is_active,
    })
}

pub fn prompt_date(prompt: &str) -> Result<NaiveDate> {
    let date = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|text: &String| {
            NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
                .map(|_| ())
                .map_err(|_| "expected YYYY-MM-DD")
        })
        .interact_text()?;
    Ok(NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)?)
}

pub fn prompt_amount(prompt: &str) -> Result<f64> {
    Ok(Input::<f64>::new().with_prompt(prompt).interact_text()?)
}

pub fn prompt_day(prompt: &str) -> Result<u32> {
    Ok(Input::<u32>::new()
        .with_prompt(prompt)
        .validate_with(|day: &u32| {
            if (1..=31).contains(day) {
                Ok(())
            } else {
                Err("day must be between 1 and 31")
            }
        })
        .interact_text()?)
}

pub fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

/// Index selection over arbitrary display labels.
pub fn pick(prompt: &str, labels: &[String]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact()?)
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
