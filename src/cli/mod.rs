//! Thin command shell over the client library.
//!
//! Every command logs in first, runs one operation against the backend, and
//! exits; the library owns all expansion and aggregation decisions.

pub mod forms;
pub mod table;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::api::{submit_expansion, BudgetApi, HttpApi, SubmissionOutcome};
use crate::config::{Config, ConfigManager};
use crate::domain::{NewRecurringTransaction, NewTransaction};
use crate::expansion::expand_budget;
use crate::overview::OverviewState;
use crate::session::Session;

pub async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let manager = ConfigManager::new()?;
    let mut config = manager.load()?;
    let api = HttpApi::new(&config.api_base_url)?;
    let session = login(&api, &mut config).await?;
    // remember the username for the next run; best effort only
    if manager.save(&config).is_err() {
        tracing::warn!("could not persist config");
    }

    match command {
        "overview" => show_overview(&api, &session).await?,
        "budgets" => match args.get(1).map(String::as_str) {
            None | Some("list") => list_budgets(&api, &session).await?,
            Some("new") => create_budgets(&api, &session, &config).await?,
            Some("delete") => {
                let name = args.get(2).context("usage: budgets delete <name>")?;
                api.delete_budget(&session, name).await?;
                println!("{} {}", "Deleted".green(), name);
            }
            Some(other) => bail!("unknown budgets subcommand `{other}`"),
        },
        "categories" => list_categories(&api, &session, args.get(1)).await?,
        "spend" => add_transaction(&api, &session, &config).await?,
        "recurring" => match args.get(1).map(String::as_str) {
            None | Some("list") => list_recurring(&api, &session).await?,
            Some("new") => create_recurring(&api, &session, &config).await?,
            Some("delete") => {
                let id: i64 = args
                    .get(2)
                    .context("usage: recurring delete <id>")?
                    .parse()
                    .context("recurring id must be a number")?;
                api.delete_recurring_transaction(&session, id).await?;
                println!("{} recurring transaction {}", "Deleted".green(), id);
            }
            Some(other) => bail!("unknown recurring subcommand `{other}`"),
        },
        other => {
            print_usage();
            bail!("unknown command `{other}`");
        }
    }
    Ok(())
}

async fn login(api: &HttpApi, config: &mut Config) -> Result<Session> {
    let credentials = forms::credentials(config.last_username.as_deref())?;
    let session = api
        .login(&credentials.username, &credentials.password)
        .await?;
    config.last_username = Some(credentials.username);
    Ok(session)
}

async fn show_overview(api: &dyn BudgetApi, session: &Session) -> Result<()> {
    let mut state = OverviewState::default();
    state.refresh(api, session).await?;
    println!("{}", format!("{}'s overview", session.username()).bold());
    print!("{}", table::render_overview(state.data(), state.summary()));
    for month in &state.data().months {
        let remaining = state.summary().remaining.get(month).copied().unwrap_or(0);
        if remaining < 0 {
            println!("{}", format!("{month} is over budget by {}", -remaining).red());
        }
    }
    Ok(())
}

async fn list_budgets(api: &dyn BudgetApi, session: &Session) -> Result<()> {
    let budgets = api.list_budgets(session).await?;
    if budgets.is_empty() {
        println!("No budgets found.");
        return Ok(());
    }
    for budget in budgets {
        println!(
            "{:<40} {:>12}  {} .. {}",
            budget.name,
            table::format_amount(budget.total_limit),
            budget.start_date,
            budget.end_date
        );
    }
    Ok(())
}

async fn create_budgets(api: &dyn BudgetApi, session: &Session, config: &Config) -> Result<()> {
    let request = forms::budget_request(config)?;
    let records = expand_budget(&request)?;
    let months: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    println!("This will create {} budget(s):", records.len());
    for name in &months {
        println!("  {name}");
    }
    if !forms::confirm("Submit?", true)? {
        println!("Cancelled.");
        return Ok(());
    }

    let report = submit_expansion(api, session, &records).await;
    for (record, outcome) in &report.outcomes {
        match outcome {
            SubmissionOutcome::Created => println!("{} {}", "created".green(), record.name),
            SubmissionOutcome::Failed(message) => {
                println!("{} {}: {}", "failed ".red(), record.name, message)
            }
            SubmissionOutcome::Skipped => println!("{} {}", "skipped".yellow(), record.name),
        }
    }
    if !report.is_complete() {
        bail!(
            "{} of {} budgets were created; the rest were not submitted",
            report.created(),
            report.outcomes.len()
        );
    }
    Ok(())
}

async fn list_categories(
    api: &dyn BudgetApi,
    session: &Session,
    category_id: Option<&String>,
) -> Result<()> {
    match category_id {
        Some(raw) => {
            let id: i64 = raw.parse().context("category id must be a number")?;
            for sub in api.list_subcategories(session, id).await? {
                println!("{:>4}  {}", sub.id, sub.name);
            }
        }
        None => {
            for category in api.list_categories(session).await? {
                println!("{:>4}  {}", category.id, category.name);
            }
        }
    }
    Ok(())
}

/// Category then subcategory selection, driven by the backend lists.
async fn pick_category(api: &dyn BudgetApi, session: &Session) -> Result<(i64, i64)> {
    let categories = api.list_categories(session).await?;
    if categories.is_empty() {
        bail!("no categories exist yet; create them in the backend first");
    }
    let labels: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
    let category = &categories[forms::pick("Category", &labels)?];

    let subcategories = api.list_subcategories(session, category.id).await?;
    if subcategories.is_empty() {
        bail!("category `{}` has no subcategories", category.name);
    }
    let labels: Vec<String> = subcategories.iter().map(|s| s.name.clone()).collect();
    let subcategory = &subcategories[forms::pick("Subcategory", &labels)?];
    Ok((category.id, subcategory.id))
}

async fn add_transaction(api: &dyn BudgetApi, session: &Session, config: &Config) -> Result<()> {
    let (category, subcategory) = pick_category(api, session).await?;
    let transaction = NewTransaction {
        category,
        subcategory,
        amount_currency: forms::prompt_amount("Amount")?,
        currency: config.default_currency.clone(),
        description: forms::prompt_text("Description")?,
        date: forms::prompt_date("Date (YYYY-MM-DD)")?,
    };
    api.create_transaction(session, &transaction).await?;
    println!("{} {}", "Recorded".green(), transaction.description);
    Ok(())
}

async fn list_recurring(api: &dyn BudgetApi, session: &Session) -> Result<()> {
    let templates = api.list_recurring_transactions(session).await?;
    if templates.is_empty() {
        println!("No recurring transactions.");
        return Ok(());
    }
    for template in templates {
        println!(
            "{:>4}  {:<30} {:>10} {}  day {} ({})",
            template.id,
            template.description,
            table::format_amount(template.amount_currency),
            template.currency,
            template.day_of_month,
            template.frequency.label()
        );
    }
    Ok(())
}

async fn create_recurring(api: &dyn BudgetApi, session: &Session, config: &Config) -> Result<()> {
    let (category, subcategory) = pick_category(api, session).await?;
    let template = NewRecurringTransaction {
        category,
        subcategory,
        amount_currency: forms::prompt_amount("Amount")?,
        currency: config.default_currency.clone(),
        description: forms::prompt_text("Description")?,
        start_date: forms::prompt_date("Start date (YYYY-MM-DD)")?,
        end_date: forms::prompt_date("End date (YYYY-MM-DD)")?,
        frequency: crate::domain::Frequency::Monthly,
        day_of_month: forms::prompt_day("Day of month")?,
    };
    api.create_recurring_transaction(session, &template).await?;
    println!("{} {}", "Created".green(), template.description);
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: spendview <command>\n\
         Commands:\n  \
         overview                    monthly budget-vs-spend table\n  \
         budgets [list]              list budgets\n  \
         budgets new                 create budgets for a date range\n  \
         budgets delete <name>       delete a budget by name\n  \
         categories [<id>]           list categories, or subcategories of one\n  \
         spend                       record a transaction\n  \
         recurring [list|new|delete <id>]\n  \
         help                        show this message"
    );
}
