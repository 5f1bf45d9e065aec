//! Data transfer types shared with the collaborator backend.

pub mod budget;
pub mod category;
pub mod overview;
pub mod transaction;

pub use budget::{Budget, BudgetRecord, BudgetRequest, Frequency};
pub use category::{Category, Subcategory};
pub use overview::{CellValue, MonthCells, OverviewData, BUDGET_LABEL, RECURRING_LABEL};
pub use transaction::{NewRecurringTransaction, NewTransaction, RecurringTransaction};
