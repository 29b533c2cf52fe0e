use serde::Serialize;
use tracing::info;

use yafue_api::expenses::total_amount;
use yafue_shared::Expense;
use yafue_store::SecureStorage;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Totals shown at the top of the expenses screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total: f64,
    pub unpaid_total: f64,
    pub paid_count: usize,
    pub unpaid_count: usize,
}

impl ExpenseSummary {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let (paid, unpaid): (Vec<Expense>, Vec<Expense>) =
            expenses.iter().cloned().partition(|e| e.paid);

        Self {
            total: total_amount(expenses),
            unpaid_total: total_amount(&unpaid),
            paid_count: paid.len(),
            unpaid_count: unpaid.len(),
        }
    }
}

/// Fetch the user's expenses once and summarise them.
pub async fn expense_summary<S: SecureStorage>(state: &AppState<S>) -> Result<(Vec<Expense>, ExpenseSummary)> {
    let user = state.user.user().ok_or(ClientError::NotLoggedIn)?;
    let expenses = state.api.get_expenses_by_user_id(&user.id).await?;
    let summary = ExpenseSummary::from_expenses(&expenses);
    Ok((expenses, summary))
}

/// Mark the logged-in user's share of an expense as paid.
pub async fn mark_paid<S: SecureStorage>(state: &AppState<S>, expense_id: &str) -> Result<Expense> {
    let user = state.user.user().ok_or(ClientError::NotLoggedIn)?;
    let expense = state.api.mark_expense_as_paid(expense_id, &user.id).await?;
    info!(expense_id, user_id = %user.id, "Expense paid");
    Ok(expense)
}
