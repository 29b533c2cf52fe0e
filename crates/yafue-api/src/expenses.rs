//! `/expenses` endpoints plus a few summaries computed from a single fetch.

use yafue_shared::{Expense, MarkAsPaidData, UpdateExpenseData};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn get_expense_by_id(&self, id: &str) -> Result<Expense> {
        self.get(&["expenses", id]).await
    }

    pub async fn get_expenses_by_user_id(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.get(&["expenses", "user", user_id]).await
    }

    pub async fn get_expenses_by_meeting_id(&self, meeting_id: &str) -> Result<Vec<Expense>> {
        self.get(&["expenses", "meeting", meeting_id]).await
    }

    pub async fn update_expense(&self, id: &str, data: &UpdateExpenseData) -> Result<Expense> {
        self.put(&["expenses", id], data).await
    }

    pub async fn delete_expense(&self, id: &str) -> Result<Expense> {
        self.delete(&["expenses", id]).await
    }

    pub async fn mark_expense_as_paid(&self, id: &str, user_id: &str) -> Result<Expense> {
        let body = MarkAsPaidData {
            user_id: user_id.to_string(),
        };
        self.patch(&["expenses", id, "pay"], &body).await
    }

    pub async fn get_unpaid_expenses_by_user_id(&self, user_id: &str) -> Result<Vec<Expense>> {
        let expenses = self.get_expenses_by_user_id(user_id).await?;
        Ok(expenses.into_iter().filter(|e| !e.paid).collect())
    }

    pub async fn get_paid_expenses_by_user_id(&self, user_id: &str) -> Result<Vec<Expense>> {
        let expenses = self.get_expenses_by_user_id(user_id).await?;
        Ok(expenses.into_iter().filter(|e| e.paid).collect())
    }

    pub async fn get_total_amount_by_user_id(&self, user_id: &str) -> Result<f64> {
        let expenses = self.get_expenses_by_user_id(user_id).await?;
        Ok(total_amount(&expenses))
    }

    pub async fn get_unpaid_total_by_user_id(&self, user_id: &str) -> Result<f64> {
        let unpaid = self.get_unpaid_expenses_by_user_id(user_id).await?;
        Ok(total_amount(&unpaid))
    }
}

/// Sum of `amount` over `expenses`, regardless of currency.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}
