//! Request bodies sent to the backend.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::types::{ExpenseSplit, PayType};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserData {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub image: Option<String>,
    pub balance: f64,
}

impl fmt::Debug for CreateUserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserData")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserData {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: Option<String>,
    pub balance: f64,
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupData {
    pub name: String,
    pub description: String,
    pub image: String,
    /// Creator, added as the first member.
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGroupData {
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembershipRequest {
    pub group_id: String,
    pub user_id: String,
}

// ---------------------------------------------------------------------------
// Meetings
// ---------------------------------------------------------------------------

/// A meeting participant as sent on creation. `amount` is only set for
/// [`PayType::Assign`] meetings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserWithAmount {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingData {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub place: String,
    #[serde(rename = "pay_type")]
    pub pay_type: PayType,
    pub amount: f64,
    #[serde(rename = "currency_id")]
    pub currency_id: String,
    pub users: Vec<UserWithAmount>,
    pub expense_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMeetingData {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub place: String,
}

// ---------------------------------------------------------------------------
// Expenses
// ---------------------------------------------------------------------------

/// Partial expense update; unset fields are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpenseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_type: Option<ExpenseSplit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAsPaidData {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_meeting_wire_names() {
        let data = CreateMeetingData {
            name: "Asado".into(),
            description: "Cumple de Tomi".into(),
            date: "2030-05-01T20:00:00Z".parse().unwrap(),
            place: "Quilmes".into(),
            pay_type: PayType::Equal,
            amount: 9000.0,
            currency_id: "1".into(),
            users: vec![],
            expense_description: "Carne".into(),
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["pay_type"], "EQUAL");
        assert_eq!(value["currency_id"], "1");
        assert_eq!(value["expenseDescription"], "Carne");
    }

    #[test]
    fn test_user_with_amount_flattens() {
        let user: User = serde_json::from_value(json!({
            "id": "u2", "username": "tomi", "firstName": "Tomás",
            "lastName": "Ruiz", "email": "tomi@example.com",
            "image": null, "balance": 0.0
        }))
        .unwrap();

        let equal = serde_json::to_value(UserWithAmount { user: user.clone(), amount: None }).unwrap();
        assert_eq!(equal["username"], "tomi");
        assert!(equal.get("amount").is_none());

        let assign = serde_json::to_value(UserWithAmount { user, amount: Some(0.0) }).unwrap();
        assert_eq!(assign["amount"], 0.0);
    }

    #[test]
    fn test_update_expense_skips_unset_fields() {
        let patch = UpdateExpenseData {
            amount: Some(250.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "amount": 250.0 }));
    }

    #[test]
    fn test_login_request_debug_redacts_password() {
        let req = LoginRequest {
            email: "juli@example.com".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{req:?}").contains("hunter2"));
    }
}
