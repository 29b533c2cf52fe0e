//! Entities exchanged with the Ya Fue backend.
//!
//! Field names follow the backend JSON (`camelCase`, except `pay_type`).
//! Required fields are not defaulted: a response missing one fails to decode
//! instead of leaking a half-filled record into the stores.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY_ID;
use crate::types::{ExpenseSplit, PayType};

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

impl Currency {
    /// The currency preselected in the meeting form.
    pub fn peso() -> Self {
        Self {
            id: DEFAULT_CURRENCY_ID.to_string(),
            name: "Peso".to_string(),
            symbol: "$".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A registered user. `balance` is the net amount owed (negative) or owing
/// (positive) as computed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: Option<String>,
    pub balance: f64,
    /// Present on auth responses, absent on nested group/meeting members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body returned by register and login endpoints.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub email: String,
    pub password: String,
    pub user: User,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub users: Vec<User>,
}

// ---------------------------------------------------------------------------
// Meeting ("juntada")
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub place: String,
    #[serde(rename = "pay_type")]
    pub pay_type: PayType,
    pub amount: f64,
    pub currency: Currency,
    pub expense_description: String,
    pub users: Vec<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meeting {
    /// Whether the meeting happens strictly after `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }
}

/// The meeting record embedded in an [`Expense`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub place: String,
    #[serde(rename = "pay_type")]
    pub pay_type: PayType,
    pub amount: f64,
    pub currency: Currency,
    pub expense_description: String,
}

// ---------------------------------------------------------------------------
// Expense
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub currency: Currency,
    #[serde(rename = "pay_type")]
    pub pay_type: ExpenseSplit,
    pub paid: bool,
    /// The user who owes (or paid) this share.
    pub user: User,
    pub meeting: MeetingSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
