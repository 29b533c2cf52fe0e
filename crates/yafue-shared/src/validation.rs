//! Client-side checks run before anything is submitted to the backend.
//!
//! Failures are reported to the user directly and never reach a store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY_ID, MAX_MEETING_YEAR, MIN_MEETING_YEAR};
use crate::error::ValidationError;
use crate::models::Group;
use crate::requests::{CreateMeetingData, UserWithAmount};
use crate::types::PayType;

// ---------------------------------------------------------------------------
// Meeting form
// ---------------------------------------------------------------------------

/// Raw state of the create-meeting form. `amount` is kept as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingForm {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub place: String,
    pub pay_type: PayType,
    pub amount: String,
    pub currency_id: String,
    pub expense_description: String,
    pub group: Option<Group>,
}

impl MeetingForm {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            date,
            place: String::new(),
            pay_type: PayType::Equal,
            amount: String::new(),
            currency_id: DEFAULT_CURRENCY_ID.to_string(),
            expense_description: String::new(),
            group: None,
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Check the form and build the creation payload.
///
/// Checks run in the order the form shows its fields, and the first failure
/// is returned. Every member of the selected group becomes a participant;
/// for `ASSIGN` meetings each starts with an assigned amount of zero.
pub fn validate_meeting_form(
    form: &MeetingForm,
    now: DateTime<Utc>,
) -> Result<CreateMeetingData, ValidationError> {
    if is_blank(&form.name) {
        return Err(ValidationError::MissingName);
    }
    if is_blank(&form.description) {
        return Err(ValidationError::MissingDescription);
    }
    if is_blank(&form.place) {
        return Err(ValidationError::MissingPlace);
    }

    let amount = form
        .amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or(ValidationError::InvalidAmount)?;

    if is_blank(&form.expense_description) {
        return Err(ValidationError::MissingExpenseDescription);
    }

    let group = form
        .group
        .as_ref()
        .filter(|g| !g.users.is_empty())
        .ok_or(ValidationError::MissingGroup)?;

    if form.date < now {
        return Err(ValidationError::DateInPast);
    }
    if is_blank(&form.currency_id) {
        return Err(ValidationError::MissingCurrency);
    }

    let assigned = match form.pay_type {
        PayType::Assign => Some(0.0),
        PayType::Equal => None,
    };

    Ok(CreateMeetingData {
        name: form.name.clone(),
        description: form.description.clone(),
        date: form.date,
        place: form.place.clone(),
        pay_type: form.pay_type,
        amount,
        currency_id: form.currency_id.clone(),
        users: group
            .users
            .iter()
            .map(|user| UserWithAmount {
                user: user.clone(),
                amount: assigned,
            })
            .collect(),
        expense_description: form.expense_description.clone(),
    })
}

// ---------------------------------------------------------------------------
// Date inputs
// ---------------------------------------------------------------------------

/// Day / month / year text boxes of the inline date picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateInput {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// The calendar date, once all three parts hold a valid value.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let day = parse_part(&self.day)?;
        let month = parse_part(&self.month)?;
        let year = parse_part(&self.year)?;
        NaiveDate::from_ymd_opt(
            i32::try_from(year).ok()?,
            u32::try_from(month).ok()?,
            u32::try_from(day).ok()?,
        )
    }
}

fn parse_part(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 0,
    }
}

/// Normalise the date boxes as the user types.
///
/// Month is clamped to `1..=12` and year to the supported range. The day is
/// clamped to the month's length only once all three parts are numeric.
/// Empty or non-numeric parts are returned exactly as typed.
pub fn clamp_date_input(input: &DateInput) -> DateInput {
    let month = parse_part(&input.month).map(|m| m.clamp(1, 12));
    let year = parse_part(&input.year)
        .map(|y| y.clamp(i64::from(MIN_MEETING_YEAR), i64::from(MAX_MEETING_YEAR)));
    let day = parse_part(&input.day).map(|d| match (month, year) {
        (Some(m), Some(y)) => {
            // both already clamped into range
            let max = days_in_month(m as u32, y as i32);
            d.clamp(1, i64::from(max))
        }
        _ => d,
    });

    let render = |value: Option<i64>, typed: &str| match value {
        Some(v) => v.to_string(),
        None => typed.to_string(),
    };

    DateInput {
        day: render(day, &input.day),
        month: render(month, &input.month),
        year: render(year, &input.year),
    }
}
