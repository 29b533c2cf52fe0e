use futures::TryFutureExt;
use serde::Serialize;
use tracing::debug;

use yafue_api::expenses::total_amount;
use yafue_shared::{Expense, Group, Meeting};
use yafue_store::SecureStorage;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Everything the home tab shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub groups: Vec<Group>,
    pub upcoming_meetings: Vec<Meeting>,
    pub unpaid_expenses: Vec<Expense>,
    pub unpaid_total: f64,
}

/// Load groups, meetings and unpaid expenses concurrently. The first failure
/// aborts the whole load, cancelling a meeting fetch still in flight.
pub async fn load_home<S: SecureStorage>(state: &AppState<S>) -> Result<HomeData> {
    let user = state.user.user().ok_or(ClientError::NotLoggedIn)?;

    let (groups, (), unpaid_expenses) = futures::try_join!(
        state
            .api
            .get_groups_by_user_id(&user.id)
            .err_into::<ClientError>(),
        state.meetings.fetch_user_meetings(&state.api, &user.id),
        state
            .api
            .get_unpaid_expenses_by_user_id(&user.id)
            .err_into::<ClientError>(),
    )?;

    debug!(
        user_id = %user.id,
        groups = groups.len(),
        unpaid = unpaid_expenses.len(),
        "Home loaded"
    );

    Ok(HomeData {
        groups,
        upcoming_meetings: state.meetings.upcoming_meetings(),
        unpaid_total: total_amount(&unpaid_expenses),
        unpaid_expenses,
    })
}
