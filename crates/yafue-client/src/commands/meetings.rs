use chrono::Utc;
use tracing::debug;

use yafue_shared::validation::{validate_meeting_form, MeetingForm};
use yafue_shared::Meeting;
use yafue_store::SecureStorage;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Validate the create-meeting form and create the meeting.
///
/// Nothing is sent when a check fails; the error carries the alert text.
pub async fn submit_meeting<S: SecureStorage>(state: &AppState<S>, form: &MeetingForm) -> Result<Meeting> {
    let data = validate_meeting_form(form, Utc::now())?;
    debug!(name = %data.name, users = data.users.len(), "Meeting form valid");
    state.meetings.create_new_meeting(&state.api, data).await
}

/// Reload the logged-in user's meetings.
pub async fn refresh_meetings<S: SecureStorage>(state: &AppState<S>) -> Result<Vec<Meeting>> {
    let user = state.user.user().ok_or(ClientError::NotLoggedIn)?;
    state.meetings.fetch_user_meetings(&state.api, &user.id).await?;
    Ok(state.meetings.all_meetings())
}
