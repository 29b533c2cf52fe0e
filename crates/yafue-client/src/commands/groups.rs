use tracing::info;

use yafue_shared::{CreateGroupData, Group, ValidationError};
use yafue_store::SecureStorage;

use crate::error::{ClientError, Result};
use crate::state::AppState;

pub async fn load_user_groups<S: SecureStorage>(state: &AppState<S>) -> Result<Vec<Group>> {
    let user = state.user.user().ok_or(ClientError::NotLoggedIn)?;
    Ok(state.api.get_groups_by_user_id(&user.id).await?)
}

/// Create a group with the logged-in user as its first member.
pub async fn create_group<S: SecureStorage>(
    state: &AppState<S>,
    name: &str,
    description: &str,
) -> Result<Group> {
    let user = state.user.user().ok_or(ClientError::NotLoggedIn)?;
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(ValidationError::IncompleteGroup.into());
    }

    let data = CreateGroupData {
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        image: String::new(),
        user_id: user.id,
    };
    Ok(state.api.create_group(&data).await?)
}

pub async fn invite<S: SecureStorage>(state: &AppState<S>, group_id: &str, user_id: &str) -> Result<Group> {
    let group = state.api.invite_user_to_group(group_id, user_id).await?;
    info!(group_id, user_id, members = group.users.len(), "Member invited");
    Ok(group)
}

pub async fn remove_member<S: SecureStorage>(
    state: &AppState<S>,
    group_id: &str,
    user_id: &str,
) -> Result<Group> {
    let group = state.api.remove_user_from_group(group_id, user_id).await?;
    info!(group_id, user_id, members = group.users.len(), "Member removed");
    Ok(group)
}
