use serde::{Deserialize, Serialize};
use tracing::info;

use yafue_shared::{UpdateUserData, User};
use yafue_store::SecureStorage;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// The editable part of a profile. Email and balance are not editable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEdit {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub image: Option<String>,
}

impl From<&User> for ProfileEdit {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            image: user.image.clone(),
        }
    }
}

pub async fn save_profile<S: SecureStorage>(state: &AppState<S>, edit: ProfileEdit) -> Result<User> {
    let current = state.user.user().ok_or(ClientError::NotLoggedIn)?;

    let data = UpdateUserData {
        username: edit.username,
        first_name: edit.first_name,
        last_name: edit.last_name,
        image: edit.image,
        email: current.email,
        balance: current.balance,
    };

    let updated = state.api.update_user(&current.id, &data).await?;
    state.user.update_user(updated.clone())?;

    info!(user_id = %updated.id, "Profile saved");
    Ok(updated)
}
