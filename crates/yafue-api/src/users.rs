//! `/users` endpoints: registration, login and profile updates.

use serde::Deserialize;
use tracing::info;

use yafue_shared::{
    AuthResponse, CreateUserData, GoogleLoginRequest, LoginRequest, UpdateUserData, User,
};

use crate::client::ApiClient;
use crate::error::Result;

/// `PUT /users/{id}` answers either with the bare user or wrapped in
/// `{ "user": ... }` depending on the backend version.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl From<UserEnvelope> for User {
    fn from(envelope: UserEnvelope) -> Self {
        match envelope {
            UserEnvelope::Wrapped { user } | UserEnvelope::Bare(user) => user,
        }
    }
}

impl ApiClient {
    pub async fn get_user_by_id(&self, id: &str) -> Result<User> {
        self.get(&["users", id]).await
    }

    /// Register a new account.
    pub async fn create_user(&self, user: &CreateUserData) -> Result<AuthResponse> {
        let response: AuthResponse = self.post(&["users"], user).await?;
        info!(user_id = %response.user.id, "User registered");
        Ok(response)
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post(&["users", "login"], &body).await
    }

    pub async fn login_user_with_google(&self, email: &str) -> Result<AuthResponse> {
        let body = GoogleLoginRequest {
            email: email.to_string(),
        };
        self.post(&["users", "login", "google"], &body).await
    }

    pub async fn update_user(&self, id: &str, data: &UpdateUserData) -> Result<User> {
        let envelope: UserEnvelope = self.put(&["users", id], data).await?;
        Ok(envelope.into())
    }
}
