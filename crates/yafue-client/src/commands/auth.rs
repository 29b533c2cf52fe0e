use serde::{Deserialize, Serialize};
use tracing::info;

use yafue_shared::{AuthResponse, CreateUserData, User};
use yafue_store::SecureStorage;

use crate::error::{ClientError, Result};
use crate::state::AppState;

/// Fields of the sign-up form.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<RegistrationForm> for CreateUserData {
    fn from(form: RegistrationForm) -> Self {
        CreateUserData {
            username: form.username,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.password,
            image: None,
            balance: 0.0,
        }
    }
}

pub async fn login<S: SecureStorage>(state: &AppState<S>, email: &str, password: &str) -> Result<User> {
    let response = state.api.login_user(email, password).await?;
    start_session(state, &response)
}

pub async fn login_with_google<S: SecureStorage>(state: &AppState<S>, email: &str) -> Result<User> {
    let response = state.api.login_user_with_google(email).await?;
    start_session(state, &response)
}

pub async fn register<S: SecureStorage>(state: &AppState<S>, form: RegistrationForm) -> Result<User> {
    let response = state.api.create_user(&form.into()).await?;
    info!(user_id = %response.user.id, "Account created");
    start_session(state, &response)
}

/// Drop the session along with everything cached for it.
pub fn logout<S: SecureStorage>(state: &AppState<S>) {
    state.user.logout();
    state.meetings.reset();
}

fn start_session<S: SecureStorage>(state: &AppState<S>, response: &AuthResponse) -> Result<User> {
    state.user.set_user(Some(response));
    // set_user falls back to logged-out when the session cannot be stored
    state.user.user().ok_or(ClientError::SessionNotSaved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{app_with, meeting};
    use axum::routing::post;
    use axum::{Json, Router};
    use chrono::Utc;
    use serde_json::{json, Value};
    use yafue_api::testing::user_json;

    fn auth_body(email: &str) -> Value {
        json!({ "email": email, "password": "hash", "user": user_json("u1", "juli") })
    }

    fn backend() -> Router {
        Router::new()
            .route(
                "/users/login",
                post(|Json(body): Json<Value>| async move {
                    Json(auth_body(body["email"].as_str().unwrap_or_default()))
                }),
            )
            .route(
                "/users/login/google",
                post(|Json(body): Json<Value>| async move {
                    Json(auth_body(body["email"].as_str().unwrap_or_default()))
                }),
            )
            .route(
                "/users",
                post(|Json(body): Json<Value>| async move {
                    assert_eq!(body["balance"], 0.0);
                    assert!(body["image"].is_null());
                    Json(auth_body(body["email"].as_str().unwrap_or_default()))
                }),
            )
    }

    #[tokio::test]
    async fn test_login_starts_session() {
        let state = app_with(backend()).await;

        let user = login(&state, "juli@example.com", "secreto").await.unwrap();

        assert_eq!(user.id, "u1");
        assert!(state.user.is_logged_in());
    }

    #[tokio::test]
    async fn test_google_login() {
        let state = app_with(backend()).await;
        let user = login_with_google(&state, "juli@gmail.com").await.unwrap();
        assert_eq!(state.user.user(), Some(user));
    }

    #[tokio::test]
    async fn test_register_sends_defaults() {
        let state = app_with(backend()).await;
        let form = RegistrationForm {
            username: "juli".into(),
            first_name: "Julieta".into(),
            last_name: "Paz".into(),
            email: "juli@example.com".into(),
            password: "secreto".into(),
        };

        register(&state, form).await.unwrap();
        assert!(state.user.is_logged_in());
    }

    #[tokio::test]
    async fn test_rejected_login_stays_logged_out() {
        let state = app_with(Router::new()).await;

        let err = login(&state, "juli@example.com", "mal").await.unwrap_err();

        assert!(matches!(err, ClientError::Api(ref e) if e.status() == Some(404)));
        assert!(!state.user.is_logged_in());
    }

    #[tokio::test]
    async fn test_unsaved_session_is_reported() {
        let state = app_with(backend()).await;
        state.storage.lock().unwrap().fail_writes = true;

        let err = login(&state, "juli@example.com", "secreto").await.unwrap_err();
        assert!(matches!(err, ClientError::SessionNotSaved));
    }

    #[tokio::test]
    async fn test_logout_clears_meetings() {
        let state = app_with(backend()).await;
        login(&state, "juli@example.com", "secreto").await.unwrap();
        state.meetings.set_meetings(vec![meeting("m1", Utc::now())]);

        logout(&state);

        assert!(!state.user.is_logged_in());
        assert!(state.meetings.all_meetings().is_empty());
    }
}
