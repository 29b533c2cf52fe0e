//! Fixtures shared by the client tests.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use yafue_api::ApiClient;
use yafue_shared::{
    Appearance, AuthResponse, CreateMeetingData, Currency, Meeting, PayType, ThemePreference, User,
};
use yafue_store::{SecureStorage, StoreError};

use crate::state::AppState;

/// In-memory [`SecureStorage`] that can be told to fail.
#[derive(Default)]
pub struct MemoryStorage {
    pub items: Mutex<HashMap<String, String>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

fn refused() -> StoreError {
    StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "storage refused"))
}

impl SecureStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> yafue_store::Result<Option<String>> {
        if self.fail_reads {
            return Err(refused());
        }
        Ok(self.items.lock().unwrap().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> yafue_store::Result<()> {
        if self.fail_writes {
            return Err(refused());
        }
        self.items.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_item(&self, key: &str) -> yafue_store::Result<()> {
        if self.fail_writes {
            return Err(refused());
        }
        self.items.lock().unwrap().remove(key);
        Ok(())
    }
}

pub fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        first_name: "Nombre".to_string(),
        last_name: "Apellido".to_string(),
        email: format!("{username}@example.com"),
        image: None,
        balance: 0.0,
        created_at: None,
        updated_at: None,
    }
}

pub fn auth_response(id: &str, username: &str) -> AuthResponse {
    AuthResponse {
        email: format!("{username}@example.com"),
        password: "secreto".to_string(),
        user: user(id, username),
    }
}

pub fn meeting_data(name: &str, date: DateTime<Utc>) -> CreateMeetingData {
    CreateMeetingData {
        name: name.to_string(),
        description: format!("{name} con amigos"),
        date,
        place: "Casa de Tomi".to_string(),
        pay_type: PayType::Equal,
        amount: 9000.0,
        currency_id: "1".to_string(),
        users: Vec::new(),
        expense_description: "Comida".to_string(),
    }
}

/// The meeting the backend would return for `data`.
pub fn meeting_from(id: &str, data: &CreateMeetingData) -> Meeting {
    Meeting {
        id: id.to_string(),
        name: data.name.clone(),
        description: data.description.clone(),
        date: data.date,
        place: data.place.clone(),
        pay_type: data.pay_type,
        amount: data.amount,
        currency: Currency::peso(),
        expense_description: data.expense_description.clone(),
        users: data.users.iter().map(|u| u.user.clone()).collect(),
        created_at: data.date,
        updated_at: data.date,
    }
}

pub fn meeting(id: &str, date: DateTime<Utc>) -> Meeting {
    meeting_from(id, &meeting_data("Juntada", date))
}

/// App state talking to `router` served on localhost, with in-memory
/// storage and the light theme.
pub async fn app_with(router: axum::Router) -> AppState<MemoryStorage> {
    let base_url = yafue_api::testing::spawn(router).await;
    let api = ApiClient::new(&base_url).unwrap();
    AppState::new(
        api,
        MemoryStorage::default(),
        ThemePreference::Light,
        Appearance::Light,
    )
}
