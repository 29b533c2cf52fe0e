//! # yafue-client
//!
//! Client core of the Ya Fue app: session and meeting stores, theming and
//! the screen-level commands that tie them to the backend.
//!
//! Everything hangs off an [`AppState`] built by [`bootstrap`]; views
//! subscribe to its [`EventBus`] and re-read the stores on every event.

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod stores;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use yafue_api::ApiClient;
use yafue_store::settings::load_settings;
use yafue_store::{database, Database};

pub use crate::config::ClientConfig;
pub use crate::error::{ClientError, Result};
pub use crate::events::{EventBus, StoreEvent};
pub use crate::state::AppState;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Calling it twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("yafue_client=debug,yafue_api=debug,yafue_store=info,warn")
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Open local storage, restore settings and session, and wire the stores.
pub async fn bootstrap(config: ClientConfig) -> anyhow::Result<AppState<Database>> {
    let data_dir = match config.data_dir {
        Some(dir) => dir,
        None => database::default_data_dir().context("no data directory available")?,
    };

    let db = Database::open_in_dir(&data_dir)
        .with_context(|| format!("failed to open storage in {}", data_dir.display()))?;
    let settings = load_settings(&db);
    let theme = config.theme.unwrap_or(settings.theme);

    let api = ApiClient::new(&config.api_base_url).context("invalid API base URL")?;

    let state = AppState::new(api, db, theme, config.system_appearance);
    state.user.initialize();

    info!(
        api = %config.api_base_url,
        data_dir = %data_dir.display(),
        ?theme,
        logged_in = state.user.is_logged_in(),
        "Client ready"
    );

    Ok(state)
}
