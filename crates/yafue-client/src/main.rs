//! Headless Ya Fue client: restores the saved session and prints the home
//! summary. Handy for checking a backend without the app.

use tracing::{info, warn};

use yafue_client::commands::{expenses, home};
use yafue_client::{bootstrap, init_tracing, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("Starting Ya Fue client v{}", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_env();
    info!(?config, "Loaded configuration");

    let state = bootstrap(config).await?;

    let Some(user) = state.user.user() else {
        warn!("No saved session; log in from the app first");
        return Ok(());
    };

    match home::load_home(&state).await {
        Ok(home) => {
            println!("Hola, {}", user.full_name());
            println!("Grupos: {}", home.groups.len());
            for meeting in &home.upcoming_meetings {
                println!(
                    "  {} - {} ({})",
                    meeting.date.format("%d/%m/%Y %H:%M"),
                    meeting.name,
                    meeting.place
                );
            }
            println!("Pendiente de pago: ${:.2}", home.unpaid_total);
        }
        Err(e) => {
            warn!(error = %e, "Failed to load home");
            println!("{}", e.user_message());
        }
    }

    if let Ok((_, summary)) = expenses::expense_summary(&state).await {
        info!(?summary, "Expense summary");
    }

    Ok(())
}
