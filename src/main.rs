use anyhow::Context;
use chrono::Utc;
use dotenv::dotenv;
use log::{info, warn};
use quickreserve::db::{AppointmentStore, MemoryAppointmentStore, PgAppointmentStore};
use quickreserve::services::run_reminders;
use quickreserve::utils::GraphApiClient;
use quickreserve::{create_router, AppState, Config};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // initialize tracing; `log` records from the library are bridged in
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let store: Arc<dyn AppointmentStore> = match config.database_url.as_deref() {
        Some(url) => Arc::new(
            PgAppointmentStore::connect(url)
                .await
                .context("Failed to connect to appointment database")?,
        ),
        None => {
            warn!("DATABASE_URL is not set; using an empty in-memory appointment store");
            Arc::new(MemoryAppointmentStore::default())
        }
    };
    let messenger = Arc::new(GraphApiClient::from_config(&config));
    let shared_state = Arc::new(AppState {
        config,
        store,
        messenger,
    });

    // `quickreserve remind` runs the job once for cron-style triggers.
    if std::env::args().nth(1).as_deref() == Some("remind") {
        let summary = run_reminders(
            shared_state.store.as_ref(),
            shared_state.messenger.as_ref(),
            &shared_state.config.template,
            Utc::now(),
            shared_state.config.utc_offset,
        )
        .await
        .context("Reminder process failed")?;
        println!("{}", summary.message());
        return Ok(());
    }

    let bind_addr = shared_state.config.bind_addr;
    let app = create_router(shared_state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
