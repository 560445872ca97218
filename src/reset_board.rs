use bookboard_api::config::ApiConfig;
use bookboard_core::persistence::{KeyValueStore, RESERVATIONS_KEY};
use bookboard_storage::FileStore;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

// Forgets every reservation; the next server start installs the defaults.
fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    let mut storage = FileStore::new(&config.storage_path);

    info!(path = %storage.path().display(), "Clearing persisted reservations");
    storage.remove(RESERVATIONS_KEY)?;
    info!("Reservations cleared.");

    Ok(())
}
