use bookboard_api::config::ApiConfig;
use bookboard_core::store::ReservationStore;
use bookboard_storage::open_store;
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    bookboard_api::init_tracing(config.log_level)?;

    // Load the board from local storage
    let store = ReservationStore::initialize(open_store(&config.storage_path));

    // Start API server
    bookboard_api::start_server(config, store).await?;

    Ok(())
}
