use crate::config::Config;
use crate::error::{other_error, DeskResult};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> DeskResult<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config, logging what was picked up
pub fn load_config() -> DeskResult<Config> {
    match Config::load() {
        Ok(config) => {
            info!(
                "Using time zone {} with default shift {} - {}",
                config.timezone, config.default_shift_start, config.default_shift_end
            );
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e)
        }
    }
}
