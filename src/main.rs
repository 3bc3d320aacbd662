use cambio::app::menu;
use cambio::config::options::load_options;
use cambio::utils::{logger, validation::Validate};
use cambio::{CliConfig, ConverterService, ExchangeRateApiClient};
use clap::Parser;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cambio");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let options = match load_options(config.options_file.as_deref().map(Path::new)) {
        Ok(options) => options,
        Err(e) => {
            tracing::error!("Failed to load conversion options: {}", e);
            eprintln!("Failed to load conversion options: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded {} conversion options", options.len());

    let client = ExchangeRateApiClient::new(&config)?;
    let mut service = ConverterService::new(client, options);

    menu::run(&mut service, config.history_limit).await?;

    Ok(())
}
