use clap::Parser;
use ferien_status::utils::{logger, validation::Validate};
use ferien_status::{api, CliConfig, FeiertageApi, SchulferienApi, StatusEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ferien-status CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let holidays = FeiertageApi::new()?;
    let vacations = SchulferienApi::new()?;
    let engine = StatusEngine::new(holidays, vacations);

    let response = api::get_status(&engine, &config).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
