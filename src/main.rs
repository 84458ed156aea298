use clap::Parser;
use parking_store::utils::{logger, validation::Validate};
use parking_store::{CliConfig, ParkingStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting parking-store CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.validate().and_then(|_| cli.resolve()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let store = ParkingStore::from_config(&config)?;

    if let Err(e) = store.fetch_spots().await {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    match &cli.plate {
        Some(plate) => match store.get_spot_by_plate(plate) {
            Some(spot) => println!("{}", serde_json::to_string_pretty(&spot)?),
            None => {
                eprintln!("No spot found for plate {}", plate);
                std::process::exit(3);
            }
        },
        None => println!("{}", serde_json::to_string_pretty(&*store.snapshot())?),
    }

    Ok(())
}
