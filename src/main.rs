use clap::Parser;
use std::path::Path;

use textpass::cli::{handlers, Args, CliCommand};
use textpass::core::config::Config;
use textpass::{api, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    args.apply_to(&mut config);

    logging::init(&config)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        // API-only mode (blocks until shutdown)
        None | Some(CliCommand::Serve) => {
            api::start_server(config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
            log::info!("API server shut down");
        }
        Some(CliCommand::Generate { text, no_numbers, no_symbols, min_length }) => {
            let report = handlers::handle_generate(&config, &text, no_numbers, no_symbols, min_length)?;
            println!("{}", report);
        }
        Some(CliCommand::Score { password }) => {
            println!("{}", handlers::handle_score(&password));
        }
    }

    Ok(())
}
