use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::info;
use tokio::runtime::Builder;
use db_injector::config::impls::injector_config::DEFAULT_CONFIG_PATH;
use db_injector::config::structs::injector_config::InjectorConfig;
use db_injector::database::structs::database_manager::DatabaseManager;
use db_injector::database::structs::log_sink::LogSink;
use db_injector::logging::setup_logging;
use db_injector::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_config {
        let path = args.config.clone().unwrap_or_else(|| String::from(DEFAULT_CONFIG_PATH));
        return match InjectorConfig::create_template(&path) {
            Ok(_) => {
                println!("[CONFIG] Template written to {path}");
                Ok(())
            }
            Err(e) => {
                eprintln!("[ERROR] Unable to write {path}: {e}");
                exit(101)
            }
        };
    }

    let config = match InjectorConfig::from_cli(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            exit(101)
        }
    };

    if let Err(e) = setup_logging(&config.log_level) {
        eprintln!("[ERROR] {e}");
        exit(101)
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("{config:?}");

    Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            // Failures are already reported through the sink.
            let Ok(mut manager) = DatabaseManager::new(&config, Arc::new(LogSink)) else {
                exit(1)
            };

            let result = match args.check {
                true => manager.connect().await.map(|_| "database connection verified"),
                false => manager.inject().await.map(|_| "database stress done"),
            };

            match result {
                Ok(message) => info!("{message}"),
                Err(_) => exit(1),
            }
        });

    Ok(())
}
