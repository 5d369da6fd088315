use clap::Parser;
use shelf::cli::Cli;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to shelf.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("shelf.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Shelf starting up");

    shelf::cli::run(cli).await
}
