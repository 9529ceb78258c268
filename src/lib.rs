pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod progression;
pub mod ranking;
pub mod scoring;
pub mod services;
pub mod stats;
pub mod trend;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::ingestion::IngestionService;
use crate::services::processing::ProcessingService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_ingest(dir: &str) -> Result<()> {
    let config = AppConfig::new();
    let service = IngestionService::new(dir, config);
    service.run()
}

pub fn handle_process() -> Result<()> {
    let config = AppConfig::new();
    let service = ProcessingService::new(config);
    service.run()
}
