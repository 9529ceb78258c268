pub mod ingestion;
pub mod processing;
pub mod server;

pub use ingestion::IngestionService;
pub use processing::ProcessingService;
pub use server::ServerService;
