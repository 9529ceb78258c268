use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "scoutbase talent-platform backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Load a JSON data export into the local database
    Ingest {
        /// Directory holding the export files
        #[arg(short, long, default_value = "export")]
        dir: String,
    },
    /// Recompute the leaderboard and apply level unlocks
    Process,
}
