#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;
mod state;
mod view;

use command::{
    BoardInput, BoardStrategy, CommandStrategy, InitStrategy, ShowInput, ShowStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "rsvpboard")]
#[command(about = "RSVP confirmations dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Board {
        /// Initial search term
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Fetch and print the dashboard once
    Show {
        /// Filter the card list by name
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Board { search } => BoardStrategy.execute(BoardInput { search }).await,
        Commands::Show { search } => ShowStrategy.execute(ShowInput { search }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
