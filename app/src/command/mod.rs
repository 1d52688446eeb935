//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main` — no trait objects, no runtime overhead.

use rsvp_client::RsvpClient;
use rsvp_config::Config;
use tracing::info;

mod board;
mod init;
mod show;
mod version;

pub use board::{BoardInput, BoardStrategy};
pub use init::InitStrategy;
pub use show::{ShowInput, ShowStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type,
/// enabling type-safe parameter passing without boxing. All calls are
/// monomorphized at compile time.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Build the API client from the resolved configuration.
///
/// Shared by the commands that talk to the server.
fn init_client() -> anyhow::Result<RsvpClient> {
    let config = Config::load()?;
    info!("Using API base address: {}", config.api.base_url);
    RsvpClient::new(&config.api)
}
