//! One-shot dashboard command (non-interactive mode).

use rsvp_core::filter_responses;

use crate::state::BoardState;
use crate::view;

/// Input parameters for the Show command strategy.
#[derive(Debug, Clone)]
pub struct ShowInput {
    /// Optional filter term applied to the card list
    pub search: Option<String>,
}

/// Strategy for executing the Show command: fetch once, print, exit.
#[derive(Debug, Clone, Copy)]
pub struct ShowStrategy;

impl super::CommandStrategy for ShowStrategy {
    type Input = ShowInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let client = super::init_client()?;
        let term = input.search.unwrap_or_default();

        let mut state = BoardState::Loading;
        println!("{}", view::render_loading());
        state.refresh(&client).await;

        match &state {
            // refresh settles in loaded or error before returning.
            BoardState::Loading => {}
            BoardState::Error(message) => {
                println!("{}", view::render_error(message));
                println!("Tente novamente mais tarde.");
            }
            BoardState::Loaded { responses, stats } => {
                let filtered = filter_responses(responses, &term);
                println!("\n{}", view::render_board(stats, &filtered, &term));
            }
        }

        Ok(())
    }
}
