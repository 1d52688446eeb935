//! Interactive dashboard command.
//!
//! Fetches once on entry and then loops on stdin: typed text becomes the
//! filter term (line-oriented input stands in for per-keystroke search),
//! `r` refreshes, `q` leaves. Every fetch failure lands in the error view
//! with a retry hint; nothing here terminates the session.

use rsvp_core::{RsvpApi, filter_responses};
use std::io::Write;

use crate::state::BoardState;
use crate::view;

/// Input parameters for the Board command strategy.
#[derive(Debug, Clone)]
pub struct BoardInput {
    /// Initial search term (starts unfiltered if not provided)
    pub search: Option<String>,
}

/// Strategy for executing the interactive Board command.
#[derive(Debug, Clone, Copy)]
pub struct BoardStrategy;

impl super::CommandStrategy for BoardStrategy {
    type Input = BoardInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let client = super::init_client()?;
        run_board(&client, input.search.unwrap_or_default()).await
    }
}

/// Run the interactive loop against any API implementation.
async fn run_board<P: RsvpApi>(api: &P, mut term: String) -> anyhow::Result<()> {
    let mut state = BoardState::Loading;

    println!("{}", view::render_loading());
    state.refresh(api).await;

    loop {
        render_state(&state, &term);

        print!("\nbusca> ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "exit" | "quit" | "q" => break,
            "r" | "retry" | "refresh" => {
                println!("{}", view::render_loading());
                state.refresh(api).await;
            }
            // Anything else (including an empty line) replaces the
            // filter term; an empty term shows the full list again.
            _ => term = input.to_string(),
        }
    }

    Ok(())
}

fn render_state(state: &BoardState, term: &str) {
    match state {
        // refresh always settles before we render, so this only shows
        // if rendering ever races a future in-flight fetch.
        BoardState::Loading => println!("{}", view::render_loading()),
        BoardState::Error(message) => {
            println!("{}", view::render_error(message));
            println!("Digite 'r' para tentar novamente ou 'q' para sair.");
        }
        BoardState::Loaded { responses, stats } => {
            let filtered = filter_responses(responses, term);
            println!("\n{}", view::render_board(stats, &filtered, term));
            println!("Digite um nome para filtrar, 'r' para atualizar, 'q' para sair.");
        }
    }
}
