//! Text rendering for the three board states.
//!
//! Every function here is pure and returns the rendered block as a
//! `String`, so the commands decide when to print and the tests never
//! need a terminal.

use rsvp_core::{ConfirmationStatus, ResponseRecord, StatsSummary, format_timestamp};

const FALLBACK_NAME: &str = "Nome não informado";
const FALLBACK_COMPANION: &str = "Sozinho(a)";
const FALLBACK_CHILDREN: &str = "Nenhuma";

#[must_use]
pub fn render_loading() -> String {
    "⏳ Carregando confirmações...".to_string()
}

#[must_use]
pub fn render_error(message: &str) -> String {
    format!("❌ {message}")
}

/// Render the loaded board: header, stats tiles, and the filtered card
/// list (or the matching empty-state message).
#[must_use]
pub fn render_board(stats: &StatsSummary, filtered: &[&ResponseRecord], term: &str) -> String {
    let mut out = String::new();

    out.push_str("🎉 Aniversário da Stella\n");
    out.push_str("Confirmações de presença\n\n");
    out.push_str(&render_stats(stats));
    out.push('\n');

    out.push_str("Lista de Confirmações");
    if !term.is_empty() {
        out.push_str(&format!(" (busca: \"{term}\")"));
    }
    out.push('\n');

    if filtered.is_empty() {
        out.push_str("\nNenhuma confirmação encontrada\n");
        if term.is_empty() {
            out.push_str("Ainda não há confirmações registradas.\n");
        } else {
            out.push_str("Tente outro termo de busca.\n");
        }
    } else {
        for record in filtered {
            out.push('\n');
            out.push_str(&render_card(record));
        }
    }

    out
}

fn render_stats(stats: &StatsSummary) -> String {
    format!(
        "  👥 Total de Respostas      {}\n  ✅ Confirmaram Presença    {}\n  👶 Vêm com Crianças        {}\n  👥 Total de Pessoas        {}\n",
        stats.total_responses, stats.confirmed_presence, stats.with_children, stats.total_people
    )
}

fn render_card(record: &ResponseRecord) -> String {
    let name = record.name.as_deref().unwrap_or(FALLBACK_NAME);
    let date = record
        .submitted_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default();

    let mut out = if date.is_empty() {
        format!("── {name}\n")
    } else {
        format!("── {name}  ({date})\n")
    };

    // No confirmation answer means no badge at all.
    if let Some(answer) = record.confirmation.as_deref() {
        let status = ConfirmationStatus::classify(answer);
        out.push_str(&format!("   Confirmação:  {}\n", status.label()));
    }

    out.push_str(&format!(
        "   Acompanhante: {}\n",
        record.companion.as_deref().unwrap_or(FALLBACK_COMPANION)
    ));
    out.push_str(&format!(
        "   Crianças:     {}\n",
        record.children.as_deref().unwrap_or(FALLBACK_CHILDREN)
    ));

    out
}
