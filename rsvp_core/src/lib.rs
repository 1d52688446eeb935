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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod filter;
pub mod format;

pub use filter::filter_responses;
pub use format::{ConfirmationStatus, format_timestamp};

/// One RSVP submission as collected by the upstream form.
///
/// The wire format keys the fields by the original Portuguese form
/// questions, so the serde renames resolve them into typed options at the
/// ingestion boundary. Every field may be absent; absence is data, not an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseRecord {
    /// Submitter's full name
    #[serde(rename = "Seu nome e Sobrenome", default)]
    pub name: Option<String>,

    /// Companion's name, if any
    #[serde(rename = "Nome de quem virá com você", default)]
    pub companion: Option<String>,

    /// Free-text answer to the presence confirmation question
    #[serde(rename = "Você confirma sua presença?", default)]
    pub confirmation: Option<String>,

    /// Free-text description of accompanying children (name and age)
    #[serde(rename = "Se tiver criança, qual idade e nome?", default)]
    pub children: Option<String>,

    /// Submission timestamp as recorded by the form
    #[serde(rename = "Carimbo de data/hora", default)]
    pub submitted_at: Option<String>,
}

/// Aggregate counts computed by the upstream API.
///
/// Consumed as-is; the client never recomputes these from the response
/// list, so the two can diverge if the server is inconsistent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(default)]
    pub total_responses: u64,
    #[serde(default)]
    pub confirmed_presence: u64,
    #[serde(default)]
    pub with_children: u64,
    #[serde(default)]
    pub total_people: u64,
}

/// Wire envelope for the responses endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponsesEnvelope {
    pub responses: Vec<ResponseRecord>,
}

/// Read-only view of the RSVP API.
///
/// The board logic is generic over this trait so it can run against the
/// HTTP client in production and an in-memory double in tests.
#[async_trait]
pub trait RsvpApi: Send + Sync {
    async fn fetch_responses(&self) -> anyhow::Result<Vec<ResponseRecord>>;
    async fn fetch_stats(&self) -> anyhow::Result<StatsSummary>;

    /// Fetch both endpoints concurrently.
    ///
    /// Either failure discards both results; partial data never reaches
    /// the caller.
    async fn fetch_all(&self) -> anyhow::Result<(Vec<ResponseRecord>, StatsSummary)> {
        let (responses, stats) = tokio::try_join!(self.fetch_responses(), self.fetch_stats())?;
        Ok((responses, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_record_decodes_portuguese_form_keys() {
        let raw = r#"{
            "Seu nome e Sobrenome": "Maria Silva",
            "Nome de quem virá com você": "João Silva",
            "Você confirma sua presença?": "Sim, com certeza",
            "Se tiver criança, qual idade e nome?": "Pedro, 5 anos",
            "Carimbo de data/hora": "2025-07-12T18:30:00Z"
        }"#;

        let record: ResponseRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.name.as_deref(), Some("Maria Silva"));
        assert_eq!(record.companion.as_deref(), Some("João Silva"));
        assert_eq!(record.confirmation.as_deref(), Some("Sim, com certeza"));
        assert_eq!(record.children.as_deref(), Some("Pedro, 5 anos"));
        assert_eq!(record.submitted_at.as_deref(), Some("2025-07-12T18:30:00Z"));
    }

    #[test]
    fn response_record_missing_keys_decode_to_none() {
        let record: ResponseRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ResponseRecord::default());
    }

    #[test]
    fn stats_summary_decodes_camel_case() {
        let raw = r#"{
            "totalResponses": 12,
            "confirmedPresence": 9,
            "withChildren": 3,
            "totalPeople": 21
        }"#;

        let stats: StatsSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.total_responses, 12);
        assert_eq!(stats.confirmed_presence, 9);
        assert_eq!(stats.with_children, 3);
        assert_eq!(stats.total_people, 21);
    }

    #[test]
    fn stats_summary_defaults_missing_counts_to_zero() {
        let stats: StatsSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, StatsSummary::default());
    }

    #[test]
    fn responses_envelope_decodes_list() {
        let raw = r#"{"responses": [{"Seu nome e Sobrenome": "Ana"}, {}]}"#;
        let envelope: ResponsesEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.responses.len(), 2);
        assert_eq!(envelope.responses[0].name.as_deref(), Some("Ana"));
        assert_eq!(envelope.responses[1].name, None);
    }
}
