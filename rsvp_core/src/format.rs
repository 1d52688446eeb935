//! Display formatting for timestamps and confirmation answers.
//!
//! Both functions are pure and total: bad input degrades to fallback
//! output, never to an error the view would have to handle.

use chrono::{DateTime, NaiveDateTime};

/// Accepted input layouts beyond RFC 3339. The form export writes the
/// first one; the second shows up in manually edited sheets.
const NAIVE_FORMATS: [&str; 2] = ["%d/%m/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Display layout: day/month/year hour:minute, pt-BR convention.
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Format a raw timestamp string for display.
///
/// Tries RFC 3339 first, then the known naive layouts. On any parse
/// failure the input is returned unchanged, so formatting is idempotent
/// on already-unparseable strings.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }

    for layout in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, layout) {
            return parsed.format(DISPLAY_FORMAT).to_string();
        }
    }

    raw.to_string()
}

/// Binary classification of the free-text confirmation answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Confirmed,
    Declined,
}

impl ConfirmationStatus {
    /// Classify a confirmation answer.
    ///
    /// Confirmed iff the text contains the affirmative token "sim",
    /// case-insensitively. Callers with no answer at all render no
    /// status; this only decides between yes and no.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.to_lowercase().contains("sim") {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }

    /// Display label for the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmado",
            Self::Declined => "Não confirmado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_timestamp("2025-07-12T18:30:00Z"), "12/07/2025 18:30");
        assert_eq!(
            format_timestamp("2025-01-03T09:05:00-03:00"),
            "03/01/2025 09:05"
        );
    }

    #[test]
    fn formats_form_export_timestamps() {
        assert_eq!(
            format_timestamp("12/07/2025 18:30:45"),
            "12/07/2025 18:30"
        );
        assert_eq!(
            format_timestamp("2025-07-12 18:30:45"),
            "12/07/2025 18:30"
        );
    }

    #[test]
    fn unparseable_input_is_returned_unchanged() {
        assert_eq!(format_timestamp("amanhã de tarde"), "amanhã de tarde");
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("2025-99-99"), "2025-99-99");
    }

    #[test]
    fn formatting_is_idempotent_on_bad_input() {
        let once = format_timestamp("not a date");
        let twice = format_timestamp(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn affirmative_answers_classify_as_confirmed() {
        assert_eq!(
            ConfirmationStatus::classify("Sim, com certeza"),
            ConfirmationStatus::Confirmed
        );
        assert_eq!(
            ConfirmationStatus::classify("SIM!"),
            ConfirmationStatus::Confirmed
        );
    }

    #[test]
    fn negative_answers_classify_as_declined() {
        assert_eq!(
            ConfirmationStatus::classify("Não posso"),
            ConfirmationStatus::Declined
        );
        assert_eq!(
            ConfirmationStatus::classify(""),
            ConfirmationStatus::Declined
        );
    }

    #[test]
    fn labels_match_the_badge_text() {
        assert_eq!(ConfirmationStatus::Confirmed.label(), "Confirmado");
        assert_eq!(ConfirmationStatus::Declined.label(), "Não confirmado");
    }
}
