// ── Result domain type ──
//
// Values and dates arrive as text. Numeric and calendar interpretations are
// computed on demand so the raw server text is always what gets displayed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A recorded outcome for one participant in one discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub id: EntityId,
    pub result_type: String,
    /// Calendar date as sent by the server.
    pub date: String,
    /// Numeric magnitude as sent by the server.
    pub value: String,
    pub participant_id: EntityId,
    pub discipline_id: EntityId,
}

impl ResultEntry {
    /// Parse `value` as a number. Accepts `,` as the decimal separator.
    /// Returns `None` for empty, unparseable or NaN values.
    pub fn numeric_value(&self) -> Option<f64> {
        parse_magnitude(&self.value)
    }

    /// Parse `date` as `YYYY-MM-DD`, ignoring any time-of-day suffix.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        let day = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

pub(crate) fn parse_magnitude(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str, date: &str) -> ResultEntry {
        ResultEntry {
            id: EntityId::from("r1"),
            result_type: "tid".into(),
            date: date.into(),
            value: value.into(),
            participant_id: EntityId::from("p1"),
            discipline_id: EntityId::from("d1"),
        }
    }

    #[test]
    fn numeric_value_parses_dot_and_comma() {
        assert_eq!(entry("12.5", "").numeric_value(), Some(12.5));
        assert_eq!(entry(" 7,25 ", "").numeric_value(), Some(7.25));
    }

    #[test]
    fn numeric_value_rejects_garbage_and_nan() {
        assert_eq!(entry("DNF", "").numeric_value(), None);
        assert_eq!(entry("", "").numeric_value(), None);
        assert_eq!(entry("NaN", "").numeric_value(), None);
    }

    #[test]
    fn parsed_date_accepts_date_and_datetime() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1);
        assert_eq!(entry("1", "2024-06-01").parsed_date(), expected);
        assert_eq!(entry("1", "2024-06-01T09:30:00").parsed_date(), expected);
        assert_eq!(entry("1", "1. juni").parsed_date(), None);
    }
}
