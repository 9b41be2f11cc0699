// Wire types for the roster API.
//
// Field names are the server's (`navn`, `kon`, `alder`, ...). Identities are
// strings on the wire, but some backends serialize numeric keys, so every id
// field accepts both and normalizes to `String`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Lenient scalar helpers ───────────────────────────────────────────

/// Render a scalar JSON value as text. `null` and missing become `""`.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserialize a string-or-number field into a `String`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value)
        .ok_or_else(|| serde::de::Error::custom("expected a string or number"))
}

/// Deserialize a list whose items may be strings or numbers.
fn string_or_number_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Value>>::deserialize(deserializer)?;
    value
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            scalar_to_string(item)
                .ok_or_else(|| serde::de::Error::custom("expected a string or number id"))
        })
        .collect()
}

/// `24.0` → `24`; fractional, negative or out-of-range values are rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::as_conversions)]
fn whole_number(v: f64) -> Option<u64> {
    (v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v)).then(|| v as u64)
}

/// Deserialize an age that may arrive as a number or a numeric string.
fn lenient_age<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(whole_number))
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid age: {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid age: {s:?}"))),
        Value::Null => Ok(0),
        other => Err(serde::de::Error::custom(format!("invalid age: {other}"))),
    }
}

// ── Participant (`/api/deltager`) ────────────────────────────────────

/// A participant as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParticipantResponse {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "navn", default)]
    pub name: String,
    #[serde(rename = "kon", default)]
    pub gender: String,
    #[serde(rename = "alder", default, deserialize_with = "lenient_age")]
    pub age: u32,
    #[serde(rename = "klub", default)]
    pub club: String,
}

/// `POST /api/deltager` body. Carries the (usually empty) identity; the
/// server ignores it and assigns its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantCreateRequest {
    pub id: String,
    #[serde(rename = "navn")]
    pub name: String,
    #[serde(rename = "kon")]
    pub gender: String,
    #[serde(rename = "alder")]
    pub age: u32,
    #[serde(rename = "klub")]
    pub club: String,
}

/// `PUT /api/deltager/{id}` body: every field except the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantUpdateRequest {
    #[serde(rename = "navn")]
    pub name: String,
    #[serde(rename = "kon")]
    pub gender: String,
    #[serde(rename = "alder")]
    pub age: u32,
    #[serde(rename = "klub")]
    pub club: String,
}

// ── Discipline (`/api/disciplin`) ────────────────────────────────────

/// A discipline as returned by the server, including its roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisciplineResponse {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "navn", default)]
    pub name: String,
    #[serde(rename = "resultattype", default)]
    pub result_type: String,
    #[serde(
        rename = "deltagerIds",
        default,
        deserialize_with = "string_or_number_list"
    )]
    pub participant_ids: Vec<String>,
}

/// `POST /api/disciplin` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisciplineCreateRequest {
    #[serde(rename = "navn")]
    pub name: String,
    #[serde(rename = "resultattype")]
    pub result_type: String,
}

// ── Result (`/api/resultater`) ───────────────────────────────────────

/// A recorded result. Read-only for this client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultResponse {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "resultattype", default)]
    pub result_type: String,
    #[serde(rename = "dato", default, deserialize_with = "string_or_number")]
    pub date: String,
    #[serde(rename = "resultatvaerdi", default, deserialize_with = "string_or_number")]
    pub value: String,
    #[serde(rename = "deltagerId", default, deserialize_with = "string_or_number")]
    pub participant_id: String,
    #[serde(rename = "disciplinId", default, deserialize_with = "string_or_number")]
    pub discipline_id: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn participant_accepts_numeric_id_and_string_age() {
        let p: ParticipantResponse = serde_json::from_value(json!({
            "id": 12,
            "navn": "Anna",
            "kon": "kvinde",
            "alder": "24",
            "klub": "IF"
        }))
        .unwrap();
        assert_eq!(p.id, "12");
        assert_eq!(p.age, 24);
        assert_eq!(p.gender, "kvinde");
    }

    #[test]
    fn participant_accepts_whole_float_age_only() {
        let p: ParticipantResponse =
            serde_json::from_value(json!({"id": "1", "navn": "Anna", "alder": 24.0})).unwrap();
        assert_eq!(p.age, 24);

        let fractional: Result<ParticipantResponse, _> =
            serde_json::from_value(json!({"id": "1", "navn": "Anna", "alder": 24.5}));
        assert!(fractional.is_err());
    }

    #[test]
    fn participant_rejects_negative_age() {
        let result: Result<ParticipantResponse, _> = serde_json::from_value(json!({
            "id": "1",
            "navn": "Anna",
            "alder": -3
        }));
        assert!(result.is_err());
    }

    #[test]
    fn update_request_omits_identity() {
        let body = serde_json::to_value(ParticipantUpdateRequest {
            name: "Anna".into(),
            gender: "kvinde".into(),
            age: 25,
            club: "IF".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"navn": "Anna", "kon": "kvinde", "alder": 25, "klub": "IF"})
        );
    }

    #[test]
    fn create_request_keeps_empty_identity() {
        let body = serde_json::to_value(ParticipantCreateRequest {
            id: String::new(),
            name: "Bo".into(),
            gender: "mand".into(),
            age: 30,
            club: "AK".into(),
        })
        .unwrap();
        assert_eq!(body["id"], json!(""));
        assert_eq!(body["navn"], json!("Bo"));
    }

    #[test]
    fn discipline_roster_defaults_to_empty() {
        let d: DisciplineResponse = serde_json::from_value(json!({
            "id": "d1",
            "navn": "100m",
            "resultattype": "tid"
        }))
        .unwrap();
        assert!(d.participant_ids.is_empty());

        let d: DisciplineResponse = serde_json::from_value(json!({
            "id": "d2",
            "navn": "Længdespring",
            "resultattype": "afstand",
            "deltagerIds": ["p1", 2]
        }))
        .unwrap();
        assert_eq!(d.participant_ids, vec!["p1".to_owned(), "2".to_owned()]);
    }

    #[test]
    fn result_value_may_be_numeric_on_the_wire() {
        let r: ResultResponse = serde_json::from_value(json!({
            "id": "r1",
            "resultattype": "tid",
            "dato": "2024-05-01",
            "resultatvaerdi": 12.5,
            "deltagerId": "p1",
            "disciplinId": "d1"
        }))
        .unwrap();
        assert_eq!(r.value, "12.5");
        assert_eq!(r.participant_id, "p1");
    }
}
