// ── Participant domain types ──

use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::entity_id::EntityId;
use crate::error::CoreError;

/// Competitor gender. Wire values are the server's Danish labels; English
/// names are accepted when parsing user input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    #[serde(rename = "mand")]
    #[strum(serialize = "mand", serialize = "male", serialize = "m")]
    Male,
    #[serde(rename = "kvinde")]
    #[strum(serialize = "kvinde", serialize = "female", serialize = "f")]
    Female,
    #[serde(rename = "anden")]
    #[strum(serialize = "anden", serialize = "other", serialize = "andet")]
    Other,
}

impl Gender {
    /// Value sent in the `kon` field.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Male => "mand",
            Self::Female => "kvinde",
            Self::Other => "anden",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A competitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: EntityId,
    pub name: String,
    /// `None` when the server holds an empty or unrecognized value.
    pub gender: Option<Gender>,
    /// `kon` exactly as the server sent it.
    #[serde(skip)]
    pub raw_gender: String,
    pub age: u32,
    pub club: String,
}

// ── Draft ────────────────────────────────────────────────────────────

/// Editable participant record held by the form controller.
///
/// `age` and `gender` stay unset until the user fills them in, mirroring
/// an empty input widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantDraft {
    pub id: EntityId,
    pub name: String,
    pub gender: Option<Gender>,
    /// Server value sent back when `gender` is unset, so an edit that
    /// leaves the gender alone does not erase a value we cannot parse.
    pub raw_gender: String,
    pub age: Option<u32>,
    pub club: String,
}

impl ParticipantDraft {
    pub fn from_participant(p: &Participant) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            gender: p.gender,
            raw_gender: p.raw_gender.clone(),
            age: Some(p.age),
            club: p.club.clone(),
        }
    }

    /// Value for the `kon` field: the chosen gender, else whatever the
    /// server last held.
    pub fn wire_gender(&self) -> String {
        self.gender
            .map_or_else(|| self.raw_gender.clone(), |g| g.as_wire().to_owned())
    }

    /// Merge one field by name. Accepts wire names and English names.
    ///
    /// Values the input widgets would refuse (a non-numeric age, an unknown
    /// gender) are rejected and leave the draft unchanged.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        match name {
            "id" => self.id = EntityId::from(value),
            "navn" | "name" => value.clone_into(&mut self.name),
            "kon" | "gender" => {
                self.gender = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|_| CoreError::ValidationFailed {
                        message: format!(
                            "unknown gender '{value}' (expected mand, kvinde or anden)"
                        ),
                    })?)
                };
                self.raw_gender.clear();
            }
            "alder" | "age" => {
                self.age = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.trim().parse().map_err(|_| CoreError::ValidationFailed {
                        message: format!("age must be a non-negative whole number, got '{value}'"),
                    })?)
                };
            }
            "klub" | "club" => value.clone_into(&mut self.club),
            other => {
                return Err(CoreError::ValidationFailed {
                    message: format!("participant has no field '{other}'"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn gender_parses_wire_and_english_names() {
        assert_eq!("kvinde".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("MAND".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("other".parse::<Gender>().unwrap(), Gender::Other);
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_displays_wire_value() {
        assert_eq!(Gender::Female.to_string(), "kvinde");
        assert_eq!(Gender::Other.as_wire(), "anden");
    }

    #[test]
    fn set_field_merges_by_name() {
        let mut draft = ParticipantDraft::default();
        draft.set_field("navn", "Anna").unwrap();
        draft.set_field("gender", "female").unwrap();
        draft.set_field("alder", "24").unwrap();
        draft.set_field("club", "IF").unwrap();

        assert_eq!(draft.name, "Anna");
        assert_eq!(draft.gender, Some(Gender::Female));
        assert_eq!(draft.age, Some(24));
        assert_eq!(draft.club, "IF");
        assert!(draft.id.is_empty());
    }

    #[test]
    fn set_field_rejects_bad_age_and_keeps_previous_value() {
        let mut draft = ParticipantDraft {
            age: Some(30),
            ..ParticipantDraft::default()
        };
        assert!(draft.set_field("age", "-4").is_err());
        assert!(draft.set_field("age", "old").is_err());
        assert_eq!(draft.age, Some(30));
    }

    #[test]
    fn set_field_rejects_unknown_field() {
        let mut draft = ParticipantDraft::default();
        let err = draft.set_field("shoe_size", "44").unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { .. }));
    }

    #[test]
    fn draft_from_participant_copies_every_field() {
        let p = Participant {
            id: EntityId::from("1"),
            name: "Anna".into(),
            gender: Some(Gender::Female),
            raw_gender: "kvinde".into(),
            age: 24,
            club: "IF".into(),
        };
        let draft = ParticipantDraft::from_participant(&p);
        assert_eq!(draft.id, p.id);
        assert_eq!(draft.age, Some(24));
        assert_eq!(draft.gender, Some(Gender::Female));
        assert_eq!(draft.raw_gender, "kvinde");
    }

    #[test]
    fn unparsed_server_gender_survives_until_edited() {
        let mut draft = ParticipantDraft {
            raw_gender: "dame".into(),
            ..ParticipantDraft::default()
        };
        draft.set_field("alder", "30").unwrap();
        assert_eq!(draft.wire_gender(), "dame");

        draft.set_field("kon", "mand").unwrap();
        assert_eq!(draft.wire_gender(), "mand");
        assert!(draft.raw_gender.is_empty());
    }
}
