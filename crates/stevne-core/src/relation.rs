// ── Relation resolution ──
//
// Results reference participants and disciplines by identity. The referenced
// record may be absent (not loaded yet, or deleted); that resolves to a
// fallback label and is never an error.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::entity::Entity;
use crate::model::{Discipline, EntityId, Participant, ResultEntry};

pub const UNKNOWN_PARTICIPANT: &str = "unknown participant";
pub const UNKNOWN_DISCIPLINE: &str = "unknown discipline";

/// Linear scan of `target` for `foreign_id`, returning `display` of the
/// first match or `fallback`.
pub fn resolve<T: Entity>(
    foreign_id: &EntityId,
    target: &[Arc<T>],
    display: impl Fn(&T) -> &str,
    fallback: &str,
) -> String {
    target
        .iter()
        .find(|e| e.id() == foreign_id)
        .map_or_else(|| fallback.to_owned(), |e| display(e).to_owned())
}

pub fn participant_name(id: &EntityId, participants: &[Arc<Participant>]) -> String {
    resolve(id, participants, |p| &p.name, UNKNOWN_PARTICIPANT)
}

pub fn discipline_name(id: &EntityId, disciplines: &[Arc<Discipline>]) -> String {
    resolve(id, disciplines, |d| &d.name, UNKNOWN_DISCIPLINE)
}

/// Keyed lookup built once per snapshot. Same answers as [`resolve`];
/// for duplicate identities the first element wins, as with the scan.
pub struct RelationIndex<T> {
    by_id: HashMap<EntityId, Arc<T>>,
}

impl<T: Entity> RelationIndex<T> {
    pub fn new(target: &[Arc<T>]) -> Self {
        let mut by_id = HashMap::with_capacity(target.len());
        for entity in target {
            by_id
                .entry(entity.id().clone())
                .or_insert_with(|| Arc::clone(entity));
        }
        Self { by_id }
    }

    pub fn get(&self, id: &EntityId) -> Option<&Arc<T>> {
        self.by_id.get(id)
    }

    pub fn label(&self, id: &EntityId, display: impl Fn(&T) -> &str, fallback: &str) -> String {
        self.get(id)
            .map_or_else(|| fallback.to_owned(), |e| display(e).to_owned())
    }
}

impl RelationIndex<Participant> {
    pub fn participant_name(&self, id: &EntityId) -> String {
        self.label(id, |p| &p.name, UNKNOWN_PARTICIPANT)
    }
}

impl RelationIndex<Discipline> {
    pub fn discipline_name(&self, id: &EntityId) -> String {
        self.label(id, |d| &d.name, UNKNOWN_DISCIPLINE)
    }
}

/// A result row with its foreign keys resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedResult {
    pub id: EntityId,
    pub participant_id: EntityId,
    pub participant: String,
    pub discipline_id: EntityId,
    pub discipline: String,
    pub result_type: String,
    pub date: String,
    pub value: String,
}

/// Resolve every result against the current participant and discipline
/// collections, keeping the order of `results`.
pub fn join_results(
    results: &[Arc<ResultEntry>],
    participants: &[Arc<Participant>],
    disciplines: &[Arc<Discipline>],
) -> Vec<JoinedResult> {
    let participants = RelationIndex::new(participants);
    let disciplines = RelationIndex::new(disciplines);

    results
        .iter()
        .map(|r| JoinedResult {
            id: r.id.clone(),
            participant_id: r.participant_id.clone(),
            participant: participants.participant_name(&r.participant_id),
            discipline_id: r.discipline_id.clone(),
            discipline: disciplines.discipline_name(&r.discipline_id),
            result_type: r.result_type.clone(),
            date: r.date.clone(),
            value: r.value.clone(),
        })
        .collect()
}

/// Names of a discipline's roster members, in roster order. Members absent
/// from `participants` show the fallback label.
pub fn roster_names(discipline: &Discipline, participants: &[Arc<Participant>]) -> Vec<String> {
    let index = RelationIndex::new(participants);
    discipline
        .participant_ids
        .iter()
        .map(|id| index.participant_name(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use pretty_assertions::assert_eq;

    fn participant(id: &str, name: &str) -> Arc<Participant> {
        Arc::new(Participant {
            id: EntityId::from(id),
            name: name.into(),
            gender: Some(Gender::Female),
            raw_gender: String::new(),
            age: 20,
            club: "IF".into(),
        })
    }

    fn discipline(id: &str, name: &str, roster: &[&str]) -> Arc<Discipline> {
        Arc::new(Discipline {
            id: EntityId::from(id),
            name: name.into(),
            result_type: "tid".into(),
            participant_ids: roster.iter().copied().map(EntityId::from).collect(),
        })
    }

    fn result(id: &str, participant_id: &str, discipline_id: &str) -> Arc<ResultEntry> {
        Arc::new(ResultEntry {
            id: EntityId::from(id),
            result_type: "tid".into(),
            date: "2024-06-01".into(),
            value: "12.1".into(),
            participant_id: EntityId::from(participant_id),
            discipline_id: EntityId::from(discipline_id),
        })
    }

    #[test]
    fn resolve_finds_display_field() {
        let participants = vec![participant("1", "Anna"), participant("2", "Bo")];
        assert_eq!(participant_name(&EntityId::from("2"), &participants), "Bo");
    }

    #[test]
    fn absent_reference_resolves_to_fallback() {
        let participants = vec![participant("1", "Anna")];
        assert_eq!(
            participant_name(&EntityId::from("9"), &participants),
            UNKNOWN_PARTICIPANT
        );
        assert_eq!(discipline_name(&EntityId::from("d1"), &[]), UNKNOWN_DISCIPLINE);
    }

    #[test]
    fn index_agrees_with_linear_scan() {
        let participants = vec![
            participant("1", "Anna"),
            participant("2", "Bo"),
            participant("1", "Shadow"),
        ];
        let index = RelationIndex::new(&participants);
        for id in ["1", "2", "3", ""] {
            let id = EntityId::from(id);
            assert_eq!(
                index.participant_name(&id),
                participant_name(&id, &participants)
            );
        }
    }

    #[test]
    fn join_keeps_result_order_and_labels_dangling_keys() {
        let participants = vec![participant("1", "Anna")];
        let disciplines = vec![discipline("d1", "100m", &[])];
        let results = vec![result("r2", "1", "d9"), result("r1", "7", "d1")];

        let joined = join_results(&results, &participants, &disciplines);

        let rows: Vec<(&str, &str, &str)> = joined
            .iter()
            .map(|j| (j.id.as_str(), j.participant.as_str(), j.discipline.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("r2", "Anna", UNKNOWN_DISCIPLINE),
                ("r1", UNKNOWN_PARTICIPANT, "100m"),
            ]
        );
    }

    #[test]
    fn roster_names_follow_roster_order() {
        let participants = vec![participant("p1", "Anna"), participant("p3", "Carl")];
        let d = discipline("d7", "Spyd", &["p3", "p2", "p1"]);
        assert_eq!(
            roster_names(&d, &participants),
            vec!["Carl", UNKNOWN_PARTICIPANT, "Anna"]
        );
    }
}
