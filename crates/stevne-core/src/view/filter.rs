// ── Filter predicates for derived views ──
//
// One equality predicate on one categorical field per kind.

use crate::model::{Discipline, EntityId, Gender, Participant, ResultEntry};

/// Filter predicate for the participant view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantFilter {
    All,
    ByGender(Gender),
    ByClub(String),
}

impl ParticipantFilter {
    pub fn matches(&self, participant: &Participant) -> bool {
        match self {
            Self::All => true,
            Self::ByGender(g) => participant.gender == Some(*g),
            Self::ByClub(club) => participant.club == *club,
        }
    }
}

/// Filter predicate for the discipline view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisciplineFilter {
    All,
    ByResultType(String),
}

impl DisciplineFilter {
    pub fn matches(&self, discipline: &Discipline) -> bool {
        match self {
            Self::All => true,
            Self::ByResultType(rt) => discipline.result_type == *rt,
        }
    }
}

/// Filter predicate for the result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultFilter {
    All,
    ByParticipant(EntityId),
    ByDiscipline(EntityId),
    ByResultType(String),
}

impl ResultFilter {
    pub fn matches(&self, result: &ResultEntry) -> bool {
        match self {
            Self::All => true,
            Self::ByParticipant(pid) => result.participant_id == *pid,
            Self::ByDiscipline(did) => result.discipline_id == *did,
            Self::ByResultType(rt) => result.result_type == *rt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> Participant {
        Participant {
            id: EntityId::from("1"),
            name: "Anna".into(),
            gender: Some(Gender::Female),
            raw_gender: String::new(),
            age: 24,
            club: "IF".into(),
        }
    }

    #[test]
    fn gender_filter_compares_parsed_gender() {
        let p = anna();
        assert!(ParticipantFilter::ByGender(Gender::Female).matches(&p));
        assert!(!ParticipantFilter::ByGender(Gender::Male).matches(&p));
        assert!(ParticipantFilter::All.matches(&p));
    }

    #[test]
    fn unknown_gender_matches_no_gender_filter() {
        let p = Participant {
            gender: None,
            raw_gender: "x".into(),
            ..anna()
        };
        assert!(!ParticipantFilter::ByGender(Gender::Other).matches(&p));
        assert!(ParticipantFilter::All.matches(&p));
    }

    #[test]
    fn club_filter_is_exact() {
        let p = anna();
        assert!(ParticipantFilter::ByClub("IF".into()).matches(&p));
        assert!(!ParticipantFilter::ByClub("KIF".into()).matches(&p));
    }

    #[test]
    fn result_filter_by_foreign_key() {
        let r = ResultEntry {
            id: EntityId::from("r1"),
            result_type: "tid".into(),
            date: "2024-06-01".into(),
            value: "11.92".into(),
            participant_id: EntityId::from("1"),
            discipline_id: EntityId::from("d1"),
        };
        assert!(ResultFilter::ByParticipant(EntityId::from("1")).matches(&r));
        assert!(ResultFilter::ByDiscipline(EntityId::from("d1")).matches(&r));
        assert!(!ResultFilter::ByDiscipline(EntityId::from("d2")).matches(&r));
        assert!(ResultFilter::ByResultType("tid".into()).matches(&r));
    }
}
