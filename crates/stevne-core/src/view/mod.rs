// ── Derived views ──
//
// Filtered, searched and sorted projections of a canonical collection.
// The projection is a pure function of its inputs; the canonical copy is
// never reordered or trimmed.

mod filter;
mod projector;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use strum::{Display, EnumString};

use crate::entity::Entity;
use crate::model::{Discipline, Participant, ResultEntry};

pub use filter::{DisciplineFilter, ParticipantFilter, ResultFilter};
pub use projector::ViewProjector;

// ── Sorting ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    #[strum(serialize = "asc", serialize = "ascending")]
    Ascending,
    #[strum(serialize = "desc", serialize = "descending")]
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A sortable key extracted from one element.
///
/// Missing numbers and dates (unparseable text) sort after every present
/// value in both directions, keeping their relative order.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(Option<f64>),
    Date(Option<NaiveDate>),
    /// Compared case-insensitively.
    Text(String),
}

impl SortValue {
    pub fn text(raw: &str) -> Self {
        Self::Text(raw.to_lowercase())
    }

    fn compare(&self, other: &Self, direction: SortDirection) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => {
                compare_present_first(a.as_ref(), b.as_ref(), direction, f64::total_cmp)
            }
            (Self::Date(a), Self::Date(b)) => {
                compare_present_first(a.as_ref(), b.as_ref(), direction, Ord::cmp)
            }
            (Self::Text(a), Self::Text(b)) => direction.apply(a.cmp(b)),
            _ => Ordering::Equal,
        }
    }
}

fn compare_present_first<T>(
    a: Option<&T>,
    b: Option<&T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(cmp(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Active sort: which key, which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<K> {
    pub key: K,
    pub direction: SortDirection,
}

// ── Projectable kinds ────────────────────────────────────────────────

/// An entity kind that supports derived views.
pub trait Projectable: Entity {
    /// Equality predicate on one categorical field.
    type Filter: Clone + fmt::Debug + Send + Sync;
    /// Sortable fields.
    type SortKey: Copy + fmt::Debug + Send + Sync;

    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Text the search term is matched against.
    fn search_text(&self) -> &str;

    fn sort_value(&self, key: Self::SortKey) -> SortValue;
}

/// Inputs of a projection besides the canonical collection.
#[derive(Debug, Clone)]
pub struct ViewParams<T: Projectable> {
    pub filter: Option<T::Filter>,
    pub search: String,
    pub sort: Option<Sort<T::SortKey>>,
}

impl<T: Projectable> Default for ViewParams<T> {
    fn default() -> Self {
        Self {
            filter: None,
            search: String::new(),
            sort: None,
        }
    }
}

impl<T: Projectable> ViewParams<T> {
    /// `true` when the projection is the canonical collection unchanged.
    pub fn is_identity(&self) -> bool {
        self.filter.is_none() && self.search.is_empty() && self.sort.is_none()
    }
}

/// Project `canonical` through filter, then search, then a stable sort.
pub fn project<T: Projectable>(canonical: &[Arc<T>], params: &ViewParams<T>) -> Vec<Arc<T>> {
    let needle = params.search.to_lowercase();

    let selected = canonical
        .iter()
        .filter(|e| params.filter.as_ref().is_none_or(|f| e.matches(f)))
        .filter(|e| needle.is_empty() || e.search_text().to_lowercase().contains(&needle));

    let Some(sort) = params.sort else {
        return selected.cloned().collect();
    };

    let mut keyed: Vec<(SortValue, Arc<T>)> = selected
        .map(|e| (e.sort_value(sort.key), Arc::clone(e)))
        .collect();
    // `sort_by` is stable: equal keys keep canonical order.
    keyed.sort_by(|(a, _), (b, _)| a.compare(b, sort.direction));
    keyed.into_iter().map(|(_, e)| e).collect()
}

// ── Per-kind projections ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ParticipantSortKey {
    Name,
    Age,
    Club,
}

impl Projectable for Participant {
    type Filter = ParticipantFilter;
    type SortKey = ParticipantSortKey;

    fn matches(&self, filter: &ParticipantFilter) -> bool {
        filter.matches(self)
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn sort_value(&self, key: ParticipantSortKey) -> SortValue {
        match key {
            ParticipantSortKey::Name => SortValue::text(&self.name),
            ParticipantSortKey::Age => SortValue::Number(Some(f64::from(self.age))),
            ParticipantSortKey::Club => SortValue::text(&self.club),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DisciplineSortKey {
    Name,
    ResultType,
}

impl Projectable for Discipline {
    type Filter = DisciplineFilter;
    type SortKey = DisciplineSortKey;

    fn matches(&self, filter: &DisciplineFilter) -> bool {
        filter.matches(self)
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn sort_value(&self, key: DisciplineSortKey) -> SortValue {
        match key {
            DisciplineSortKey::Name => SortValue::text(&self.name),
            DisciplineSortKey::ResultType => SortValue::text(&self.result_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ResultSortKey {
    /// Numeric magnitude of the result value.
    Value,
    Date,
}

impl Projectable for ResultEntry {
    type Filter = ResultFilter;
    type SortKey = ResultSortKey;

    fn matches(&self, filter: &ResultFilter) -> bool {
        filter.matches(self)
    }

    fn search_text(&self) -> &str {
        &self.value
    }

    fn sort_value(&self, key: ResultSortKey) -> SortValue {
        match key {
            ResultSortKey::Value => SortValue::Number(self.numeric_value()),
            ResultSortKey::Date => SortValue::Date(self.parsed_date()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityId, Gender};
    use pretty_assertions::assert_eq;

    fn participant(id: &str, name: &str, gender: Gender, age: u32, club: &str) -> Arc<Participant> {
        Arc::new(Participant {
            id: EntityId::from(id),
            name: name.into(),
            gender: Some(gender),
            raw_gender: String::new(),
            age,
            club: club.into(),
        })
    }

    fn result(id: &str, value: &str) -> Arc<ResultEntry> {
        Arc::new(ResultEntry {
            id: EntityId::from(id),
            result_type: "tid".into(),
            date: "2024-06-01".into(),
            value: value.into(),
            participant_id: EntityId::from("p1"),
            discipline_id: EntityId::from("d1"),
        })
    }

    fn roster() -> Vec<Arc<Participant>> {
        vec![
            participant("1", "Anna", Gender::Female, 24, "IF"),
            participant("2", "Bo", Gender::Male, 31, "AK"),
            participant("3", "Hanne", Gender::Female, 19, "AK"),
            participant("4", "Jonas", Gender::Male, 24, "IF"),
            participant("5", "Maren", Gender::Female, 40, "KIF"),
        ]
    }

    fn ids<T: Entity>(items: &[Arc<T>]) -> Vec<String> {
        items.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn identity_params_return_canonical_order() {
        let canonical = roster();
        let params = ViewParams::<Participant>::default();
        assert!(params.is_identity());
        assert_eq!(ids(&project(&canonical, &params)), ids(&canonical));
    }

    #[test]
    fn filter_applies_before_search() {
        let canonical = roster();
        let params = ViewParams::<Participant> {
            filter: Some(ParticipantFilter::ByGender(Gender::Female)),
            search: "AN".into(),
            sort: None,
        };
        // "Jonas" matches the search but not the filter.
        assert_eq!(ids(&project(&canonical, &params)), vec!["1", "3"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let canonical = roster();
        let params = ViewParams::<Participant> {
            search: "ar".into(),
            ..ViewParams::default()
        };
        assert_eq!(ids(&project(&canonical, &params)), vec!["5"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let canonical = roster();
        let params = ViewParams::<Participant> {
            sort: Some(Sort {
                key: ParticipantSortKey::Age,
                direction: SortDirection::Ascending,
            }),
            ..ViewParams::default()
        };
        // Anna (1) and Jonas (4) are both 24; canonical order is kept.
        assert_eq!(ids(&project(&canonical, &params)), vec!["3", "1", "4", "2", "5"]);
    }

    #[test]
    fn ascending_then_descending_reverses_distinct_keys() {
        let canonical = roster();
        let mut params = ViewParams::<Participant> {
            sort: Some(Sort {
                key: ParticipantSortKey::Name,
                direction: SortDirection::Ascending,
            }),
            ..ViewParams::default()
        };
        let asc = ids(&project(&canonical, &params));
        params.sort = Some(Sort {
            key: ParticipantSortKey::Name,
            direction: SortDirection::Descending,
        });
        let mut desc = ids(&project(&canonical, &params));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn text_sort_ignores_case() {
        let canonical = vec![
            participant("1", "bo", Gender::Male, 1, ""),
            participant("2", "Anna", Gender::Female, 1, ""),
            participant("3", "Carl", Gender::Male, 1, ""),
        ];
        let params = ViewParams::<Participant> {
            sort: Some(Sort {
                key: ParticipantSortKey::Name,
                direction: SortDirection::Ascending,
            }),
            ..ViewParams::default()
        };
        assert_eq!(ids(&project(&canonical, &params)), vec!["2", "1", "3"]);
    }

    #[test]
    fn unparseable_values_sort_last_in_both_directions() {
        let canonical = vec![
            result("a", "DNF"),
            result("b", "12.5"),
            result("c", "10,1"),
            result("d", ""),
            result("e", "11"),
        ];
        let mut params = ViewParams::<ResultEntry> {
            sort: Some(Sort {
                key: ResultSortKey::Value,
                direction: SortDirection::Ascending,
            }),
            ..ViewParams::default()
        };
        assert_eq!(ids(&project(&canonical, &params)), vec!["c", "e", "b", "a", "d"]);

        params.sort = Some(Sort {
            key: ResultSortKey::Value,
            direction: SortDirection::Descending,
        });
        assert_eq!(ids(&project(&canonical, &params)), vec!["b", "e", "c", "a", "d"]);
    }

    #[test]
    fn projection_never_mutates_canonical() {
        let canonical = roster();
        let before = ids(&canonical);
        let params = ViewParams::<Participant> {
            filter: Some(ParticipantFilter::ByClub("AK".into())),
            search: "o".into(),
            sort: Some(Sort {
                key: ParticipantSortKey::Age,
                direction: SortDirection::Descending,
            }),
        };
        let view = project(&canonical, &params);
        assert_eq!(ids(&view), vec!["2"]);
        assert_eq!(ids(&canonical), before);
    }

    #[test]
    fn sort_keys_parse_from_cli_text() {
        assert_eq!("value".parse::<ResultSortKey>().ok(), Some(ResultSortKey::Value));
        assert_eq!(
            "result-type".parse::<DisciplineSortKey>().ok(),
            Some(DisciplineSortKey::ResultType)
        );
        assert_eq!("desc".parse::<SortDirection>().ok(), Some(SortDirection::Descending));
    }
}
