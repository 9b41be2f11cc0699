// ── Domain model ──
//
// Canonical types shared by stores, views and the CLI. Wire shapes live in
// `stevne_api::types`; `crate::convert` bridges the two.

pub mod discipline;
pub mod entity_id;
pub mod participant;
pub mod result;

pub use discipline::{Discipline, DisciplineDraft};
pub use entity_id::EntityId;
pub use participant::{Gender, Participant, ParticipantDraft};
pub use result::ResultEntry;
