//! Client-side data layer for the athletics-meet roster API.
//!
//! Sits between `stevne-api` and the `stevne` CLI:
//!
//! - **[`EntityStore<E>`]** keeps the canonical, ordered mirror of one
//!   remote collection. Writes touch it only after the server confirms, and
//!   every change is published through a `tokio::sync::watch` channel.
//!
//! - **[`ViewProjector<E>`]** subscribes to a store and recomputes a
//!   filtered, searched and sorted view whenever the canonical collection or
//!   a view parameter changes. [`reset()`](ViewProjector::reset) returns to
//!   the canonical order without refetching.
//!
//! - **[`relation`]** resolves result foreign keys to display names, with a
//!   fallback label for records that are not (or no longer) present.
//!
//! - **[`RosterEditor`]** batches participant ids and adds them to a
//!   discipline's roster in one request.
//!
//! - **[`FormController`]** owns one draft and routes submit to create or
//!   update based on whether the draft carries an identity.
//!
//! - **[`Meet`]** wires one [`ApiClient`](stevne_api::ApiClient) to the three
//!   stores and hands out the pieces above.

pub mod config;
pub mod convert;
pub mod entity;
pub mod error;
pub mod form;
pub mod meet;
pub mod model;
pub mod relation;
pub mod roster;
pub mod store;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_API_URL, MeetConfig, TlsVerification};
pub use entity::{Creatable, Deletable, Draft, Entity, Updatable};
pub use error::CoreError;
pub use form::{FormController, FormMode};
pub use meet::Meet;
pub use relation::{JoinedResult, RelationIndex, UNKNOWN_DISCIPLINE, UNKNOWN_PARTICIPANT};
pub use roster::RosterEditor;
pub use store::{EntityStore, Snapshot};
pub use stream::EntityStream;
pub use view::{
    DisciplineFilter, DisciplineSortKey, ParticipantFilter, ParticipantSortKey, Projectable,
    ResultFilter, ResultSortKey, Sort, SortDirection, SortValue, ViewParams, ViewProjector,
};

pub use model::{
    Discipline, DisciplineDraft, EntityId, Gender, Participant, ParticipantDraft, ResultEntry,
};
