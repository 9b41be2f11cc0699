// ── Entity stores ──
//
// One canonical, ordered mirror per remote collection, with push-based
// change notification.

pub(crate) mod collection;
mod entity_store;

pub use collection::Snapshot;
pub use entity_store::EntityStore;
