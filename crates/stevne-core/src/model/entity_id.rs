// ── Core identity type ──
//
// Identities are opaque server-assigned strings. An empty identity marks a
// record the server has not seen yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical identifier for any roster entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The "not yet assigned" identity.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// `true` until the server has assigned an identity.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(EntityId::default().is_empty());
        assert!(EntityId::empty().is_empty());
        assert!(!EntityId::from("1").is_empty());
    }

    #[test]
    fn entity_id_from_str() {
        let id: EntityId = "p-17".parse().unwrap();
        assert_eq!(id.as_str(), "p-17");
        assert_eq!(id.to_string(), "p-17");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&EntityId::from("d7")).unwrap();
        assert_eq!(json, "\"d7\"");
    }
}
