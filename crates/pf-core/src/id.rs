//! Interned identifiers for drop-target containers.
//!
//! Container lookup runs on every pointer move during a drag, so names are
//! interned once into a process-wide table and compared as small indices
//! afterwards. Ids are `Copy`; equality and hashing never touch the string.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

static IDS: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Identifier of a registered container, e.g. `band_content` or a nested
/// frame's id supplied by the embedding application.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(Spur);

impl ContainerId {
    /// Id for `name`, interning it on first use.
    pub fn intern(name: &str) -> Self {
        Self(IDS.get_or_intern(name))
    }

    pub fn as_str(&self) -> &str {
        IDS.resolve(&self.0)
    }
}

// Ids print as `#name`, matching how containers are addressed in logs.
impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Debug for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// On the wire an id is just its name; the interner is a process-local
// detail that must not leak into serialized requests.
impl Serialize for ContainerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContainerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name: Cow<'de, str> = Deserialize::deserialize(deserializer)?;
        Ok(Self::intern(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_yields_the_same_id() {
        let a = ContainerId::intern("band_content");
        let b = ContainerId::intern("band_content");
        assert_eq!(a, b);
        assert_ne!(a, ContainerId::intern("band_header"));
        assert_eq!(b.as_str(), "band_content");
    }

    #[test]
    fn prints_with_a_hash_prefix() {
        let id = ContainerId::intern("band_footer");
        assert_eq!(id.to_string(), "#band_footer");
        assert_eq!(format!("{id:?}"), "#band_footer");
    }
}
