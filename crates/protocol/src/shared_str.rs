use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Immutable, reference-counted text.
///
/// Project titles, tags and image paths are handed to the content sink
/// every time a card face changes. Cloning a `SharedStr` bumps a refcount
/// instead of copying the string, so the catalog can be shared with every
/// mounted component without re-allocating.
#[derive(Debug, Clone, Eq)]
pub struct SharedStr(Arc<str>);

impl SharedStr {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two values point at the same allocation.
    pub fn same_allocation(&self, other: &SharedStr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SharedStr {
    fn default() -> Self {
        SharedStr::from("")
    }
}

impl PartialEq for SharedStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same_allocation(other) || *self.0 == *other.0
    }
}

impl PartialEq<str> for SharedStr {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SharedStr {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Ord for SharedStr {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for SharedStr {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::hash::Hash for SharedStr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl std::ops::Deref for SharedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SharedStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for SharedStr {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedStr {
    fn from(s: &str) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl From<String> for SharedStr {
    fn from(s: String) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl std::fmt::Display for SharedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Written by hand so serde's `rc` feature is not needed.
impl Serialize for SharedStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SharedStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Owned, so escaped JSON strings deserialize too.
        let s = String::deserialize(deserializer)?;
        Ok(SharedStr::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_allocation() {
        let title = SharedStr::from("SONIX");
        let copy = title.clone();
        assert!(title.same_allocation(&copy));
        assert_eq!(title, copy);
    }

    #[test]
    fn compares_with_str() {
        let s = SharedStr::from(String::from("GOOGLE NEST"));
        assert_eq!(s, "GOOGLE NEST");
        assert_eq!(s.as_str(), "GOOGLE NEST");
    }

    #[test]
    fn lookup_by_str_key() {
        let mut map = std::collections::HashMap::new();
        map.insert(SharedStr::from("kohler"), 3);
        assert_eq!(map.get("kohler"), Some(&3));
    }

    #[test]
    fn deserializes_escaped_strings() {
        let s: SharedStr =
            serde_json::from_str(r#""SEA \"LOVE\"""#).expect("escaped string parses");
        assert_eq!(s, "SEA \"LOVE\"");
        let json = serde_json::to_string(&s).expect("string serializes");
        assert!(json.starts_with('"'));
    }
}
