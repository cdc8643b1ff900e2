//! Display surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An addressable content slot in the host application, identified by URI.
///
/// Surfaces are map keys: two surfaces are equal when their URI strings are
/// byte-for-byte equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Surface(String);

impl Surface {
    /// Surface for a URI string, e.g. `mobileapp://com.example.app/home`.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI string.
    pub fn uri(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl From<&str> for Surface {
    fn from(uri: &str) -> Self {
        Self::from_uri(uri)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_is_by_uri() {
        let a = Surface::from_uri("mobileapp://app/home");
        let b = Surface::from("mobileapp://app/home");
        let c = Surface::from_uri("mobileapp://app/cart");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Surface> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_is_transparent() {
        let surface = Surface::from_uri("mobileapp://app");
        assert_eq!(serde_json::to_value(&surface).unwrap(), "mobileapp://app");
    }
}
