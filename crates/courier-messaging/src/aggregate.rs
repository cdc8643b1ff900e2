//! Per-surface multimaps with copy-on-write updates.
//!
//! [`SurfaceMap`] is a persistent value: every update returns a new map and
//! leaves the receiver exactly as it was, including the lists inside it.
//! Lists for untouched surfaces are shared between the old and new map, so
//! an update costs one list copy plus one pointer per surface.
//!
//! [`SurfaceCache`] is a publication cell for callers that share the current
//! map across threads: readers take a snapshot, writers swap in a new map.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::proposition::Proposition;
use crate::rules::LaunchRule;
use crate::surface::Surface;

/// Ordered values per surface.
#[derive(Debug, PartialEq)]
pub struct SurfaceMap<T> {
    entries: Arc<HashMap<Surface, Arc<Vec<T>>>>,
}

/// Propositions per surface.
pub type PropositionMap = SurfaceMap<Proposition>;

/// Rules per surface.
pub type RuleMap = SurfaceMap<LaunchRule>;

impl<T> SurfaceMap<T> {
    /// An empty map.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(HashMap::new()),
        }
    }

    /// Values for `surface`, in insertion order.
    pub fn get(&self, surface: &Surface) -> Option<&[T]> {
        self.entries.get(surface).map(|list| list.as_slice())
    }

    /// Whether `surface` has an entry.
    pub fn contains(&self, surface: &Surface) -> bool {
        self.entries.contains_key(surface)
    }

    /// Surfaces with an entry, in no particular order.
    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.entries.keys()
    }

    /// Entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Surface, &[T])> {
        self.entries
            .iter()
            .map(|(surface, list)| (surface, list.as_slice()))
    }

    /// Number of surfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether both maps are the same underlying value (not just equal).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<T: Clone> SurfaceMap<T> {
    /// A new map with `item` appended to the list for `surface`.
    #[must_use]
    pub fn with_item(&self, surface: &Surface, item: T) -> Self {
        self.with_list(surface, |list| list.push(item))
    }

    /// A new map with `items` appended to the list for `surface`.
    ///
    /// Empty `items` returns a map sharing this one's storage.
    #[must_use]
    pub fn with_items(&self, surface: &Surface, items: &[T]) -> Self {
        if items.is_empty() {
            return self.clone();
        }
        self.with_list(surface, |list| list.extend_from_slice(items))
    }

    /// A new map without `surface`.
    #[must_use]
    pub fn without(&self, surface: &Surface) -> Self {
        if !self.contains(surface) {
            return self.clone();
        }
        let mut entries = HashMap::clone(&self.entries);
        let _ = entries.remove(surface);
        Self {
            entries: Arc::new(entries),
        }
    }

    fn with_list(&self, surface: &Surface, update: impl FnOnce(&mut Vec<T>)) -> Self {
        let mut entries = HashMap::clone(&self.entries);
        let mut list = entries
            .get(surface)
            .map(|existing| Vec::clone(existing))
            .unwrap_or_default();
        update(&mut list);
        let _ = entries.insert(surface.clone(), Arc::new(list));
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl<T> Clone for SurfaceMap<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T> Default for SurfaceMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<(Surface, T)> for SurfaceMap<T> {
    fn from_iter<I: IntoIterator<Item = (Surface, T)>>(iter: I) -> Self {
        let mut entries: HashMap<Surface, Vec<T>> = HashMap::new();
        for (surface, item) in iter {
            entries.entry(surface).or_default().push(item);
        }
        Self {
            entries: Arc::new(
                entries
                    .into_iter()
                    .map(|(surface, list)| (surface, Arc::new(list)))
                    .collect(),
            ),
        }
    }
}

/// Shared cell holding the current [`SurfaceMap`].
///
/// Snapshots are cheap `Arc` clones and stay valid after later updates.
#[derive(Debug)]
pub struct SurfaceCache<T> {
    current: RwLock<SurfaceMap<T>>,
}

impl<T> SurfaceCache<T> {
    /// A cache holding an empty map.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(SurfaceMap::new()),
        }
    }

    /// The current map.
    pub fn snapshot(&self) -> SurfaceMap<T> {
        self.current.read().clone()
    }

    /// Replace the current map.
    pub fn publish(&self, map: SurfaceMap<T>) {
        *self.current.write() = map;
    }

    /// Replace the current map with `update(current)` and return the result.
    ///
    /// Holds the write lock while `update` runs, so concurrent updates apply
    /// one after another. The lock is not reentrant: `update` must work from
    /// the map it is given and must not call back into this cache, or the
    /// thread deadlocks.
    pub fn update(&self, update: impl FnOnce(&SurfaceMap<T>) -> SurfaceMap<T>) -> SurfaceMap<T> {
        let mut guard = self.current.write();
        let next = update(&*guard);
        *guard = next.clone();
        next
    }

    /// Reset to an empty map.
    pub fn clear(&self) {
        self.publish(SurfaceMap::new());
    }
}

impl<T> Default for SurfaceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
