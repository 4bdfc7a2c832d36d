//! Ordered, duplicate-free list of docked application ids.

use std::collections::HashSet;

use crate::core::AppId;

/// Removes repeated ids, keeping the first occurrence of each.
#[must_use]
pub fn dedup_preserving_order<I>(ids: I) -> Vec<AppId>
where
    I: IntoIterator<Item = AppId>,
{
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

/// The cached snapshot of docked applications.
///
/// Order is the order the user pinned the applications in. An id appears at
/// most once. Membership checks go through a hash index so they stay cheap for
/// a few hundred entries.
#[derive(Debug, Clone, Default)]
pub struct DockedAppList {
    ids: Vec<AppId>,
    index: HashSet<AppId>,
}

impl DockedAppList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Builds a list from arbitrary ids, dropping duplicates.
    #[must_use]
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = AppId>,
    {
        let ids = dedup_preserving_order(ids);
        let index = ids.iter().cloned().collect();
        Self { ids, index }
    }

    /// Returns `true` if `id` is in the list.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool { self.index.contains(id) }

    /// Order-sensitive comparison against a raw id sequence.
    #[must_use]
    pub fn matches(&self, other: &[AppId]) -> bool { self.ids.as_slice() == other }

    /// Returns the ids in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[AppId] { &self.ids }

    /// Returns an owned copy of the ids in display order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<AppId> { self.ids.clone() }

    /// Number of docked applications.
    #[must_use]
    pub fn len(&self) -> usize { self.ids.len() }

    /// Returns `true` if nothing is docked.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }
}

impl PartialEq for DockedAppList {
    fn eq(&self, other: &Self) -> bool { self.ids == other.ids }
}

impl Eq for DockedAppList {}
