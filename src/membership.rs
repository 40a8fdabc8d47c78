//! Active-group bookkeeping.
//!
//! During a fusion path, row/column groups start out separate and
//! progressively fuse; the solver only ever asks "is this group still
//! active". This is an existence-only set: no duplicates, no ordering
//! contract, and deliberately no iteration/position API since no call site
//! needs one.

use std::collections::BTreeSet;

/// Identifier of a row-group or column-group.
pub type GroupId = usize;

/// Deduplicated set of groups that are still active (not yet fused).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveGroups {
    set: BTreeSet<GroupId>,
}

impl ActiveGroups {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group id. Returns `true` if it was not already present.
    pub fn insert(&mut self, id: GroupId) -> bool {
        self.set.insert(id)
    }

    /// Remove a group id. Returns `true` if it was present.
    pub fn remove(&mut self, id: GroupId) -> bool {
        self.set.remove(&id)
    }

    /// True if the group is still active.
    pub fn contains(&self, id: GroupId) -> bool {
        self.set.contains(&id)
    }

    /// Number of active groups.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// True if no groups are active.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl FromIterator<GroupId> for ActiveGroups {
    fn from_iter<I: IntoIterator<Item = GroupId>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}

impl Extend<GroupId> for ActiveGroups {
    fn extend<I: IntoIterator<Item = GroupId>>(&mut self, iter: I) {
        self.set.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut groups = ActiveGroups::new();
        assert!(groups.is_empty());

        assert!(groups.insert(3));
        assert!(groups.insert(7));
        assert!(groups.contains(3));
        assert!(!groups.contains(4));
        assert_eq!(groups.len(), 2);

        assert!(groups.remove(3));
        assert!(!groups.contains(3));
        assert!(!groups.remove(3));
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn double_insert_is_single_membership() {
        let mut groups = ActiveGroups::new();
        assert!(groups.insert(5));
        assert!(!groups.insert(5));
        assert!(groups.contains(5));
        assert_eq!(groups.len(), 1);

        // One remove fully clears it; there is no second copy behind it.
        assert!(groups.remove(5));
        assert!(!groups.contains(5));
        assert!(groups.is_empty());
    }

    #[test]
    fn from_iterator_dedupes() {
        let mut groups: ActiveGroups = [1, 2, 2, 3, 1].into_iter().collect();
        assert_eq!(groups.len(), 3);
        assert!(groups.contains(1));
        assert!(groups.contains(2));
        assert!(groups.contains(3));

        groups.extend([3, 4]);
        assert_eq!(groups.len(), 4);
        assert!(groups.contains(4));
    }
}
