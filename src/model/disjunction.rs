//! Disjunction-of-conjunctions role filler: "(A and B) or C".

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One "and" group. Insertion order is significant.
pub type Conjunction<T> = SmallVec<[T; 2]>;

/// A set of conjunction groups; satisfying any one group (all members
/// jointly) satisfies the role.
///
/// Group order is insertion order — disjunction members are logically
/// unordered, but a stable order is what makes event streams reproducible.
/// Empty groups and exact duplicates are dropped on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disjunction<T> {
    groups: Vec<Conjunction<T>>,
}

impl<T> Default for Disjunction<T> {
    fn default() -> Self {
        Disjunction { groups: Vec::new() }
    }
}

impl<T: PartialEq> Disjunction<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one conjunction group. Empty and duplicate groups are no-ops.
    pub fn push_group(&mut self, group: impl IntoIterator<Item = T>) {
        let group: Conjunction<T> = group.into_iter().collect();
        if group.is_empty() {
            return;
        }
        if self.groups.iter().any(|g| *g == group) {
            return;
        }
        self.groups.push(group);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Groups in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = &[T]> {
        self.groups.iter().map(|g| g.as_slice())
    }

    /// True if any group contains the item.
    pub fn contains(&self, item: &T) -> bool {
        self.groups.iter().any(|g| g.contains(item))
    }
}
