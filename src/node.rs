//! Node records held by the poset's internal table.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::endpoint::Endpoint;

/// The immediate-parent and immediate-child sets of a single member.
///
/// Both sets preserve insertion order (`IndexSet`), which is the container
/// the rest of the crate relies on to make query results and `out()`
/// rendering deterministic across runs (design document §5, §9).
#[derive(Clone, Debug)]
pub struct Node<E: Eq + Hash> {
    pub(crate) parents: IndexSet<Endpoint<E>>,
    pub(crate) children: IndexSet<Endpoint<E>>,
}

impl<E: Eq + Hash> Node<E> {
    /// A freshly created node with no edges yet.
    pub(crate) fn new() -> Self {
        Self {
            parents: IndexSet::new(),
            children: IndexSet::new(),
        }
    }

    /// Immediate parents, sentinels included, in insertion order.
    pub(crate) fn parents(&self) -> &IndexSet<Endpoint<E>> {
        &self.parents
    }

    /// Immediate children, sentinels included, in insertion order.
    pub(crate) fn children(&self) -> &IndexSet<Endpoint<E>> {
        &self.children
    }
}
