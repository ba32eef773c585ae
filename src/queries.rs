//! Read-only queries against the diagram (§4.5).

use std::hash::Hash;

use indexmap::IndexSet;

use crate::endpoint::Endpoint;
use crate::poset::Poset;

impl<E: Clone + Eq + Hash> Poset<E> {
    /// The immediate parents of `x`. `None` if `x` is not a member.
    #[must_use]
    pub fn get_parents(&self, x: &E) -> Option<Vec<E>> {
        self.get_parents_opt(x, false)
    }

    /// The immediate children of `x`. `None` if `x` is not a member.
    #[must_use]
    pub fn get_children(&self, x: &E) -> Option<Vec<E>> {
        self.get_children_opt(x, false)
    }

    /// `getParents(x, hypothetical)` from the design document: when `x` is a
    /// member this always returns its stored parents regardless of
    /// `hypothetical`; when `x` is not a member, `hypothetical = true`
    /// returns the covering members it would get if inserted, and
    /// `hypothetical = false` returns `None` (the "absent" signal, §7).
    #[must_use]
    pub fn get_parents_opt(&self, x: &E, hypothetical: bool) -> Option<Vec<E>> {
        if let Some(node) = self.nodes.get(x) {
            return Some(
                node.parents()
                    .iter()
                    .filter_map(Endpoint::as_member)
                    .cloned()
                    .collect(),
            );
        }
        hypothetical.then(|| self.immediate_parent_candidates(x))
    }

    /// As [`Poset::get_parents_opt`], symmetrically for children.
    #[must_use]
    pub fn get_children_opt(&self, x: &E, hypothetical: bool) -> Option<Vec<E>> {
        if let Some(node) = self.nodes.get(x) {
            return Some(
                node.children()
                    .iter()
                    .filter_map(Endpoint::as_member)
                    .cloned()
                    .collect(),
            );
        }
        hypothetical.then(|| self.immediate_child_candidates(x))
    }

    /// The covering members `x` would get if it were inserted right now,
    /// without mutating the poset. Never absent, possibly empty.
    #[must_use]
    pub fn get_parents_hypothetical(&self, x: &E) -> Vec<E> {
        self.get_parents_opt(x, true)
            .expect("hypothetical form always returns Some")
    }

    /// Symmetric to [`Poset::get_parents_hypothetical`].
    #[must_use]
    pub fn get_children_hypothetical(&self, x: &E) -> Vec<E> {
        self.get_children_opt(x, true)
            .expect("hypothetical form always returns Some")
    }

    /// All members `y != x` with `leq(x, y)`. Valid whether or not `x` is a
    /// member. Order is unspecified.
    #[must_use]
    pub fn get_ancestors(&self, x: &E) -> IndexSet<E> {
        self.nodes
            .keys()
            .filter(|m| *m != x && (self.leq)(x, m))
            .cloned()
            .collect()
    }

    /// All members `y != x` with `leq(y, x)`. Valid whether or not `x` is a
    /// member. Order is unspecified.
    #[must_use]
    pub fn get_descendants(&self, x: &E) -> IndexSet<E> {
        self.nodes
            .keys()
            .filter(|m| *m != x && (self.leq)(m, x))
            .cloned()
            .collect()
    }

    /// Maximal members: those with no member parent (their only parent edge
    /// is to `TOP`), in insertion order.
    #[must_use]
    pub fn get_non_children(&self) -> Vec<E> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parents().iter().all(Endpoint::is_sentinel))
            .map(|(value, _)| value.clone())
            .collect()
    }

    /// Minimal members: those with no member child (their only child edge is
    /// to `BOTTOM`), in insertion order.
    #[must_use]
    pub fn get_non_parents(&self) -> Vec<E> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.children().iter().all(Endpoint::is_sentinel))
            .map(|(value, _)| value.clone())
            .collect()
    }
}
