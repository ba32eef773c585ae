//! The dynamic poset engine: construction, insertion, and deletion.

use std::fmt::Debug;
use std::hash::Hash;

use contracts::*;
use indexmap::{IndexMap, IndexSet};

use crate::config::PosetConfig;
use crate::endpoint::Endpoint;
use crate::hints::Hints;
use crate::hints::LeqFn;
use crate::node::Node;

/// A dynamic partially-ordered set that incrementally maintains its own
/// Hasse diagram (cover relation) under insertion and deletion.
///
/// `E` is the carrier type; it must support value equality and stable
/// hashing so it can key the internal node table. The ordering predicate and
/// the optional candidate hints (see [`Hints`]) are captured for the
/// lifetime of the poset as boxed closures.
pub struct Poset<E: Clone + Eq + Hash> {
    pub(crate) leq: LeqFn<E>,
    pub(crate) hints: Hints<E>,
    pub(crate) config: PosetConfig,
    pub(crate) nodes: IndexMap<E, Node<E>>,
    /// `TOP`'s children: members with no real parent.
    pub(crate) top_children: IndexSet<E>,
    /// `BOTTOM`'s parents: members with no real child.
    pub(crate) bottom_parents: IndexSet<E>,
}

impl<E: Clone + Eq + Hash + Debug> Poset<E> {
    /// An empty poset ordered by `leq`; only the two sentinels exist.
    pub fn new(leq: impl Fn(&E, &E) -> bool + 'static) -> Self {
        Self::with_config(leq, PosetConfig::default())
    }

    /// As [`Poset::new`], additionally specifying the self-validation config.
    pub fn with_config(leq: impl Fn(&E, &E) -> bool + 'static, config: PosetConfig) -> Self {
        Self {
            leq: Box::new(leq),
            hints: Hints::none(),
            config,
            nodes: IndexMap::new(),
            top_children: IndexSet::new(),
            bottom_parents: IndexSet::new(),
        }
    }

    /// Constructs a poset and inserts `initial`'s elements in iteration order.
    pub fn with_initial(
        leq: impl Fn(&E, &E) -> bool + 'static,
        initial: impl IntoIterator<Item = E>,
    ) -> Self {
        let mut poset = Self::new(leq);
        for element in initial {
            poset.add(element);
        }
        poset
    }

    /// Constructs an empty poset with candidate-generator acceleration hints
    /// (§4.2 of the design document).
    pub fn with_hints(
        leq: impl Fn(&E, &E) -> bool + 'static,
        parents_of: impl Fn(&E) -> Vec<E> + 'static,
        children_of: impl Fn(&E) -> Vec<E> + 'static,
    ) -> Self {
        let mut poset = Self::new(leq);
        poset.hints = Hints::new(parents_of, children_of);
        poset
    }

    /// As [`Poset::with_hints`], additionally inserting `initial`'s elements.
    pub fn with_hints_and_initial(
        leq: impl Fn(&E, &E) -> bool + 'static,
        parents_of: impl Fn(&E) -> Vec<E> + 'static,
        children_of: impl Fn(&E) -> Vec<E> + 'static,
        initial: impl IntoIterator<Item = E>,
    ) -> Self {
        let mut poset = Self::with_hints(leq, parents_of, children_of);
        for element in initial {
            poset.add(element);
        }
        poset
    }

    /// Inserts `e`. Returns `false` without modifying the poset if `e` is
    /// already a member.
    pub fn add(&mut self, e: E) -> bool {
        if self.nodes.contains_key(&e) {
            return false;
        }
        self.insert_new_member(e);
        self.maybe_assert_valid();
        true
    }

    /// Removes `e`. Returns `false` without modifying the poset if `e` is
    /// not a member.
    pub fn remove(&mut self, e: &E) -> bool {
        if !self.nodes.contains_key(e) {
            return false;
        }
        self.remove_existing_member(e);
        self.maybe_assert_valid();
        true
    }

    /// Removes every member; the sentinels remain.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.top_children.clear();
        self.bottom_parents.clear();
        self.maybe_assert_valid();
    }

    /// The number of members, excluding the sentinels.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `e` is currently a member.
    #[must_use]
    pub fn contains(&self, e: &E) -> bool {
        self.nodes.contains_key(e)
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.nodes.keys()
    }

    fn maybe_assert_valid(&self) {
        if self.config.assert_on_mutate {
            let _ = self.is_valid(true);
        }
    }

    /// Splices a brand-new member into the diagram. Precondition: `e` is not
    /// yet a member (the public `add` enforces this before delegating here).
    #[requires(!self.nodes.contains_key(&e))]
    fn insert_new_member(&mut self, e: E) {
        let parents = self.immediate_parent_candidates(&e);
        let children = self.immediate_child_candidates(&e);

        for p in &parents {
            for c in &children {
                self.remove_edge(&Endpoint::Member(p.clone()), &Endpoint::Member(c.clone()));
            }
        }

        self.nodes.insert(e.clone(), Node::new());

        for p in &parents {
            self.add_edge(Endpoint::Member(p.clone()), Endpoint::Member(e.clone()));
        }
        for c in &children {
            self.add_edge(Endpoint::Member(e.clone()), Endpoint::Member(c.clone()));
        }
        if parents.is_empty() {
            self.add_edge(Endpoint::Top, Endpoint::Member(e.clone()));
        }
        if children.is_empty() {
            self.add_edge(Endpoint::Member(e.clone()), Endpoint::Bottom);
        }
        // `e` is now the real covering node for each of its children and the
        // real covered node for each of its parents; any stale sentinel edge
        // that existed only because that role was previously unfilled must go.
        for c in &children {
            self.remove_edge(&Endpoint::Top, &Endpoint::Member(c.clone()));
        }
        for p in &parents {
            self.remove_edge(&Endpoint::Member(p.clone()), &Endpoint::Bottom);
        }

        tracing::debug!(
            size = self.nodes.len(),
            parents = parents.len(),
            children = children.len(),
            "inserted poset member"
        );
    }

    /// Splices an existing member out of the diagram, reinstating covers
    /// that were only indirect through it. Precondition: `e` is a member.
    #[requires(self.nodes.contains_key(e))]
    fn remove_existing_member(&mut self, e: &E) {
        let node = &self.nodes[e];
        let parents: Vec<Endpoint<E>> = node.parents.iter().cloned().collect();
        let children: Vec<Endpoint<E>> = node.children.iter().cloned().collect();

        for p in &parents {
            self.remove_edge(p, &Endpoint::Member(e.clone()));
        }
        for c in &children {
            self.remove_edge(&Endpoint::Member(e.clone()), c);
        }

        for p in &parents {
            for c in &children {
                if matches!(p, Endpoint::Top) && matches!(c, Endpoint::Bottom) {
                    // Only possible when `e` was the sole member; sentinels
                    // never carry a direct edge to one another.
                    continue;
                }
                if !self.has_intervening_member(p, c, e) {
                    self.add_edge(p.clone(), c.clone());
                }
            }
        }

        self.nodes.shift_remove(e);

        for p in &parents {
            if let Endpoint::Member(pv) = p {
                if self.nodes.get(pv).is_some_and(|n| n.children.is_empty()) {
                    self.add_edge(Endpoint::Member(pv.clone()), Endpoint::Bottom);
                }
            }
        }
        for c in &children {
            if let Endpoint::Member(cv) = c {
                if self.nodes.get(cv).is_some_and(|n| n.parents.is_empty()) {
                    self.add_edge(Endpoint::Top, Endpoint::Member(cv.clone()));
                }
            }
        }

        tracing::debug!(size = self.nodes.len(), "removed poset member");
    }

    /// True when some member other than `exclude`, `p`, and `c` sits between
    /// them (`leq(c, m) ∧ leq(m, p)`, with sentinel ends vacuously true).
    fn has_intervening_member(&self, p: &Endpoint<E>, c: &Endpoint<E>, exclude: &E) -> bool {
        self.nodes.keys().any(|m| {
            if m == exclude {
                return false;
            }
            if p.as_member().is_some_and(|pv| pv == m) || c.as_member().is_some_and(|cv| cv == m)
            {
                return false;
            }
            let below_p = match p {
                Endpoint::Top => true,
                Endpoint::Member(pv) => (self.leq)(m, pv),
                Endpoint::Bottom => false,
            };
            let above_c = match c {
                Endpoint::Bottom => true,
                Endpoint::Member(cv) => (self.leq)(cv, m),
                Endpoint::Top => false,
            };
            below_p && above_c
        })
    }

    /// The would-be immediate parents of `e` among current members, as if it
    /// were freshly inserted, without mutating the poset (§4.3 steps 1, §4.5
    /// hypothetical queries).
    pub(crate) fn immediate_parent_candidates(&self, e: &E) -> Vec<E> {
        let pool = self.gather_pool(e, self.hints.parents_of.as_ref(), |m| {
            m != e && (self.leq)(e, m)
        });
        minimize(&pool, |x, y| (self.leq)(y, x))
    }

    /// The would-be immediate children of `e` among current members (§4.3
    /// step 2, §4.5 hypothetical queries).
    pub(crate) fn immediate_child_candidates(&self, e: &E) -> Vec<E> {
        let pool = self.gather_pool(e, self.hints.children_of.as_ref(), |m| {
            m != e && (self.leq)(m, e)
        });
        minimize(&pool, |x, y| (self.leq)(x, y))
    }

    /// Collects the candidate frontier for `e`: every current member passing
    /// `include`, reached either by a full scan (no hint) or by repeatedly
    /// applying `hint` starting from `hint(e)` and filtering to members
    /// (§4.2's hint contract).
    fn gather_pool(
        &self,
        e: &E,
        hint: Option<&crate::hints::CandidateHint<E>>,
        include: impl Fn(&E) -> bool,
    ) -> IndexSet<E> {
        match hint {
            Some(hint_fn) => {
                let mut pool = IndexSet::new();
                let mut visited: IndexSet<E> = IndexSet::new();
                let mut frontier: Vec<E> = hint_fn(e);
                while let Some(candidate) = frontier.pop() {
                    if !visited.insert(candidate.clone()) {
                        continue;
                    }
                    if self.nodes.contains_key(&candidate) && include(&candidate) {
                        pool.insert(candidate.clone());
                    }
                    frontier.extend(hint_fn(&candidate));
                }
                pool
            }
            None => self.nodes.keys().filter(|m| include(*m)).cloned().collect(),
        }
    }

    fn has_edge(&self, p: &Endpoint<E>, c: &Endpoint<E>) -> bool {
        match (p, c) {
            (Endpoint::Top, Endpoint::Member(cv)) => self.top_children.contains(cv),
            (Endpoint::Member(pv), Endpoint::Bottom) => self.bottom_parents.contains(pv),
            (Endpoint::Member(pv), Endpoint::Member(cv)) => self
                .nodes
                .get(pv)
                .is_some_and(|node| node.children.contains(&Endpoint::Member(cv.clone()))),
            _ => false,
        }
    }

    fn add_edge(&mut self, p: Endpoint<E>, c: Endpoint<E>) {
        match (&p, &c) {
            (Endpoint::Top, Endpoint::Member(cv)) => {
                self.top_children.insert(cv.clone());
                if let Some(node) = self.nodes.get_mut(cv) {
                    node.parents.insert(Endpoint::Top);
                }
            }
            (Endpoint::Member(pv), Endpoint::Bottom) => {
                self.bottom_parents.insert(pv.clone());
                if let Some(node) = self.nodes.get_mut(pv) {
                    node.children.insert(Endpoint::Bottom);
                }
            }
            (Endpoint::Member(pv), Endpoint::Member(cv)) => {
                if let Some(node) = self.nodes.get_mut(pv) {
                    node.children.insert(Endpoint::Member(cv.clone()));
                }
                if let Some(node) = self.nodes.get_mut(cv) {
                    node.parents.insert(Endpoint::Member(pv.clone()));
                }
            }
            (Endpoint::Top, Endpoint::Bottom) => {
                // Only reachable when the poset has no real members; there is
                // nothing to link.
            }
            _ => unreachable!("invalid poset edge endpoints"),
        }
    }

    fn remove_edge(&mut self, p: &Endpoint<E>, c: &Endpoint<E>) {
        if !self.has_edge(p, c) {
            return;
        }
        match (p, c) {
            (Endpoint::Top, Endpoint::Member(cv)) => {
                self.top_children.shift_remove(cv);
                if let Some(node) = self.nodes.get_mut(cv) {
                    node.parents.shift_remove(&Endpoint::Top);
                }
            }
            (Endpoint::Member(pv), Endpoint::Bottom) => {
                self.bottom_parents.shift_remove(pv);
                if let Some(node) = self.nodes.get_mut(pv) {
                    node.children.shift_remove(&Endpoint::Bottom);
                }
            }
            (Endpoint::Member(pv), Endpoint::Member(cv)) => {
                if let Some(node) = self.nodes.get_mut(pv) {
                    node.children.shift_remove(&Endpoint::Member(cv.clone()));
                }
                if let Some(node) = self.nodes.get_mut(cv) {
                    node.parents.shift_remove(&Endpoint::Member(pv.clone()));
                }
            }
            _ => {}
        }
    }
}

/// Keeps only the elements of `pool` for which no other element makes them
/// non-immediate: `x` is discarded when some `y != x` in `pool` has
/// `redundant(x, y)`.
fn minimize<E: Clone + Eq + Hash>(
    pool: &IndexSet<E>,
    redundant: impl Fn(&E, &E) -> bool,
) -> Vec<E> {
    pool.iter()
        .filter(|x| !pool.iter().any(|y| y != *x && redundant(*x, y)))
        .cloned()
        .collect()
}
