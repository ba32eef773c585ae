//! Brute-force self-validation of the data model's invariants (§4.6).

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::endpoint::Endpoint;
use crate::error::PosetError;
use crate::poset::Poset;

impl<E: Clone + Eq + Hash + Debug> Poset<E> {
    /// Verifies every invariant in the data model by brute force over pairs
    /// of members. Returns a bool when `fail` is false; when `fail` is true,
    /// panics with [`PosetError::Corruption`] on the first violation found.
    #[must_use]
    pub fn is_valid(&self, fail: bool) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(violation) => {
                if fail {
                    tracing::error!(%violation, "poset invariant violated");
                    panic!("{}", PosetError::Corruption(violation));
                }
                false
            }
        }
    }

    fn check(&self) -> Result<(), String> {
        self.check_edge_soundness_and_symmetry()?;
        self.check_cover_minimality()?;
        self.check_cover_completeness()?;
        self.check_sentinel_closure()?;
        Ok(())
    }

    /// Invariants 2 and 5: every recorded edge `p -> c` satisfies
    /// `leq(c, p) ∧ c != p`, and is mirrored in both endpoints' edge sets.
    fn check_edge_soundness_and_symmetry(&self) -> Result<(), String> {
        for (value, node) in &self.nodes {
            for parent in node.parents() {
                match parent {
                    Endpoint::Member(pv) => {
                        if pv == value {
                            return Err(format!("{value:?} lists itself as its own parent"));
                        }
                        if !(self.leq)(value, pv) {
                            return Err(format!("edge {pv:?} -> {value:?} violates leq"));
                        }
                        let mirrored = self.nodes.get(pv).is_some_and(|pn| {
                            pn.children().contains(&Endpoint::Member(value.clone()))
                        });
                        if !mirrored {
                            return Err(format!(
                                "edge {pv:?} -> {value:?} is not mirrored in {pv:?}'s children"
                            ));
                        }
                    }
                    Endpoint::Top => {
                        if !self.top_children.contains(value) {
                            return Err(format!(
                                "{value:?} claims TOP as parent but is not in top_children"
                            ));
                        }
                    }
                    Endpoint::Bottom => {
                        return Err(format!("{value:?} lists BOTTOM as a parent"));
                    }
                }
            }
            for child in node.children() {
                match child {
                    Endpoint::Member(cv) => {
                        if cv == value {
                            return Err(format!("{value:?} lists itself as its own child"));
                        }
                        if !(self.leq)(cv, value) {
                            return Err(format!("edge {value:?} -> {cv:?} violates leq"));
                        }
                        let mirrored = self.nodes.get(cv).is_some_and(|cn| {
                            cn.parents().contains(&Endpoint::Member(value.clone()))
                        });
                        if !mirrored {
                            return Err(format!(
                                "edge {value:?} -> {cv:?} is not mirrored in {cv:?}'s parents"
                            ));
                        }
                    }
                    Endpoint::Bottom => {
                        if !self.bottom_parents.contains(value) {
                            return Err(format!(
                                "{value:?} claims BOTTOM as child but is not in bottom_parents"
                            ));
                        }
                    }
                    Endpoint::Top => {
                        return Err(format!("{value:?} lists TOP as a child"));
                    }
                }
            }
        }
        for value in &self.top_children {
            if !self
                .nodes
                .get(value)
                .is_some_and(|n| n.parents().contains(&Endpoint::Top))
            {
                return Err(format!("TOP claims {value:?} as a child but it disagrees"));
            }
        }
        for value in &self.bottom_parents {
            if !self
                .nodes
                .get(value)
                .is_some_and(|n| n.children().contains(&Endpoint::Bottom))
            {
                return Err(format!("BOTTOM claims {value:?} as a parent but it disagrees"));
            }
        }
        Ok(())
    }

    /// Invariant 3: no recorded edge `p -> c` admits a member `m`, distinct
    /// from both, with `leq(c, m) ∧ leq(m, p)`.
    fn check_cover_minimality(&self) -> Result<(), String> {
        for (value, node) in &self.nodes {
            for parent in node.parents() {
                let Endpoint::Member(pv) = parent else {
                    continue;
                };
                for (m, _) in &self.nodes {
                    if m == value || m == pv {
                        continue;
                    }
                    if (self.leq)(value, m) && (self.leq)(m, pv) {
                        return Err(format!(
                            "edge {pv:?} -> {value:?} is not a cover: {m:?} sits between"
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Invariant 4: for every pair of members `a, b` with `leq(a, b) ∧ a !=
    /// b`, there is a directed path from `b` down to `a` in the recorded
    /// edges.
    fn check_cover_completeness(&self) -> Result<(), String> {
        for (a, _) in &self.nodes {
            for (b, _) in &self.nodes {
                if a == b || !(self.leq)(a, b) {
                    continue;
                }
                if !self.reaches_down_to(b, a) {
                    return Err(format!(
                        "{b:?} cannot reach {a:?} through cover edges despite leq({a:?}, {b:?})"
                    ));
                }
            }
        }
        Ok(())
    }

    /// Depth-first search from `from` down through recorded child edges.
    fn reaches_down_to(&self, from: &E, to: &E) -> bool {
        let mut stack = vec![from.clone()];
        let mut visited = HashSet::new();
        while let Some(current) = stack.pop() {
            if &current == to {
                return true;
            }
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(node) = self.nodes.get(&current) {
                for child in node.children() {
                    if let Endpoint::Member(cv) = child {
                        stack.push(cv.clone());
                    }
                }
            }
        }
        false
    }

    /// Invariant 6: every member has at least one parent and one child
    /// (counting sentinels). `TOP` having no parents and `BOTTOM` having no
    /// children is structural — there is no field in which such an edge
    /// could even be recorded — so only the member side needs checking here.
    fn check_sentinel_closure(&self) -> Result<(), String> {
        for (value, node) in &self.nodes {
            if node.parents().is_empty() {
                return Err(format!("{value:?} has no parent at all, not even TOP"));
            }
            if node.children().is_empty() {
                return Err(format!("{value:?} has no child at all, not even BOTTOM"));
            }
        }
        Ok(())
    }
}
