//! Caller-supplied candidate-generator hints (design document §4.2).

/// A single-argument candidate generator, boxed so it can be captured by a
/// [`crate::Poset`] for the engine's lifetime without threading an extra
/// generic parameter through every type that touches the poset.
pub type CandidateHint<E> = Box<dyn Fn(&E) -> Vec<E>>;

/// The ordering predicate captured by a [`crate::Poset`].
pub type LeqFn<E> = Box<dyn Fn(&E, &E) -> bool>;

/// The pair of optional acceleration hooks described in §4.2: a function
/// producing candidate immediate-parents of an element, and one producing
/// candidate immediate-children, both in the conceptual universe (members
/// or not — the engine filters).
pub struct Hints<E> {
    pub(crate) parents_of: Option<CandidateHint<E>>,
    pub(crate) children_of: Option<CandidateHint<E>>,
}

impl<E> Hints<E> {
    /// No acceleration hooks; the engine falls back to a full scan of the
    /// current member set.
    #[must_use]
    pub fn none() -> Self {
        Self {
            parents_of: None,
            children_of: None,
        }
    }

    /// Supplies both hooks.
    #[must_use]
    pub fn new(
        parents_of: impl Fn(&E) -> Vec<E> + 'static,
        children_of: impl Fn(&E) -> Vec<E> + 'static,
    ) -> Self {
        Self {
            parents_of: Some(Box::new(parents_of)),
            children_of: Some(Box::new(children_of)),
        }
    }
}
