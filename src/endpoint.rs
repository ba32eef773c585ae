//! The node identity used inside every parent/child edge set.

use std::fmt;
use std::hash::Hash;

/// Either one of the two synthetic sentinels or a real member value.
///
/// Representing sentinels as ordinary entries in the same edge sets as real
/// members (rather than as two dedicated `Option<...>` fields) lets the
/// candidate-minimisation and splice logic in [`crate::Poset::add`] and
/// [`crate::Poset::remove`] treat `Top`/`Bottom` as ordinary, always-comparable
/// candidates instead of needing separate branches for them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint<E> {
    /// Above every real member.
    Top,
    /// Below every real member.
    Bottom,
    /// A real member of the poset.
    Member(E),
}

impl<E> Endpoint<E> {
    /// Returns the wrapped member value, if this is not a sentinel.
    pub const fn as_member(&self) -> Option<&E> {
        match self {
            Self::Member(value) => Some(value),
            Self::Top | Self::Bottom => None,
        }
    }

    /// True for [`Endpoint::Top`] or [`Endpoint::Bottom`].
    pub const fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Member(_))
    }
}

impl<E: fmt::Display> fmt::Display for Endpoint<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "TOP"),
            Self::Bottom => write!(f, "BOTTOM"),
            Self::Member(value) => value.fmt(f),
        }
    }
}
