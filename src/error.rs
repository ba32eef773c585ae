//! Error types surfaced by the poset engine.

use thiserror::Error;

/// Failures that can be raised while operating on a [`crate::Poset`].
///
/// Most poset operations are infallible by design (§7 of the design
/// document): a duplicate insert or a missing removal is reported through a
/// plain `bool`, and a query against a non-member is reported through
/// `Option::None`. The one genuine error condition is structural corruption
/// of the Hasse diagram itself, detected by [`crate::Poset::is_valid`].
#[derive(Debug, Error)]
pub enum PosetError {
    /// One of the invariants in the design document's data-model section
    /// does not hold. The poset is considered poisoned once this is raised;
    /// there is no recovery path.
    #[error("poset invariant violated: {0}")]
    Corruption(String),
}
