//! Runtime configuration for a [`crate::Poset`].

/// Tunable behaviour for a poset instance.
///
/// This has a single knob today: whether every public mutation re-validates
/// the whole diagram with [`crate::Poset::is_valid`] in its panicking mode
/// before returning. That is expensive (it is a brute-force, quadratic
/// check — see the design document's §4.6) so it defaults to off; turn it on
/// in tests and debug builds that want to catch a broken `leq` or hint
/// implementation as early as possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PosetConfig {
    /// When true, `add`/`remove`/`clear` call `is_valid(true)` before returning.
    pub assert_on_mutate: bool,
}

impl Default for PosetConfig {
    fn default() -> Self {
        Self {
            assert_on_mutate: false,
        }
    }
}

impl PosetConfig {
    /// A config with self-validation enabled after every mutation.
    #[must_use]
    pub const fn assert_on_mutate() -> Self {
        Self {
            assert_on_mutate: true,
        }
    }
}
