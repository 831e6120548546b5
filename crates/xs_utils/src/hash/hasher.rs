//! Provide `FixedHasher`.
//!
//! Based on the `foldhash` crate, with a fixed seed so that two processes
//! exchanging envelopes iterate registries in the same order.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5A17_C0DE_E27E_10BE);

/// A type alias for [`foldhash::fast::FoldHasher`].
///
/// Created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state seeded with a fixed constant.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use xs_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("core");
/// let b = FixedHashState.hash_one("core");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

#[cfg(test)]
mod tests {
    use super::FixedHashState;
    use crate::hash::HashMap;
    use core::hash::BuildHasher;

    #[test]
    fn hash_is_stable_between_states() {
        let first = FixedHashState.hash_one("Fixtures.Widget");
        let second = FixedHashState::default().hash_one("Fixtures.Widget");
        assert_eq!(first, second);
        assert_ne!(first, FixedHashState.hash_one("Fixtures.Gadget"));
    }

    #[test]
    fn map_uses_fixed_state() {
        let mut map: HashMap<&str, u32> = HashMap::default();
        map.insert("core", 1);
        map.insert("std", 2);
        assert_eq!(map.get("core"), Some(&1));
        assert_eq!(map.get("std"), Some(&2));
    }
}
