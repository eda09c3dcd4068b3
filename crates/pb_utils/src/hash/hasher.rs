//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` is based on `foldhash` with a fixed seed, so results only
//! depend on the input.
//!
//! `NoOpHasher` passes an already well distributed `u64` (such as a `TypeId`)
//! straight through.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x3C6E_F372_FE94_F82B);

/// A hasher whose results only depend on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use pb_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("member1");
/// let b = FixedHashState.hash_one("member1");
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

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that keeps the last written `u64` as the hash.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // `TypeId` writes a `u64` or `u128`, other inputs fold byte by byte.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Build state for [`NoOpHasher`].
///
/// # Examples
///
/// ```
/// use core::hash::{Hash, Hasher, BuildHasher};
/// use pb_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// 42_u64.hash(&mut hasher);
/// assert_eq!(hasher.finish(), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}
