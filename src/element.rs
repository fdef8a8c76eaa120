use core::fmt::Debug;
use std::hash::Hash;

use crate::simd;

/// A fixed-width value that can be scanned for.
///
/// Implemented for the primitive integer types and `char`.
/// `u16` is the usual choice for UTF-16 code units.
pub trait Element: Copy + Eq + Hash + Debug {
    /// Number of distinct values of this type, if it is small enough to back a presence table.
    ///
    /// `None` means large candidate sets are hashed instead.
    const TABLE_SIZE: Option<usize>;

    /// Maps `self` to a dense index in `0..TABLE_SIZE`, or `None` if the type has no table.
    fn table_index(self) -> Option<usize>;

    /// Searches for the first element in `haystack` equal to any value in `needle`.
    ///
    /// Types with a vectorized kernel override this, everything else uses the batched stable loop.
    #[doc(hidden)]
    #[inline]
    fn find_fixed<const N: usize>(haystack: &[Self], needle: [Self; N]) -> Option<usize> {
        simd::stable::find_fixed(haystack, needle)
    }
}

macro_rules! element_impl {
    ($t:ty, table: $unsigned:ty) => {
        impl Element for $t {
            const TABLE_SIZE: Option<usize> = Some(<$unsigned>::MAX as usize + 1);

            #[inline(always)]
            fn table_index(self) -> Option<usize> {
                Some(self as $unsigned as usize)
            }
        }
    };
    ($t:ty, table: $unsigned:ty, lanes: $kernel:ident) => {
        impl Element for $t {
            const TABLE_SIZE: Option<usize> = Some(<$unsigned>::MAX as usize + 1);

            #[inline(always)]
            fn table_index(self) -> Option<usize> {
                Some(self as $unsigned as usize)
            }

            #[inline]
            fn find_fixed<const N: usize>(haystack: &[Self], needle: [Self; N]) -> Option<usize> {
                simd::decide!(
                    simd::nightly::$kernel(haystack, needle),
                    simd::stable::find_fixed(haystack, needle)
                )
            }
        }
    };
    ($t:ty) => {
        impl Element for $t {
            const TABLE_SIZE: Option<usize> = None;

            #[inline(always)]
            fn table_index(self) -> Option<usize> {
                None
            }
        }
    };
}

element_impl!(u8, table: u8, lanes: find_fixed_u8);
element_impl!(u16, table: u16, lanes: find_fixed_u16);
element_impl!(i8, table: u8);
element_impl!(i16, table: u16);
element_impl!(u32);
element_impl!(i32);
element_impl!(u64);
element_impl!(i64);
element_impl!(usize);
element_impl!(char);
