use std::simd::{cmp::SimdPartialEq, Simd};

use crate::simd::{fallback, LANES};

macro_rules! find_fixed_impl {
    ($name:ident, $t:ty) => {
        /// Optimized function for finding one of `N` values in `haystack`
        pub fn $name<const N: usize>(haystack: &[$t], needle: [$t; N]) -> Option<usize> {
            #[inline(never)]
            #[cold]
            fn unlikely_find<const N: usize>(haystack: &[$t], needle: [$t; N]) -> Option<usize> {
                fallback::find_by(haystack, &needle)
            }

            if haystack.len() < LANES {
                return unlikely_find(haystack, needle);
            }

            let splats = needle.map(Simd::<$t, LANES>::splat);
            let mut chunks = haystack.chunks_exact(LANES);
            let mut i = 0;

            for chunk in &mut chunks {
                let lanes = Simd::<$t, LANES>::from_slice(chunk);

                let mut eq = lanes.simd_eq(splats[0]);
                for splat in &splats[1..] {
                    eq |= lanes.simd_eq(*splat);
                }

                let num = eq.to_bitmask();
                if num != 0 {
                    return Some(i + num.trailing_zeros() as usize);
                }

                i += LANES;
            }

            fallback::find_by(chunks.remainder(), &needle).map(|x| i + x)
        }
    };
}

find_fixed_impl!(find_fixed_u8, u8);
find_fixed_impl!(find_fixed_u16, u16);
