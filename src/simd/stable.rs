use crate::matcher::Matcher;
use crate::simd::{fallback, LANES};

/// Searches for the first element in `haystack` equal to any value in `needle`.
///
/// Elements are compared in batches of [`LANES`] and folded into a bitmask, the tail that does not
/// fill a whole batch is searched one element at a time. Batching is only done for plain equality,
/// arbitrary matchers go through [`fallback::find_by`] and stop at the first match.
pub fn find_fixed<T: PartialEq + Copy, const N: usize>(haystack: &[T], needle: [T; N]) -> Option<usize> {
    #[inline(never)]
    #[cold]
    fn unlikely_search<T: PartialEq + Copy, const N: usize>(haystack: &[T], needle: &[T; N]) -> Option<usize> {
        fallback::find_by(haystack, needle)
    }

    if haystack.len() < LANES {
        return unlikely_search(haystack, &needle);
    }

    let mut chunks = haystack.chunks_exact(LANES);
    let mut i = 0usize;

    for chunk in &mut chunks {
        let mut mask = 0u16;

        for (j, &c) in chunk.iter().enumerate() {
            mask |= (needle.matches(c) as u16) << j;
        }

        if mask != 0 {
            let index = mask.trailing_zeros() as usize;
            return Some(i + index);
        }

        i += LANES;
    }

    fallback::find_by(chunks.remainder(), &needle).map(|x| x + i)
}
