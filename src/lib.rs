#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![cfg_attr(feature = "simd", feature(portable_simd))]

mod element;
mod errors;
mod ext;
mod util;
mod window;

#[cfg(feature = "__INTERNALS_DO_NOT_USE")]
pub mod matcher;
#[cfg(not(feature = "__INTERNALS_DO_NOT_USE"))]
mod matcher;
#[cfg(feature = "__INTERNALS_DO_NOT_USE")]
pub mod simd;
#[cfg(not(feature = "__INTERNALS_DO_NOT_USE"))]
mod simd;

pub use element::Element;
pub use errors::WindowError;
pub use ext::IndexOfAny;
pub use matcher::{Matcher, Predicate};
pub use window::window;

/// The signed "no match" value returned by [`index_or_sentinel`]
pub const NOT_FOUND: isize = -1;

/// Searches for the first occurence of `target` in `source`
#[inline]
pub fn find_one<T: Element>(source: &[T], target: T) -> Option<usize> {
    T::find_fixed(source, [target])
}

/// Searches for the first element in `source` equal to `target0` or `target1`
#[inline]
pub fn find_any2<T: Element>(source: &[T], target0: T, target1: T) -> Option<usize> {
    T::find_fixed(source, [target0, target1])
}

/// Searches for the first element in `source` equal to `target0`, `target1` or `target2`
#[inline]
pub fn find_any3<T: Element>(source: &[T], target0: T, target1: T, target2: T) -> Option<usize> {
    T::find_fixed(source, [target0, target1, target2])
}

/// Searches for the first element in `source` equal to any element of `candidates`
///
/// `candidates` may be in any order and may contain duplicates.
///
/// An empty candidate set always matches at index `0`, even if `source` is empty too.
/// This is not the same as a candidate set that never occurs, which returns `None`:
/// ```
/// assert_eq!(spanscan::find_any_set::<u16>(&[], &[]), Some(0));
/// assert_eq!(spanscan::find_any_set::<u16>(&[1, 2], &[]), Some(0));
/// assert_eq!(spanscan::find_any_set::<u16>(&[1, 2], &[3]), None);
/// ```
pub fn find_any_set<T: Element>(source: &[T], candidates: &[T]) -> Option<usize> {
    match *candidates {
        [] => Some(0),
        _ if source.is_empty() => None,
        [a] => find_one(source, a),
        [a, b] => find_any2(source, a, b),
        [a, b, c] => find_any3(source, a, b, c),
        _ => matcher::Strategy::for_candidates(candidates).find_in(source),
    }
}

/// Searches for the first element in `source` accepted by `matcher`
///
/// Elements are tested in order and the scan stops at the first match, so `matcher` is never
/// called on an element after it.
///
/// ```
/// use spanscan::Predicate;
///
/// let digits = Predicate(|c: u8| c.is_ascii_digit());
/// assert_eq!(spanscan::find_by(&b"localhost:5000"[..], &digits), Some(10));
/// ```
#[inline]
pub fn find_by<T: Copy, M: Matcher<T> + ?Sized>(source: &[T], matcher: &M) -> Option<usize> {
    simd::fallback::find_by(source, matcher)
}

/// Converts the result of a scan into a signed index, with [`NOT_FOUND`] for `None`
#[inline]
pub fn index_or_sentinel(found: Option<usize>) -> isize {
    // slices never hold more than `isize::MAX` elements
    found.map_or(NOT_FOUND, |index| index as isize)
}
