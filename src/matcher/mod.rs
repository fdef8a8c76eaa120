use crate::element::Element;
use crate::simd::fallback;

/// Hashed candidate sets, used for wide element types
pub mod hashed;
/// Linear probing over a small, deduplicated candidate list
pub mod probe;
/// Presence bitmaps over small value domains
pub mod table;

pub use hashed::HashedSet;
pub use probe::Probe;
pub use table::PresenceTable;

/// Largest candidate set that is probed linearly instead of being put into a table or hash set.
pub const PROBE_LIMIT: usize = 16;

/// Decides whether a single element is one of the values being searched for.
///
/// The scan loops in [`crate::simd`] are generic over this, so any membership strategy can be
/// plugged in without touching the loop itself.
pub trait Matcher<T> {
    /// Returns `true` if `value` is one of the searched values
    fn matches(&self, value: T) -> bool;
}

impl<T, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    #[inline(always)]
    fn matches(&self, value: T) -> bool {
        (**self).matches(value)
    }
}

/// Fixed-arity needles compare against every target with a branchless chain of equality tests.
impl<T: PartialEq, const N: usize> Matcher<T> for [T; N] {
    #[inline(always)]
    fn matches(&self, value: T) -> bool {
        let mut mask = false;
        for target in self {
            mask |= *target == value;
        }
        mask
    }
}

/// Wraps an arbitrary predicate so it can be used as a [`Matcher`]
#[derive(Debug, Clone, Copy)]
pub struct Predicate<F>(pub F);

impl<T, F: Fn(T) -> bool> Matcher<T> for Predicate<F> {
    #[inline(always)]
    fn matches(&self, value: T) -> bool {
        (self.0)(value)
    }
}

/// The membership strategy chosen for a runtime candidate set
#[derive(Debug, Clone)]
pub enum Strategy<T: Element> {
    /// Few candidates, compared one by one
    Probe(Probe<T>),
    /// Many candidates over a small value domain
    Table(PresenceTable),
    /// Many candidates over a wide value domain
    Hashed(HashedSet<T>),
}

impl<T: Element> Strategy<T> {
    /// Picks and builds a strategy based on the number of candidates and the element type
    pub fn for_candidates(candidates: &[T]) -> Self {
        if candidates.len() <= PROBE_LIMIT {
            return Strategy::Probe(Probe::new(candidates));
        }

        match T::TABLE_SIZE {
            Some(size) => Strategy::Table(PresenceTable::new(size, candidates)),
            None => Strategy::Hashed(HashedSet::new(candidates)),
        }
    }

    /// Searches for the first element in `haystack` that is one of the candidates
    #[inline]
    pub fn find_in(&self, haystack: &[T]) -> Option<usize> {
        // dispatch once, so the scan loop is monomorphized for the concrete matcher
        match self {
            Strategy::Probe(probe) => fallback::find_by(haystack, probe),
            Strategy::Table(table) => fallback::find_by(haystack, table),
            Strategy::Hashed(set) => fallback::find_by(haystack, set),
        }
    }
}
