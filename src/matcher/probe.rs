use smallvec::SmallVec;

use super::{Matcher, PROBE_LIMIT};
use crate::element::Element;
use crate::util;

/// A small candidate list, deduplicated and stored inline
#[derive(Debug, Clone)]
pub struct Probe<T: Element> {
    candidates: SmallVec<[T; PROBE_LIMIT]>,
}

impl<T: Element> Probe<T> {
    /// Creates a probe over `candidates`, dropping duplicates
    pub fn new(candidates: &[T]) -> Self {
        Self {
            candidates: util::dedup(candidates),
        }
    }
}

impl<T: Element> Matcher<T> for Probe<T> {
    #[inline]
    fn matches(&self, value: T) -> bool {
        self.candidates.contains(&value)
    }
}
