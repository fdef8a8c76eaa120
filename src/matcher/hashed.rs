use std::collections::HashSet;

use super::Matcher;
use crate::element::Element;

/// A hashed candidate set for element types without a presence table
#[derive(Debug, Clone)]
pub struct HashedSet<T: Element>(HashSet<T>);

impl<T: Element> HashedSet<T> {
    /// Collects `candidates` into a set
    pub fn new(candidates: &[T]) -> Self {
        Self(candidates.iter().copied().collect())
    }
}

impl<T: Element> Matcher<T> for HashedSet<T> {
    #[inline]
    fn matches(&self, value: T) -> bool {
        self.0.contains(&value)
    }
}
