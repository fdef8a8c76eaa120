use smallvec::{smallvec, SmallVec};

use super::Matcher;
use crate::element::Element;

const WORD_BITS: usize = u64::BITS as usize;

/// One presence bit per possible element value.
///
/// Byte-sized domains fit in the inline words, 16-bit domains spill to a 8 KiB heap buffer.
#[derive(Debug, Clone)]
pub struct PresenceTable {
    bits: SmallVec<[u64; 4]>,
}

impl PresenceTable {
    /// Creates a table for a domain of `size` values and marks every candidate as present
    pub fn new<T: Element>(size: usize, candidates: &[T]) -> Self {
        let words = (size + WORD_BITS - 1) / WORD_BITS;
        let mut table = Self {
            bits: smallvec![0; words],
        };

        for index in candidates.iter().filter_map(|c| c.table_index()) {
            table.insert(index);
        }

        table
    }

    #[inline]
    fn insert(&mut self, index: usize) {
        if let Some(word) = self.bits.get_mut(index / WORD_BITS) {
            *word |= 1 << (index % WORD_BITS);
        }
    }

    /// Checks whether the value with the given table index was marked
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.bits
            .get(index / WORD_BITS)
            .map_or(false, |word| word & (1 << (index % WORD_BITS)) != 0)
    }
}

impl<T: Element> Matcher<T> for PresenceTable {
    #[inline(always)]
    fn matches(&self, value: T) -> bool {
        value.table_index().map_or(false, |index| self.contains(index))
    }
}
