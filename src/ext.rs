use crate::element::Element;

/// Slice methods for the scans in this crate
///
/// ```
/// use spanscan::IndexOfAny;
///
/// let path: Vec<u16> = "/PATH/PATH2/?key=value HTTP/1.1".encode_utf16().collect();
/// assert_eq!(path.index_of_any3(b' ' as u16, b'%' as u16, b'?' as u16), Some(12));
/// ```
pub trait IndexOfAny<T: Element> {
    /// See [`find_one`](crate::find_one)
    fn index_of(&self, target: T) -> Option<usize>;

    /// See [`find_any2`](crate::find_any2)
    fn index_of_any2(&self, target0: T, target1: T) -> Option<usize>;

    /// See [`find_any3`](crate::find_any3)
    fn index_of_any3(&self, target0: T, target1: T, target2: T) -> Option<usize>;

    /// See [`find_any_set`](crate::find_any_set)
    fn index_of_any(&self, candidates: &[T]) -> Option<usize>;
}

impl<T: Element> IndexOfAny<T> for [T] {
    #[inline]
    fn index_of(&self, target: T) -> Option<usize> {
        crate::find_one(self, target)
    }

    #[inline]
    fn index_of_any2(&self, target0: T, target1: T) -> Option<usize> {
        crate::find_any2(self, target0, target1)
    }

    #[inline]
    fn index_of_any3(&self, target0: T, target1: T, target2: T) -> Option<usize> {
        crate::find_any3(self, target0, target1, target2)
    }

    #[inline]
    fn index_of_any(&self, candidates: &[T]) -> Option<usize> {
        crate::find_any_set(self, candidates)
    }
}
