use crate::matcher::Matcher;

/// Searches for the first element in `haystack` accepted by `matcher`, one element at a time
pub fn find_by<T: Copy, M: Matcher<T> + ?Sized>(haystack: &[T], matcher: &M) -> Option<usize> {
    haystack.iter().position(|&c| matcher.matches(c))
}
