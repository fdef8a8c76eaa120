use crate::errors::WindowError;

/// Returns the `len` elements of `backing` starting at `start`.
///
/// Scans over the returned slice only ever see those elements, whatever the rest of `backing` contains.
///
/// # Example
/// ```
/// let backing = [99u16, 1, 2, 3, 98];
/// let view = spanscan::window(&backing, 1, 3).unwrap();
///
/// assert_eq!(view, &[1, 2, 3]);
/// assert_eq!(spanscan::find_any2(view, 99, 98), None);
/// ```
pub fn window<T>(backing: &[T], start: usize, len: usize) -> Result<&[T], WindowError> {
    let end = start.checked_add(len).ok_or(WindowError::Overflow)?;

    backing.get(start..end).ok_or(WindowError::OutOfBounds {
        end,
        len: backing.len(),
    })
}
