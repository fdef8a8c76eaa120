use core::fmt;
use std::error::Error;

/// An error that occurred during a call to [`window`](crate::window)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum WindowError {
    /// `start + len` does not fit in a `usize`
    Overflow,
    /// The window ends past the end of the backing slice
    OutOfBounds {
        /// Exclusive end of the requested window
        end: usize,
        /// Length of the backing slice
        len: usize,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            WindowError::Overflow => {
                write!(f, "The window end is too large to fit in a `usize`")
            }
            WindowError::OutOfBounds { end, len } => {
                write!(f, "The window ends at {end}, but the backing slice has length {len}")
            }
        }
    }
}

impl Error for WindowError {}
