/// Fallback functions, used for short inputs and the last chunk not divisible by the chunk size
pub mod fallback;
/// nightly-only functions using portable_simd
#[cfg(feature = "simd")]
pub mod nightly;
/// Stable functions that test a whole chunk before branching
pub mod stable;

/// Number of elements tested per chunk
pub const LANES: usize = 16;

macro_rules! decide {
    ($nightly:expr, $stable:expr) => {{
        #[cfg(feature = "simd")]
        {
            $nightly
        }
        #[cfg(not(feature = "simd"))]
        {
            $stable
        }
    }};
}

pub(crate) use decide;
