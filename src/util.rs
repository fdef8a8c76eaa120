use smallvec::SmallVec;

/// Copies `values` into inline storage, keeping only the first occurrence of each value
pub fn dedup<T: PartialEq + Copy, const N: usize>(values: &[T]) -> SmallVec<[T; N]> {
    let mut out = SmallVec::new();
    for &value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
