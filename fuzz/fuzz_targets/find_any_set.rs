#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate spanscan;

fuzz_target!(|data: (Vec<u16>, Vec<u16>)| {
    let (haystack, candidates) = data;
    let expected = if candidates.is_empty() {
        Some(0)
    } else {
        haystack.iter().position(|x| candidates.contains(x))
    };

    assert_eq!(spanscan::find_any_set(&haystack, &candidates), expected);

    let wide: Vec<u32> = haystack.iter().map(|&x| u32::from(x)).collect();
    let wide_candidates: Vec<u32> = candidates.iter().map(|&x| u32::from(x)).collect();
    assert_eq!(spanscan::find_any_set(&wide, &wide_candidates), expected);
});
