#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate spanscan;

fuzz_target!(|data: (Vec<u16>, u16, u16, u16)| {
    let (haystack, a, b, c) = data;
    let expected = haystack.iter().position(|&x| x == a || x == b || x == c);

    assert_eq!(spanscan::find_any3(&haystack, a, b, c), expected);
    assert_eq!(spanscan::simd::fallback::find_by(&haystack, &[a, b, c]), expected);
    assert_eq!(
        spanscan::find_any2(&haystack, a, b),
        haystack.iter().position(|&x| x == a || x == b)
    );
    assert_eq!(
        spanscan::find_one(&haystack, a),
        haystack.iter().position(|&x| x == a)
    );
});
