#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate spanscan;

// whatever sits outside the window must never be reported
fuzz_target!(|data: (Vec<u8>, usize, usize, Vec<u8>)| {
    let (backing, start, len, candidates) = data;
    let view = match spanscan::window(&backing, start, len) {
        Ok(view) => view,
        Err(_) => return,
    };

    if let Some(index) = spanscan::find_any_set(view, &candidates) {
        if !candidates.is_empty() {
            assert!(index < view.len());
            assert!(candidates.contains(&view[index]));
        }
    }
});
