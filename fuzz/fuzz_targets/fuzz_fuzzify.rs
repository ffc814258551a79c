#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Every prefix must be a char-boundary slice of the input
    let mut last = 0;
    for key in shorthand_index::utils::fuzzify(data) {
        assert!(data.starts_with(key));
        assert!(key.len() > last);
        last = key.len();
    }
    assert_eq!(last, data.len());
});
