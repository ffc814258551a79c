#![no_main]

use libfuzzer_sys::fuzz_target;
use shorthand_index::definitions::Definitions;
use shorthand_index::index::Index;

fuzz_target!(|data: &str| {
    // Arbitrary JSON must either be rejected or index without panicking
    if let Ok(defs) = Definitions::from_json_str(data) {
        let _ = defs.validate();
        let index = Index::build(defs);
        for tag in shorthand_index::utils::TAGS {
            assert!(index.property(tag).is_blocked());
        }
    }
});
