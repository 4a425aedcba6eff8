#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // One pattern per line; compiling and matching must never panic
        if let Ok(patterns) = foldertree::ExcludePatterns::new(content.lines()) {
            let _ = patterns.is_excluded("name.txt", std::path::Path::new("/root/name.txt"));
        }
    }
});
