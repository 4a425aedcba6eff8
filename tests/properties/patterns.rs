//! Property tests for exclude pattern compilation.

use std::path::Path;

use proptest::prelude::*;

use foldertree::ExcludePatterns;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Compiling arbitrary patterns never panics.
    #[test]
    fn property_pattern_compilation_never_panics(
        patterns in proptest::collection::vec("(?s).{0,32}", 0..6)
    ) {
        let _ = ExcludePatterns::new(&patterns);
    }

    /// PROPERTY: A leading `*` followed by a literal suffix excludes exactly the names ending in it.
    #[test]
    fn property_leading_wildcard_matches_suffix(
        stem in "[a-z]{1,8}",
        ext in "[a-z]{1,4}",
        other in "[a-z]{1,4}",
    ) {
        prop_assume!(!other.ends_with(&ext));
        let patterns = ExcludePatterns::new([format!("*\\.{}$", ext)]).unwrap();

        let hit = format!("{}.{}", stem, ext);
        let miss = format!("{}.{}", stem, other);
        prop_assert!(patterns.is_excluded(&hit, &Path::new("/w").join(&hit)));
        prop_assert!(!patterns.is_excluded(&miss, &Path::new("/w").join(&miss)));
    }

    /// PROPERTY: Plain alphanumeric patterns are substring matches.
    #[test]
    fn property_plain_pattern_is_substring(needle in "[a-z]{1,6}", pre in "[a-z]{0,4}", post in "[a-z]{0,4}") {
        let patterns = ExcludePatterns::new([needle.as_str()]).unwrap();
        let name = format!("{}{}{}", pre, needle, post);
        prop_assert!(patterns.is_excluded(&name, Path::new("/w/x")));
    }
}
