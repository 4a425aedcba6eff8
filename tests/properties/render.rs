//! Property tests for the renderer.

use proptest::prelude::*;

use foldertree::{render, render_with, Charset};

use super::strategies::{build, shape};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One line per node, each ending in the node's connector + name.
    #[test]
    fn property_render_one_line_per_node(s in shape()) {
        let tree = build(&s);
        let out = render(&tree);

        prop_assert_eq!(out.lines().count(), tree.stats().total());
        prop_assert!(out.ends_with('\n'));
        prop_assert!(out.starts_with("└── root\n"));
    }

    /// PROPERTY: Rendering is deterministic.
    #[test]
    fn property_render_is_repeatable(s in shape()) {
        let tree = build(&s);
        prop_assert_eq!(render(&tree), render(&tree));
    }

    /// PROPERTY: ASCII output is pure ASCII and has the same shape.
    #[test]
    fn property_ascii_render_matches_unicode_layout(s in shape()) {
        let tree = build(&s);
        let unicode = render_with(&tree, Charset::Unicode);
        let ascii = render_with(&tree, Charset::Ascii);

        prop_assert!(ascii.is_ascii());
        prop_assert_eq!(unicode.lines().count(), ascii.lines().count());
        for (u, a) in unicode.lines().zip(ascii.lines()) {
            prop_assert_eq!(u.chars().count(), a.chars().count());
        }
    }
}
