//! Property tests for the pruner.

use proptest::prelude::*;
use proptest::sample::Index;

use foldertree::{prune, prune_at, render, TreeNode};

use super::strategies::{build, directories, shape};

fn placeholders_per_group_at_most_one(node: &TreeNode) -> bool {
    let count = node.children.iter().filter(|c| c.is_placeholder()).count();
    count <= 1 && node.children.iter().all(placeholders_per_group_at_most_one)
}

fn placeholder_is_last(node: &TreeNode) -> bool {
    let ok = match node.children.iter().position(|c| c.is_placeholder()) {
        Some(i) => i + 1 == node.children.len(),
        None => true,
    };
    ok && node.children.iter().all(placeholder_is_last)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Pruning never mutates its input.
    #[test]
    fn property_prune_does_not_mutate(s in shape(), pick in any::<Index>()) {
        let tree = build(&s);
        let before = tree.clone();
        let dirs = directories(&tree);
        let selected = vec![dirs[pick.index(dirs.len())].clone()];

        let _ = prune(&tree, &selected);
        let _ = prune_at(&tree, &selected);

        prop_assert_eq!(&tree, &before);
        prop_assert_eq!(render(&tree), render(&before));
    }

    /// PROPERTY: A single selection becomes the root.
    #[test]
    fn property_single_selection_is_root(s in shape(), pick in any::<Index>()) {
        let tree = build(&s);
        let dirs = directories(&tree);
        let selected = dirs[pick.index(dirs.len())].clone();

        let pruned = prune(&tree, std::slice::from_ref(&selected)).unwrap();

        prop_assert_eq!(&pruned.full_path, &selected);
        // Everything below a selection survives untouched.
        prop_assert_eq!(Some(&pruned), tree.find(&selected));
    }

    /// PROPERTY: Multiple selections stay reachable and collapse cleanly.
    #[test]
    fn property_multi_selection_keeps_selections(
        s in shape(),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let tree = build(&s);
        let dirs = directories(&tree);
        let selected = vec![
            dirs[a.index(dirs.len())].clone(),
            dirs[b.index(dirs.len())].clone(),
        ];

        let pruned = prune(&tree, &selected).unwrap();

        for sel in &selected {
            prop_assert!(pruned.find(sel).is_some(), "lost {:?}", sel);
        }
        prop_assert!(placeholders_per_group_at_most_one(&pruned));
        prop_assert!(placeholder_is_last(&pruned));
        prop_assert!(pruned.stats().total() <= tree.stats().total() + tree.stats().directories);
    }

    /// PROPERTY: Re-pruning a pruned tree changes nothing.
    #[test]
    fn property_prune_at_is_idempotent(s in shape(), pick in any::<Index>()) {
        let tree = build(&s);
        let dirs = directories(&tree);
        let selected = vec![dirs[pick.index(dirs.len())].clone()];

        let once = prune_at(&tree, &selected);
        let twice = prune_at(&once, &selected);

        prop_assert_eq!(once, twice);
    }
}
