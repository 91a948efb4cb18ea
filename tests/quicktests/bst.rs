use node_collections::bst::Tree;

use std::collections::HashSet;

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn count_is_multiplicity(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter()
            .all(|x| tree.count(x) == xs.iter().filter(|&y| y == x).count())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut still_present = xs;
        for delete in &deletes {
            // Each `remove` only takes out one occurrence.
            let removed = tree.remove(delete);
            match still_present.iter().position(|x| x == delete) {
                Some(pos) => {
                    still_present.swap_remove(pos);
                    assert!(removed);
                }
                None => assert!(!removed),
            }
        }

        still_present.sort_unstable();
        tree.iter().copied().eq(still_present)
    }
}

quickcheck::quickcheck! {
    fn insert_then_remove_is_a_no_op(xs: Vec<i8>, k: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().filter(|&x| x != k).collect();
        let before: Vec<_> = tree.iter().copied().collect();

        tree.insert(k);
        tree.remove(&k);

        tree.iter().copied().eq(before)
    }
}

#[test]
fn scenario() {
    let mut tree = Tree::new();
    for key in [7, 3, 9, 1, 5] {
        tree.insert(key);
    }

    assert!(tree.contains(&5));
    assert!(!tree.contains(&6));
    assert_eq!(tree.height(), 3);
}

#[test]
fn height_of_small_trees() {
    let mut tree = Tree::new();
    assert_eq!(tree.height(), 0);

    tree.insert("m");
    assert_eq!(tree.height(), 1);

    tree.insert("a");
    tree.insert("z");
    assert_eq!(tree.height(), 2);
}
