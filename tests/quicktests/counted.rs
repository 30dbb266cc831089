use counting_bst::counted::Tree;

use std::collections::{BTreeMap, BTreeSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a map from value to occurrence
/// count. This way we can ensure that after a random smattering of inserts
/// and removes the tree and the model agree on membership, counts, and
/// sorted order.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, model: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(value.clone());
                *model.entry(value.clone()).or_insert(0) += 1;
            }
            Op::Remove(value) => {
                // Removal drops the node and its whole count.
                tree.remove(value);
                model.remove(value);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model);

    let sorted: Vec<_> = model.keys().copied().collect();
    let inorder: Vec<_> = tree.inorder().copied().collect();

    inorder == sorted && model.iter().all(|(value, count)| tree.count(value) == *count)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn counts_match_occurrences(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter()
        .all(|x| tree.count(x) == xs.iter().filter(|y| *y == x).count())
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for remove in &removes {
        tree.remove(remove);
    }

    let removed: BTreeSet<_> = removes.iter().collect();
    removes.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !removed.contains(x))
            .all(|x| tree.contains(x))
}

#[quickcheck]
fn inorder_strictly_ascending_after_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for remove in &removes {
        tree.remove(remove);
    }

    let inorder: Vec<_> = tree.inorder().copied().collect();
    inorder.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn clones_are_independent(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let before: Vec<_> = tree.inorder().copied().collect();
    let mut copy = tree.clone();
    for remove in &removes {
        copy.remove(remove);
    }

    let after: Vec<_> = tree.inorder().copied().collect();
    before == after
}
