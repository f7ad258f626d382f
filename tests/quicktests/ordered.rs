use ordered_tree::{Order, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set, checking the comparison counter never goes
/// backwards and always moves for a lookup in a non-empty tree.
fn do_ops<E>(ops: &[Op<E>], tree: &mut OrderedTree<E>, set: &mut BTreeSet<E>) -> bool
where
    E: Ord + Clone,
{
    for op in ops {
        let before = tree.comparisons();
        let was_empty = tree.is_empty();
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Find(v) => {
                if tree.find(v).map(|n| n.value()) != set.get(v) {
                    return false;
                }
            }
        }
        if !was_empty && tree.comparisons() <= before {
            return false;
        }
    }

    true
}

/// Follows `order`'s successor from the first value that order visits, collecting every value
/// reached.
fn successor_chain<E>(tree: &OrderedTree<E>, order: Order) -> Vec<E>
where
    E: Ord + Clone,
{
    let mut chain = Vec::new();
    let mut current = tree.traverse(order).next().cloned();
    while let Some(value) = current {
        current = tree.successor(order, &value).cloned();
        chain.push(value);
        if chain.len() > tree.len() {
            break;
        }
    }

    chain
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.inorder().eq(set.iter())
}

#[quickcheck]
fn inorder_is_sorted_and_deduplicated(xs: Vec<i32>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.len() == expected.len() && tree.inorder().eq(expected.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && !tree.contains(x))
}

#[quickcheck]
fn duplicate_inserts_keep_the_shape(xs: Vec<i8>, dupes: Vec<usize>) -> bool {
    let once: OrderedTree<_> = xs.iter().copied().collect();
    let mut twice = once.clone();
    if !xs.is_empty() {
        for i in dupes {
            twice.insert(xs[i % xs.len()]);
        }
    }

    // A BST's preorder pins down its shape.
    twice.len() == once.len() && twice.preorder().eq(once.preorder())
}

#[quickcheck]
fn successor_chains_match_traversals(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();

    Order::ALL.iter().all(|&order| {
        let chain = successor_chain(&tree, order);
        chain.len() == tree.len() && tree.traverse(order).eq(chain.iter())
    })
}

#[quickcheck]
fn node_successors_match_traversals(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let Some(root) = tree.root() else {
        return true;
    };

    Order::ALL.iter().all(|&order| {
        let mut visited = Vec::new();
        let mut node = tree.find(root.traverse(order).next().unwrap());
        while let Some(current) = node {
            visited.push(*current.value());
            node = current.next(order);
        }
        tree.traverse(order).copied().eq(visited)
    })
}

#[quickcheck]
fn subtree_traversals_are_contiguous_in_preorder(xs: Vec<i8>, pick: i8) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let Some(node) = tree.find(&pick) else {
        return true;
    };

    // A subtree's preorder is a contiguous run of the whole tree's preorder.
    let whole: Vec<_> = tree.preorder().collect();
    let sub: Vec<_> = node.preorder().collect();
    whole.windows(sub.len()).any(|window| window == sub.as_slice())
}

#[quickcheck]
fn extremes_match_inorder_ends(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();

    tree.min() == tree.inorder().next() && tree.max() == tree.inorder().last()
}

#[test]
fn worked_example() {
    let tree: OrderedTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(successor_chain(&tree, Order::Inorder), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(successor_chain(&tree, Order::Preorder), [5, 3, 1, 4, 8, 7, 9]);
    assert_eq!(successor_chain(&tree, Order::Postorder), [1, 4, 3, 7, 9, 8, 5]);
}
