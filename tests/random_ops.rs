use dlist::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Checks the list against a `Vec` model, walking it in both directions.
fn assert_matches(list: &DoublyLinkedList, model: &[i32]) {
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());

    let forward: Vec<i32> = list.iter().copied().collect();
    assert_eq!(forward, model);

    let mut backward: Vec<i32> = list.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(backward, forward);

    assert_eq!(list.head().map(Node::value), model.first().copied());
    assert_eq!(list.tail().map(Node::value), model.last().copied());
    if let Some(head) = list.head() {
        assert!(!head.has_prev());
    }
    if let Some(tail) = list.tail() {
        assert!(!tail.has_next());
    }
}

fn apply(rng: &mut StdRng, list: &mut DoublyLinkedList, model: &mut Vec<i32>) {
    let value = rng.gen_range(-5..5);

    match rng.gen_range(0..11) {
        0 => {
            list.append(value);
            model.push(value);
        }
        1 => {
            list.prepend(value);
            model.insert(0, value);
        }
        2 => {
            let node = list.remove_last();
            assert_eq!(node.as_ref().map(Node::value), model.pop());
            assert!(node.map_or(true, |n| !n.has_next() && !n.has_prev()));
        }
        3 => {
            let node = list.remove_first();
            let expected = if model.is_empty() {
                None
            } else {
                Some(model.remove(0))
            };
            assert_eq!(node.map(Node::into_value), expected);
        }
        4 => {
            let index = rng.gen_range(0..=model.len() + 1);
            let ok = list.insert(value, index);
            assert_eq!(ok, index <= model.len());
            if ok {
                model.insert(index, value);
            }
        }
        5 => {
            let index = rng.gen_range(0..=model.len() + 1);
            let node = list.remove(index);
            let expected = if index < model.len() {
                Some(model.remove(index))
            } else {
                None
            };
            assert_eq!(node.as_ref().map(Node::value), expected);
            assert!(node.map_or(true, |n| !n.has_next() && !n.has_prev()));
        }
        6 => {
            let index = rng.gen_range(0..=model.len() + 1);
            let ok = list.set(index, value);
            assert_eq!(ok, index < model.len());
            if ok {
                model[index] = value;
            }
        }
        7 => {
            list.reverse();
            model.reverse();
        }
        8 => {
            list.partition(value);
            let (mut below, rest): (Vec<i32>, Vec<i32>) =
                model.iter().copied().partition(|v| *v < value);
            below.extend(rest);
            *model = below;
        }
        9 => {
            list.swap_pairs();
            for pair in model.chunks_mut(2) {
                pair.reverse();
            }
        }
        _ => {
            let mirrored: Vec<i32> = model.iter().rev().copied().collect();
            assert_eq!(list.is_palindrome(), *model == mirrored);
        }
    }
}

#[test]
fn random_operation_sequences_keep_links_consistent() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut list = DoublyLinkedList::new();
        let mut model = Vec::new();

        for _ in 0..400 {
            apply(&mut rng, &mut list, &mut model);
            assert_matches(&list, &model);
        }

        for (i, expected) in model.iter().enumerate() {
            assert_eq!(list.get(i).map(Node::value), Some(*expected));
        }
        assert!(list.get(model.len()).is_none());
    }
}

#[test]
fn reverse_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(7);

    for len in 0..12 {
        let values: Vec<i32> = (0..len).map(|_| rng.gen_range(0..100)).collect();
        let original: DoublyLinkedList = values.iter().copied().collect();

        let mut list = original.clone();
        list.reverse();
        list.reverse();

        assert_eq!(list, original);
        assert_matches(&list, &values);
    }
}

#[test]
fn drain_to_empty() {
    let mut list = DoublyLinkedList::from([1, 2, 3, 4, 5, 6]);
    let mut drained = Vec::new();

    while let Some(node) = list.remove_first() {
        drained.push(node.into_value());
        if let Some(node) = list.remove_last() {
            drained.push(node.into_value());
        }
    }

    assert_eq!(drained, [1, 6, 2, 5, 3, 4]);
    assert_matches(&list, &[]);
}
