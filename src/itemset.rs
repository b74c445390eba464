//! Ordered-itemset primitives shared by every miner.
//!
//! All set operations here treat an [`Itemset`] as a sorted set and require both
//! operands to be sorted under the *same* comparator. Nothing is checked at runtime
//! beyond `debug_assert!`: feeding unsorted input gives an unspecified result.

use std::{cmp::Ordering, hash::Hasher};

use itertools::{EitherOrBoth, Itertools};

use crate::types::{Item, Itemset, Itemsets};

const GOLDEN_RATIO: u64 = 0x9e37_79b9;

/// Numeric order of item identifiers.
pub fn natural_order(a: &Item, b: &Item) -> Ordering {
    a.cmp(b)
}

/// True when the items are strictly increasing under `compare`.
pub fn is_sorted_by<F>(itemset: &[Item], compare: F) -> bool
where
    F: Fn(&Item, &Item) -> Ordering,
{
    itemset
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) == Ordering::Less)
}

pub fn sort_itemset<F>(itemset: &mut Itemset, compare: F)
where
    F: Fn(&Item, &Item) -> Ordering,
{
    itemset.sort_unstable_by(|a, b| compare(a, b));
}

pub fn contains(itemset: &[Item], item: Item) -> bool {
    itemset.iter().any(|&x| x == item)
}

/// Every element of `x` appears in `y`. Linear merge scan, O(|x| + |y|).
pub fn is_subset<F>(x: &[Item], y: &[Item], compare: F) -> bool
where
    F: Fn(&Item, &Item) -> Ordering,
{
    debug_assert!(is_sorted_by(x, &compare) && is_sorted_by(y, &compare));

    if x.len() > y.len() {
        return false;
    }

    let mut rest = y.iter();
    'next: for a in x {
        for b in rest.by_ref() {
            match compare(a, b) {
                Ordering::Equal => continue 'next,
                // `a` would have come before `b`, so it is not in `y`
                Ordering::Less => return false,
                Ordering::Greater => {}
            }
        }
        return false;
    }
    true
}

pub fn set_union<F>(x: &[Item], y: &[Item], compare: F) -> Itemset
where
    F: Fn(&Item, &Item) -> Ordering,
{
    debug_assert!(is_sorted_by(x, &compare) && is_sorted_by(y, &compare));

    x.iter()
        .merge_join_by(y.iter(), |a, b| compare(*a, *b))
        .map(|either| match either {
            EitherOrBoth::Both(&item, _) | EitherOrBoth::Left(&item) | EitherOrBoth::Right(&item) => {
                item
            }
        })
        .collect()
}

/// Elements of `x` that are not in `y`.
pub fn set_difference<F>(x: &[Item], y: &[Item], compare: F) -> Itemset
where
    F: Fn(&Item, &Item) -> Ordering,
{
    debug_assert!(is_sorted_by(x, &compare) && is_sorted_by(y, &compare));

    x.iter()
        .merge_join_by(y.iter(), |a, b| compare(*a, *b))
        .filter_map(|either| match either {
            EitherOrBoth::Left(&item) => Some(item),
            _ => None,
        })
        .collect()
}

/// Lexicographic extension of `compare` to sequences, except that a sequence which
/// is a proper prefix of another compares as *greater*: `[a, b] > [a, b, c]`.
///
/// The conditional databases of RElim keep their suffix lists in this order.
pub fn lexicographical_compare<F>(x: &[Item], y: &[Item], compare: F) -> Ordering
where
    F: Fn(&Item, &Item) -> Ordering,
{
    for (a, b) in x.iter().zip(y) {
        match compare(a, b) {
            Ordering::Equal => {}
            ordering => return ordering,
        }
    }
    y.len().cmp(&x.len())
}

/// All subsets of `items`, each keeping the order of `items`.
pub fn power_set(items: &[Item], include_empty: bool) -> Itemsets {
    items
        .iter()
        .copied()
        .powerset()
        .filter(|subset| include_empty || !subset.is_empty())
        .collect()
}

fn combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Order-sensitive hash of an item sequence.
pub fn hash_code(itemset: &[Item]) -> u64 {
    itemset.iter().fold(0, |seed, &item| combine(seed, item))
}

/// [`Hasher`] running the same combine step as [`hash_code`] over whatever the key
/// feeds it. For an [`Itemset`] key that is the length followed by every item.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemsetHasher {
    seed: u64,
}

impl Hasher for ItemsetHasher {
    fn finish(&self) -> u64 {
        self.seed
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut words = bytes.chunks_exact(8);
        for word in words.by_ref() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(word);
            self.seed = combine(self.seed, u64::from_ne_bytes(buf));
        }
        for &byte in words.remainder() {
            self.seed = combine(self.seed, u64::from(byte));
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.seed = combine(self.seed, value);
    }

    fn write_usize(&mut self, value: usize) {
        self.seed = combine(self.seed, value as u64);
    }
}
