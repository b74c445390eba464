use std::{cmp::Ordering, collections::HashMap};

use itertools::{EitherOrBoth, Itertools};
use log::debug;

use crate::{
    database::reduce,
    types::{Count, Item, Itemset, Itemsets, Tid, TidSet, Transaction},
};

/// Item to the ascending indices of the transactions holding it, items sorted
/// under `compare`.
pub fn to_vertical_database<F>(database: &[Transaction], compare: F) -> Vec<(Item, TidSet)>
where
    F: Fn(&Item, &Item) -> Ordering,
{
    let mut tidsets: HashMap<Item, TidSet> = HashMap::new();
    for (tid, transaction) in database.iter().enumerate() {
        for &item in transaction {
            tidsets.entry(item).or_insert_with(Vec::new).push(tid);
        }
    }

    let mut vertical: Vec<(Item, TidSet)> = tidsets.into_iter().collect();
    vertical.sort_unstable_by(|(a, _), (b, _)| compare(a, b));
    vertical
}

/// Tids present in both sorted tid-sets.
pub fn tidset_intersection(x: &[Tid], y: &[Tid]) -> TidSet {
    x.iter()
        .merge_join_by(y.iter(), |a, b| a.cmp(b))
        .filter_map(|either| match either {
            EitherOrBoth::Both(&tid, _) => Some(tid),
            _ => None,
        })
        .collect()
}

pub fn mine(database: &[Transaction], min_support: Count) -> Itemsets {
    let min_support = min_support.max(1);
    let (transactions, counts) = reduce(database.to_vec(), min_support);

    let vertical = to_vertical_database(&transactions, counts.comparator());
    debug!(
        "Vertical database of {} items over {} transactions.",
        vertical.len(),
        transactions.len()
    );

    let mut itemsets = Vec::new();
    extend(&Vec::new(), &vertical, min_support, &mut itemsets);
    itemsets
}

/// Depth-first extension of `prefix`. Each entry's tid-set already lists the
/// transactions holding `prefix` plus that item, and every entry is frequent.
/// Items only combine with the entries after them.
fn extend(
    prefix: &Itemset,
    entries: &[(Item, TidSet)],
    min_support: Count,
    itemsets: &mut Itemsets,
) {
    for (i, (item, tidset)) in entries.iter().enumerate() {
        let mut itemset = prefix.clone();
        itemset.push(*item);

        let suffix: Vec<(Item, TidSet)> = entries[i + 1..]
            .iter()
            .filter_map(|(other, other_tidset)| {
                let tids = tidset_intersection(tidset, other_tidset);
                if tids.len() >= min_support {
                    Some((*other, tids))
                } else {
                    None
                }
            })
            .collect();

        if !suffix.is_empty() {
            extend(&itemset, &suffix, min_support, itemsets);
        }
        itemsets.push(itemset);
    }
}
