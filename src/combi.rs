use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    hash_tree::HashTree,
    itemset::lexicographical_compare,
    types::{Item, Itemsets},
};

/// Joins every pair of k-itemsets sharing their first k-1 items into a (k+1)-candidate.
///
/// The itemsets must all be sorted under `compare`; the candidates come out sorted
/// under it too. Joining under a different comparator than the one the itemsets were
/// sorted with produces wrong candidates.
///
/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_step<F>(mut itemsets: Itemsets, compare: F) -> Itemsets
where
    F: Fn(&Item, &Item) -> Ordering,
{
    itemsets.sort_unstable_by(|x, y| lexicographical_compare(x, y, &compare));

    let mut candidates: Itemsets = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let prefix = prefix_of(&itemsets[i]);
        let skip = itemsets[i..]
            .iter()
            .take_while(|itemset| prefix_of(itemset) == prefix)
            .count();

        for (a, b) in itemsets[i..i + skip]
            .iter()
            .filter_map(|itemset| itemset.last())
            .tuple_combinations()
        {
            let mut candidate = Vec::with_capacity(prefix.len() + 2);
            candidate.extend_from_slice(prefix);
            candidate.push(*a);
            candidate.push(*b);
            candidates.push(candidate);
        }

        i += skip;
    }

    candidates
}

/// Keeps the candidates whose every (k-1)-subset is in `frequent`.
pub fn prune_step(candidates: Itemsets, frequent: &HashTree) -> Itemsets {
    candidates
        .into_iter()
        .filter(|candidate| !has_infrequent_subset(candidate, frequent))
        .collect()
}

fn has_infrequent_subset(candidate: &[Item], frequent: &HashTree) -> bool {
    candidate
        .iter()
        .copied()
        .combinations(candidate.len().saturating_sub(1))
        .any(|subset| !frequent.contains(&subset))
}

fn prefix_of(itemset: &[Item]) -> &[Item] {
    match itemset.split_last() {
        Some((_, prefix)) => prefix,
        None => &[],
    }
}
