use std::cmp::Ordering;

use log::debug;
use rayon::prelude::*;

use crate::{
    combi::{join_step, prune_step},
    database::reduce,
    hash_tree::HashTree,
    itemset::is_subset,
    types::{Count, Item, Itemsets, Transaction},
};

const MAX_LEAF_SIZE: usize = 16; // arbitrary
const NUM_BUCKETS: u64 = 32; // arbitrary

/// Level-wise mining: size-k candidates are joined from the frequent (k-1)-itemsets,
/// pruned by their subsets, then counted against the reduced database.
pub fn mine(database: &[Transaction], min_support: Count) -> Itemsets {
    let min_support = min_support.max(1);
    let (mut transactions, counts) = reduce(database.to_vec(), min_support);
    let compare = counts.comparator();

    // 1-itemset
    let mut frequent: Itemsets = counts
        .frequent_items(min_support)
        .into_iter()
        .rev()
        .map(|item| vec![item])
        .collect();
    let mut itemsets = frequent.clone();
    debug!("Found {} frequent 1-itemsets.", frequent.len());

    // k-itemset, k >= 2
    let mut size = 1;
    while !frequent.is_empty() {
        size += 1;
        transactions.retain(|transaction| transaction.len() >= size);

        let mut tree = HashTree::new(MAX_LEAF_SIZE, NUM_BUCKETS);
        for itemset in &frequent {
            tree.insert(itemset.clone());
        }

        let candidates = join_step(frequent, compare);
        let num_candidates = candidates.len();
        let candidates = prune_step(candidates, &tree);
        debug!(
            "Level {}: {} candidates, {} after pruning.",
            size,
            num_candidates,
            candidates.len()
        );

        frequent = count_frequent(candidates, &transactions, min_support, compare);
        debug!("Found {} frequent {}-itemsets.", frequent.len(), size);
        itemsets.extend(frequent.iter().cloned());
    }

    itemsets
}

fn count_frequent<F>(
    candidates: Itemsets,
    transactions: &[Transaction],
    min_support: Count,
    compare: F,
) -> Itemsets
where
    F: Fn(&Item, &Item) -> Ordering + Sync,
{
    candidates
        .into_par_iter()
        .filter(|candidate| {
            let candidate_count = transactions
                .iter()
                .filter(|transaction| is_subset(candidate, transaction, &compare))
                .count();
            candidate_count >= min_support
        })
        .collect()
}
