use std::{
    cmp::Ordering,
    collections::{hash_map, HashMap},
};

use rayon::prelude::*;

use crate::{
    itemset::{is_subset, sort_itemset},
    types::{Count, Item, Itemset, ItemsetCounts, Transaction},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Occurrence count of every item in a database.
///
/// Also the source of the frequency comparator: ascending count, ties broken by
/// ascending item value. Items the counts have never seen weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCounts {
    counts: HashMap<Item, Count>,
}

impl ItemCounts {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut counts = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        for &item in transactions.iter().flatten() {
            *counts.entry(item).or_insert(0) += 1;
        }
        ItemCounts { counts }
    }

    pub fn get(&self, item: Item) -> Count {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Item, Count> {
        self.counts.iter()
    }

    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        self.get(*a).cmp(&self.get(*b)).then_with(|| a.cmp(b))
    }

    /// [`ItemCounts::compare`] as a closure, for the generic itemset primitives.
    pub fn comparator(&self) -> impl Fn(&Item, &Item) -> Ordering + Copy + Sync + '_ {
        move |a: &Item, b: &Item| self.compare(a, b)
    }

    /// Items with a count of at least `min_support`, most frequent first.
    pub fn frequent_items(&self, min_support: Count) -> Itemset {
        let mut items: Itemset = self
            .counts
            .iter()
            .filter(|(_, &count)| count >= min_support)
            .map(|(&item, _)| item)
            .collect();
        items.sort_unstable_by(|a, b| self.compare(b, a));
        items
    }
}

impl From<HashMap<Item, Count>> for ItemCounts {
    fn from(counts: HashMap<Item, Count>) -> Self {
        ItemCounts { counts }
    }
}

/// Number of transactions containing each of `itemsets`.
///
/// Transactions and itemsets are sorted under `compare` before the subset tests, so
/// neither needs to be pre-sorted. Keys are the itemsets exactly as given.
pub fn support_counts<F>(
    database: &[Transaction],
    itemsets: &[Itemset],
    compare: F,
) -> ItemsetCounts
where
    F: Fn(&Item, &Item) -> Ordering + Sync,
{
    let transactions: Vec<Transaction> = database
        .iter()
        .map(|transaction| {
            let mut transaction = transaction.clone();
            sort_itemset(&mut transaction, &compare);
            transaction
        })
        .collect();

    itemsets
        .par_iter()
        .map(|itemset| {
            let mut sorted = itemset.clone();
            sort_itemset(&mut sorted, &compare);
            let count = transactions
                .iter()
                .filter(|transaction| is_subset(&sorted, transaction, &compare))
                .count();
            (itemset.clone(), count)
        })
        .collect()
}

/// Relative support of `itemset`; 0 when it was never counted.
pub fn support(counts: &ItemsetCounts, itemset: &[Item], num_transactions: usize) -> f32 {
    if num_transactions == 0 {
        return 0.0;
    }
    counts.get(itemset).copied().unwrap_or(0) as f32 / num_transactions as f32
}
