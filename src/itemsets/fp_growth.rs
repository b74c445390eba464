use log::{debug, trace};

use crate::{
    database::reduce,
    fp_tree::FpTree,
    item_counts::ItemCounts,
    itemset::{power_set, sort_itemset},
    types::{Count, Itemsets, Transaction},
};

pub fn mine(database: &[Transaction], min_support: Count) -> Itemsets {
    let min_support = min_support.max(1);
    let (transactions, counts) = reduce(database.to_vec(), min_support);

    let mut itemsets = grow(&transactions, &counts, min_support);
    for itemset in itemsets.iter_mut() {
        sort_itemset(itemset, counts.comparator());
    }
    debug!("FP-Growth found {} frequent itemsets.", itemsets.len());
    itemsets
}

/// Mines `transactions` through their FP-tree. Every itemset found in the
/// conditional transactions of an item is extended by that item.
fn grow(transactions: &[Transaction], counts: &ItemCounts, min_support: Count) -> Itemsets {
    let frequent_items = counts.frequent_items(min_support);
    if frequent_items.is_empty() {
        return Vec::new();
    }

    let tree = FpTree::build(transactions, &frequent_items);
    trace!(
        "FP-tree of {} nodes over {} items.",
        tree.len(),
        frequent_items.len()
    );

    if let Some(path) = tree.single_path() {
        return power_set(&path, false);
    }

    let mut itemsets = Vec::new();
    for &item in frequent_items.iter().rev() {
        itemsets.push(vec![item]);

        let conditional = tree.conditional_transactions(item);
        let conditional_counts = ItemCounts::from_transactions(&conditional);
        for mut itemset in grow(&conditional, &conditional_counts, min_support) {
            itemset.push(item);
            itemsets.push(itemset);
        }
    }
    itemsets
}
