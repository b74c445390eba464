use std::cmp::Ordering;

use log::debug;

use crate::{
    item_counts::ItemCounts,
    itemset::{lexicographical_compare, sort_itemset},
    types::{Count, Database, Item, Transaction},
};

pub fn item_counts(database: &[Transaction]) -> ItemCounts {
    ItemCounts::from_transactions(database)
}

/// Sorts the items of every transaction, then the transactions themselves, under
/// `compare` and its [`lexicographical_compare`] extension.
pub fn sort_lexicographically<F>(database: &mut Database, compare: F)
where
    F: Fn(&Item, &Item) -> Ordering,
{
    for transaction in database.iter_mut() {
        sort_itemset(transaction, &compare);
    }
    database.sort_by(|x, y| lexicographical_compare(x, y, &compare));
}

/// Drops infrequent items and the transactions left empty, then sorts the rest
/// under the frequency comparator of the surviving counts.
///
/// Every miner starts from this canonical form. Reducing an already reduced
/// database with the same `min_support` changes nothing.
pub fn reduce(mut database: Database, min_support: Count) -> (Database, ItemCounts) {
    let num_transactions = database.len();
    let counts = item_counts(&database);

    for transaction in database.iter_mut() {
        transaction.retain(|&item| counts.get(item) >= min_support);
    }
    database.retain(|transaction| !transaction.is_empty());

    let counts = item_counts(&database);
    sort_lexicographically(&mut database, counts.comparator());

    debug!(
        "Reduced {} transactions to {} over {} frequent items.",
        num_transactions,
        database.len(),
        counts.len()
    );

    (database, counts)
}
