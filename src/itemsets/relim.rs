//! Recursive elimination.
//!
//! A conditional database keeps one header element per frequent item, most
//! frequent first. A transaction is filed under its least frequent item, which is
//! the front of a transaction sorted under the frequency comparator; the rest of it
//! becomes a suffix of that element. Eliminating the last (least frequent) element
//! refiles each of its suffixes under the suffix's own front item.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::{
    database::reduce,
    item_counts::ItemCounts,
    itemset::{lexicographical_compare, set_union},
    types::{Count, Item, Itemset, Itemsets, Transaction},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    pub count: Count,
    pub itemset: Itemset,
}

/// Suffixes kept sorted under [`lexicographical_compare`], each itemset once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suffixes(Vec<Suffix>);

impl Suffixes {
    /// Adds `count` occurrences of `itemset`, merging with an equal suffix.
    pub fn add<F>(&mut self, itemset: &[Item], count: Count, compare: F)
    where
        F: Fn(&Item, &Item) -> Ordering,
    {
        let position = self
            .0
            .binary_search_by(|suffix| lexicographical_compare(&suffix.itemset, itemset, &compare));
        match position {
            Ok(i) => self.0[i].count += count,
            Err(i) => self.0.insert(
                i,
                Suffix {
                    count,
                    itemset: itemset.to_vec(),
                },
            ),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suffix> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderElement {
    pub item: Item,
    pub count: Count,
    pub suffixes: Suffixes,
}

impl HeaderElement {
    fn new(item: Item) -> Self {
        HeaderElement {
            item,
            count: 0,
            suffixes: Suffixes::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConditionalDatabase<'c> {
    header: Vec<HeaderElement>,
    counts: &'c ItemCounts,
}

impl<'c> ConditionalDatabase<'c> {
    /// Files every transaction of a reduced database. `frequent_items` is the
    /// most-frequent-first list from `counts`.
    pub fn initial(
        transactions: &[Transaction],
        counts: &'c ItemCounts,
        frequent_items: &[Item],
    ) -> Self {
        let mut database = ConditionalDatabase {
            header: frequent_items.iter().copied().map(HeaderElement::new).collect(),
            counts,
        };
        for transaction in transactions {
            database.add(transaction, 1);
        }
        database
    }

    pub fn header(&self) -> &[HeaderElement] {
        &self.header
    }

    fn position(&self, item: Item) -> Option<usize> {
        self.header
            .binary_search_by(|element| self.counts.compare(&item, &element.item))
            .ok()
    }

    /// Files `count` occurrences of `itemset` under its front item.
    fn add(&mut self, itemset: &[Item], count: Count) {
        let (first, rest) = match itemset.split_first() {
            Some(split) => split,
            None => return,
        };
        let position = match self.position(*first) {
            Some(position) => position,
            None => return,
        };

        let counts = self.counts;
        let element = &mut self.header[position];
        element.count += count;
        if !rest.is_empty() {
            element.suffixes.add(rest, count, counts.comparator());
        }
    }

    /// The suffixes of the last element, filed over the remaining items.
    pub fn prefix_database(&self) -> ConditionalDatabase<'c> {
        let remaining = self.header.len().saturating_sub(1);
        let mut database = ConditionalDatabase {
            header: self.header[..remaining]
                .iter()
                .map(|element| HeaderElement::new(element.item))
                .collect(),
            counts: self.counts,
        };
        if let Some(last) = self.header.last() {
            for suffix in last.suffixes.iter() {
                database.add(&suffix.itemset, suffix.count);
            }
        }
        database
    }

    /// Drops the last element and folds `prefix_database` (its suffixes, already
    /// refiled) into the remaining elements. Returns the dropped item.
    pub fn eliminate(&mut self, prefix_database: &ConditionalDatabase) -> Option<Item> {
        let last = self.header.pop()?;

        let compare = self.counts.comparator();
        for (element, refiled) in self.header.iter_mut().zip(&prefix_database.header) {
            element.count += refiled.count;
            for suffix in refiled.suffixes.iter() {
                element.suffixes.add(&suffix.itemset, suffix.count, compare);
            }
        }
        Some(last.item)
    }
}

pub fn mine(database: &[Transaction], min_support: Count) -> Itemsets {
    let min_support = min_support.max(1);
    let (transactions, counts) = reduce(database.to_vec(), min_support);

    let frequent_items = counts.frequent_items(min_support);
    let initial = ConditionalDatabase::initial(&transactions, &counts, &frequent_items);
    debug!("RElim header of {} items.", initial.header().len());

    let mut itemsets = Vec::new();
    relim(initial, &Vec::new(), min_support, &mut itemsets);
    itemsets
}

fn relim(
    mut database: ConditionalDatabase,
    prefix: &Itemset,
    min_support: Count,
    itemsets: &mut Itemsets,
) {
    while let Some(last) = database.header().last() {
        let count = last.count;
        let prefix_database = database.prefix_database();
        let item = match database.eliminate(&prefix_database) {
            Some(item) => item,
            None => break,
        };

        if count >= min_support {
            let itemset = set_union(prefix, &[item], database.counts.comparator());
            trace!("{:?} has support {}.", itemset, count);
            relim(prefix_database, &itemset, min_support, itemsets);
            itemsets.push(itemset);
        }
    }
}
