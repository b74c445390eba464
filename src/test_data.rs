//! Fixture databases shared by the unit tests.

use std::collections::BTreeSet;

use crate::types::{Database, Item, Itemset};

pub const MILK: Item = 1;
pub const BREAD: Item = 2;
pub const CHEESE: Item = 3;
pub const BUTTER: Item = 4;
pub const COFFEE: Item = 5;
pub const SUGAR: Item = 6;
pub const FLOUR: Item = 7;
pub const CREAM: Item = 8;

pub const A: Item = b'a' as Item;
pub const B: Item = b'b' as Item;
pub const C: Item = b'c' as Item;
pub const D: Item = b'd' as Item;
pub const E: Item = b'e' as Item;
pub const F: Item = b'f' as Item;
pub const G: Item = b'g' as Item;

/// Ten shopping baskets; 35 itemsets are frequent at a minimum support of 4.
pub fn grocery_database() -> Database {
    vec![
        vec![MILK, CHEESE, BUTTER, BREAD, SUGAR, FLOUR, CREAM],
        vec![CHEESE, BUTTER, BREAD, COFFEE, SUGAR, FLOUR],
        vec![MILK, BUTTER, COFFEE, SUGAR, FLOUR],
        vec![MILK, BUTTER],
        vec![MILK, BUTTER, COFFEE],
        vec![MILK, FLOUR],
        vec![MILK, CHEESE, BUTTER, BREAD, COFFEE, SUGAR, FLOUR],
        vec![CREAM],
        vec![MILK, CHEESE, BUTTER, SUGAR],
        vec![MILK, CHEESE, BREAD, COFFEE, SUGAR, FLOUR],
    ]
}

/// 17 itemsets are frequent at a minimum support of 2.
pub fn letters_database() -> Database {
    vec![
        vec![A, D],
        vec![A, C, D, E],
        vec![B, D],
        vec![B, C, D],
        vec![B, C, F],
        vec![A, B, D],
        vec![B, D, E],
        vec![B, C, D, E],
        vec![G, B, C],
        vec![A, B, D],
    ]
}

/// Numerically sorted copy of an itemset.
pub fn sorted(itemset: &[Item]) -> Itemset {
    let mut itemset = itemset.to_vec();
    itemset.sort_unstable();
    itemset
}

/// Order-independent view of a mining result.
pub fn normalize(itemsets: &[Itemset]) -> BTreeSet<Itemset> {
    itemsets.iter().map(|itemset| sorted(itemset)).collect()
}
