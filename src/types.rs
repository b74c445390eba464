use std::{collections::HashMap, hash::BuildHasherDefault};

use crate::itemset::ItemsetHasher;

pub type Item = u64;
pub type Count = usize;

/// Items ordered under some comparator. No duplicates.
pub type Itemset = Vec<Item>;
pub type Itemsets = Vec<Itemset>;

pub type Transaction = Itemset;
pub type Database = Vec<Transaction>;

/// Transaction index, used by the vertical representation.
pub type Tid = usize;
pub type TidSet = Vec<Tid>;

pub type ItemsetLength = usize;
pub type ItemsetCounts = HashMap<Itemset, Count, BuildHasherDefault<ItemsetHasher>>;
pub type FrequentItemsets = HashMap<ItemsetLength, ItemsetCounts>;
