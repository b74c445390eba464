use std::collections::HashMap;

use log::info;

use crate::{
    error::FimError,
    item_counts::{support_counts, ItemCounts},
    itemsets::{mine, Algorithm},
    types::{Count, FrequentItemsets, ItemsetCounts, ItemsetLength, Transaction},
};

/// Minimum support, either as a transaction count or as a share of the database.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(Count),
    Ratio(f32),
}

impl MinSupport {
    /// Absolute threshold for a database of `num_transactions`. Ratios round up.
    pub fn to_count(self, num_transactions: usize) -> Result<Count, FimError> {
        match self {
            MinSupport::Count(count) => Ok(count),
            MinSupport::Ratio(ratio) if (0.0..=1.0).contains(&ratio) => {
                Ok((ratio * num_transactions as f32).ceil() as Count)
            }
            MinSupport::Ratio(ratio) => Err(FimError::SupportOutOfRange(ratio)),
        }
    }
}

impl From<Count> for MinSupport {
    fn from(count: Count) -> Self {
        MinSupport::Count(count)
    }
}

impl From<f32> for MinSupport {
    fn from(ratio: f32) -> Self {
        MinSupport::Ratio(ratio)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    pub algorithm: Algorithm,
    pub min_support: MinSupport,
    /// Longest itemset reported; unbounded when `None`.
    pub max_len: Option<ItemsetLength>,
}

impl MiningConfig {
    pub fn new(algorithm: Algorithm, min_support: impl Into<MinSupport>) -> Self {
        MiningConfig {
            algorithm,
            min_support: min_support.into(),
            max_len: None,
        }
    }

    pub fn with_max_len(mut self, max_len: ItemsetLength) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Mines `database` and groups the frequent itemsets by length, with their
    /// support counts.
    pub fn run(&self, database: &[Transaction]) -> Result<FrequentItemsets, FimError> {
        let min_support = self.min_support.to_count(database.len())?;

        let mut itemsets = mine(self.algorithm, database, min_support);
        if let Some(max_len) = self.max_len {
            itemsets.retain(|itemset| itemset.len() <= max_len);
        }

        let counts = ItemCounts::from_transactions(database);
        let supports = support_counts(database, &itemsets, counts.comparator());

        let mut frequent_itemsets: FrequentItemsets = HashMap::new();
        for (itemset, count) in supports {
            frequent_itemsets
                .entry(itemset.len())
                .or_insert_with(ItemsetCounts::default)
                .insert(itemset, count);
        }

        info!(
            "{} found {} frequent itemsets in {} transactions at min support {}.",
            self.algorithm,
            itemsets.len(),
            database.len(),
            min_support
        );

        Ok(frequent_itemsets)
    }
}
