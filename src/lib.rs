//! Frequent itemset mining with Apriori, FP-Growth, Eclat and RElim.
//!
//! Every miner has the signature of [`itemsets::MineFn`] and returns the same set of
//! itemsets for the same database and minimum support; only the order differs.
//! [`config::MiningConfig`] adds ratio thresholds, a length cap and support counts.

pub mod combi;
pub mod config;
pub mod database;
pub mod error;
pub mod fp_tree;
pub mod hash_tree;
pub mod item_counts;
pub mod itemset;
pub mod itemsets;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

#[cfg(test)]
mod test_data;

pub use config::{MinSupport, MiningConfig};
pub use error::FimError;
pub use item_counts::{support_counts, ItemCounts};
pub use itemsets::{mine, Algorithm, MineFn};
pub use types::{Count, Database, FrequentItemsets, Item, Itemset, Itemsets, Transaction};
