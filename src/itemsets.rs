pub mod apriori;
pub mod eclat;
pub mod fp_growth;
pub mod relim;

use std::{fmt, str::FromStr};

use crate::{
    error::FimError,
    types::{Count, Itemsets, Transaction},
};

/// Signature shared by every miner.
pub type MineFn = fn(&[Transaction], Count) -> Itemsets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Apriori,
    FpGrowth,
    Eclat,
    Relim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Apriori,
        Algorithm::FpGrowth,
        Algorithm::Eclat,
        Algorithm::Relim,
    ];

    pub fn miner(self) -> MineFn {
        match self {
            Algorithm::Apriori => apriori::mine,
            Algorithm::FpGrowth => fp_growth::mine,
            Algorithm::Eclat => eclat::mine,
            Algorithm::Relim => relim::mine,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Apriori => "apriori",
            Algorithm::FpGrowth => "fp-growth",
            Algorithm::Eclat => "eclat",
            Algorithm::Relim => "relim",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Apriori
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| FimError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Frequent itemsets of `database`, each itemset sorted by ascending item frequency.
pub fn mine(algorithm: Algorithm, database: &[Transaction], min_support: Count) -> Itemsets {
    (algorithm.miner())(database, min_support)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        item_counts::{support_counts, ItemCounts},
        itemset::power_set,
        test_data::*,
        types::{Database, Item, Itemset},
    };
    use maplit::{btreeset, hashmap};
    use proptest::prelude::*;
    use std::collections::{BTreeSet, HashMap};

    fn grocery_expected() -> BTreeSet<Itemset> {
        let mut expected = btreeset! {
            vec![MILK], vec![BREAD], vec![CHEESE], vec![BUTTER],
            vec![COFFEE], vec![SUGAR], vec![FLOUR],

            vec![MILK, CHEESE], vec![MILK, BUTTER], vec![MILK, COFFEE],
            vec![MILK, SUGAR], vec![MILK, FLOUR],
            vec![BREAD, CHEESE], vec![BREAD, SUGAR], vec![BREAD, FLOUR],
            vec![CHEESE, BUTTER], vec![CHEESE, SUGAR], vec![CHEESE, FLOUR],
            vec![BUTTER, COFFEE], vec![BUTTER, SUGAR], vec![BUTTER, FLOUR],
            vec![COFFEE, SUGAR], vec![COFFEE, FLOUR], vec![SUGAR, FLOUR],

            vec![MILK, CHEESE, SUGAR], vec![MILK, BUTTER, SUGAR], vec![MILK, SUGAR, FLOUR],
            vec![BREAD, CHEESE, SUGAR], vec![BREAD, CHEESE, FLOUR], vec![BREAD, SUGAR, FLOUR],
            vec![CHEESE, BUTTER, SUGAR], vec![CHEESE, SUGAR, FLOUR], vec![BUTTER, SUGAR, FLOUR],
            vec![COFFEE, SUGAR, FLOUR],

            vec![BREAD, CHEESE, SUGAR, FLOUR],
        };
        expected = expected.iter().map(|itemset| sorted(itemset)).collect();
        expected
    }

    #[test]
    fn algorithm_names() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(*algorithm));
        }
        assert_eq!("FP-Growth".parse::<Algorithm>(), Ok(Algorithm::FpGrowth));
        assert_eq!(
            "fpgrowth".parse::<Algorithm>(),
            Err(FimError::UnknownAlgorithm("fpgrowth".to_owned()))
        );
    }

    #[test]
    fn grocery_database_every_algorithm() {
        let expected = grocery_expected();
        assert_eq!(expected.len(), 35);

        for &algorithm in Algorithm::ALL.iter() {
            let itemsets = mine(algorithm, &grocery_database(), 4);
            assert_eq!(itemsets.len(), 35, "{}", algorithm);
            assert_eq!(normalize(&itemsets), expected, "{}", algorithm);

            let mut sizes: HashMap<usize, usize> = HashMap::new();
            for itemset in &itemsets {
                *sizes.entry(itemset.len()).or_insert(0) += 1;
            }
            assert_eq!(sizes, hashmap! { 1 => 7, 2 => 17, 3 => 10, 4 => 1 }, "{}", algorithm);

            let found = normalize(&itemsets);
            assert!(!found.contains(&sorted(&[MILK, CHEESE, SUGAR, FLOUR])));
            assert!(!found.contains(&sorted(&[MILK, BUTTER, SUGAR, FLOUR])));
        }
    }

    #[test]
    fn letters_database_supports() {
        let database = letters_database();
        let expected: HashMap<Itemset, usize> = hashmap! {
            vec![A] => 4, vec![A, B] => 2, vec![A, B, D] => 2, vec![A, D] => 4,
            vec![B] => 8, vec![B, C] => 4, vec![B, C, D] => 2, vec![B, D] => 6,
            vec![B, D, E] => 2, vec![B, E] => 2, vec![C] => 5, vec![C, D] => 3,
            vec![C, D, E] => 2, vec![C, E] => 2, vec![D] => 8, vec![D, E] => 3,
            vec![E] => 3,
        };

        for &algorithm in Algorithm::ALL.iter() {
            let itemsets = mine(algorithm, &database, 2);
            let counts = ItemCounts::from_transactions(&database);
            let supports = support_counts(&database, &itemsets, counts.comparator());

            let supports: HashMap<Itemset, usize> = supports
                .into_iter()
                .map(|(itemset, count)| (sorted(&itemset), count))
                .collect();
            assert_eq!(supports, expected, "{}", algorithm);
        }
    }

    #[test]
    fn boundaries() {
        for &algorithm in Algorithm::ALL.iter() {
            assert!(mine(algorithm, &grocery_database(), 11).is_empty());
            assert!(mine(algorithm, &Database::new(), 1).is_empty());
            assert!(mine(algorithm, &Database::new(), 0).is_empty());
            assert!(mine(algorithm, &[Transaction::new(), Transaction::new()], 1).is_empty());
        }
    }

    #[test]
    fn zero_support_means_one() {
        let database = vec![vec![A, B], vec![C]];
        for &algorithm in Algorithm::ALL.iter() {
            assert_eq!(
                normalize(&mine(algorithm, &database, 0)),
                btreeset! { vec![A], vec![B], vec![C], vec![A, B] },
                "{}",
                algorithm
            );
        }
    }

    fn database() -> impl Strategy<Value = Database> {
        prop::collection::vec(
            prop::collection::btree_set(0u64..10, 0..7)
                .prop_map(|set| set.into_iter().collect::<Transaction>()),
            0..30,
        )
    }

    /// Few distinct items, including both ends of the item range, and every other
    /// transaction repeated.
    fn sparse_database() -> impl Strategy<Value = Database> {
        let pool = vec![0, 1, 2, 3, 7, u64::MAX];
        prop::collection::vec(
            prop::collection::btree_set(prop::sample::select(pool), 0..5)
                .prop_map(|set| set.into_iter().collect::<Transaction>()),
            0..12,
        )
        .prop_map(|mut database| {
            let repeated: Database = database.iter().step_by(2).cloned().collect();
            database.extend(repeated);
            database
        })
    }

    /// Counts every non-empty subset of the items in `database` directly.
    fn brute_force(database: &[Transaction], min_support: Count) -> BTreeSet<Itemset> {
        let items: BTreeSet<Item> = database.iter().flatten().copied().collect();
        let items: Vec<Item> = items.into_iter().collect();
        let min_support = min_support.max(1);

        let frequent: Vec<Itemset> = power_set(&items, false)
            .into_iter()
            .filter(|subset| {
                let support = database
                    .iter()
                    .filter(|transaction| subset.iter().all(|item| transaction.contains(item)))
                    .count();
                support >= min_support
            })
            .collect();
        normalize(&frequent)
    }

    #[test]
    fn brute_force_on_grocery_database() {
        assert_eq!(brute_force(&grocery_database(), 4), grocery_expected());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn algorithms_match_brute_force(database in sparse_database(), min_support in 0usize..8) {
            let expected = brute_force(&database, min_support);
            for &algorithm in Algorithm::ALL.iter() {
                let itemsets = mine(algorithm, &database, min_support);
                prop_assert_eq!(itemsets.len(), expected.len());
                prop_assert_eq!(normalize(&itemsets), expected.clone());
            }
        }

        #[test]
        fn algorithms_agree(database in database(), min_support in 0usize..6) {
            let expected = normalize(&mine(Algorithm::Apriori, &database, min_support));
            for &algorithm in Algorithm::ALL.iter() {
                let itemsets = mine(algorithm, &database, min_support);
                prop_assert_eq!(itemsets.len(), expected.len());
                prop_assert_eq!(normalize(&itemsets), expected.clone());
            }
        }

        #[test]
        fn frequent_itemsets_are_closed_under_subsets(
            database in database(),
            min_support in 1usize..6,
        ) {
            let counts = ItemCounts::from_transactions(&database);
            for &algorithm in Algorithm::ALL.iter() {
                let found = normalize(&mine(algorithm, &database, min_support));
                let itemsets: Vec<Itemset> = found.iter().cloned().collect();
                let supports = support_counts(&database, &itemsets, counts.comparator());

                for itemset in &found {
                    prop_assert!(supports[itemset] >= min_support);
                    if itemset.len() > 1 {
                        for i in 0..itemset.len() {
                            let mut subset = itemset.clone();
                            subset.remove(i);
                            prop_assert!(found.contains(&subset));
                        }
                    }
                }
            }
        }
    }
}
