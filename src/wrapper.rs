use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyFrozenSet};
use pyo3::wrap_pyfunction;

use crate::{
    config::MiningConfig,
    error::FimError,
    itemsets::Algorithm,
    types::{Count, FrequentItemsets, Item, Transaction},
};

impl From<FimError> for PyErr {
    fn from(err: FimError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymodule]
fn fim(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets, m)?)?;
    Ok(())
}

/// Frequent itemsets of `transactions` as `{length: {frozenset(itemset): support}}`.
/// `min_support` is a share of the number of transactions.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, algorithm, max_len, /)")]
fn frequent_itemsets(
    py: Python,
    transactions: Vec<Vec<Item>>,
    min_support: f32,
    algorithm: &str,
    max_len: Option<usize>,
) -> PyResult<Py<PyDict>> {
    let algorithm: Algorithm = algorithm.parse()?;
    let mut config = MiningConfig::new(algorithm, min_support);
    if let Some(max_len) = max_len {
        config = config.with_max_len(max_len);
    }

    let transactions: Vec<Transaction> = transactions
        .into_iter()
        .map(|mut transaction| {
            transaction.sort_unstable();
            transaction.dedup();
            transaction
        })
        .collect();

    let frequent_itemsets = config.run(&transactions)?;
    convert_itemset_counts(py, frequent_itemsets)
}

fn convert_itemset_counts(py: Python, frequent_itemsets: FrequentItemsets) -> PyResult<Py<PyDict>> {
    let mut py_frequent_itemsets = Vec::with_capacity(frequent_itemsets.len());
    for (size, itemset_counts) in frequent_itemsets {
        let mut py_itemset_counts: Vec<(Py<PyFrozenSet>, Count)> =
            Vec::with_capacity(itemset_counts.len());
        for (itemset, count) in itemset_counts {
            let set: Py<PyFrozenSet> = PyFrozenSet::new(py, &itemset)?.into();
            py_itemset_counts.push((set, count));
        }
        let py_itemset_counts: Py<PyDict> = py_itemset_counts.into_py_dict(py).into();
        py_frequent_itemsets.push((size, py_itemset_counts));
    }
    Ok(py_frequent_itemsets.into_py_dict(py).into())
}
