//! Hash tree over itemsets, the Apriori lookup structure for "is this subset frequent".
//!
//! At depth `d` an itemset is routed by `itemset[d] % buckets`. Leaves hold up to
//! `max_leaf_size` itemsets and are split into an inner node once they overflow.
//! An itemset whose hash path ends on an inner node (its length equals the depth of
//! that node) is kept on the inner node itself.

use std::collections::HashMap;

use crate::types::{Item, Itemset, Itemsets};

pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
enum Node {
    Inner {
        children: HashMap<u64, NodeId>,
        itemsets: Itemsets,
    },
    Leaf {
        itemsets: Itemsets,
    },
}

impl Node {
    fn leaf() -> Self {
        Node::Leaf {
            itemsets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HashTree {
    nodes: Vec<Node>,
    max_leaf_size: usize,
    buckets: u64,
    len: usize,
}

impl HashTree {
    pub fn new(max_leaf_size: usize, buckets: u64) -> Self {
        HashTree {
            nodes: vec![Node::leaf()],
            max_leaf_size,
            buckets: buckets.max(1),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket(&self, item: Item) -> u64 {
        item % self.buckets
    }

    /// Inserts `itemset`; returns false if an equal sequence is already present.
    pub fn insert(&mut self, itemset: Itemset) -> bool {
        if self.contains(&itemset) {
            return false;
        }

        let buckets = self.buckets;
        let mut id = ROOT;
        let mut depth = 0;
        loop {
            let bucket = match &mut self.nodes[id] {
                Node::Leaf { itemsets } => {
                    itemsets.push(itemset);
                    break;
                }
                Node::Inner { itemsets, .. } if depth == itemset.len() => {
                    itemsets.push(itemset);
                    break;
                }
                Node::Inner { .. } => itemset[depth] % buckets,
            };
            id = self.child_or_insert(id, bucket);
            depth += 1;
        }

        self.len += 1;
        if self.overflows(id) {
            self.split_leaf(id, depth);
        }
        true
    }

    fn overflows(&self, id: NodeId) -> bool {
        match &self.nodes[id] {
            Node::Leaf { itemsets } => itemsets.len() > self.max_leaf_size,
            Node::Inner { .. } => false,
        }
    }

    fn child_or_insert(&mut self, id: NodeId, bucket: u64) -> NodeId {
        let next = self.nodes.len();
        match &mut self.nodes[id] {
            Node::Inner { children, .. } => {
                let child = *children.entry(bucket).or_insert(next);
                if child == next {
                    self.nodes.push(Node::leaf());
                }
                child
            }
            Node::Leaf { .. } => id,
        }
    }

    /// Turns leaf `id` at `depth` into an inner node and redistributes its itemsets
    /// by their item at `depth`.
    fn split_leaf(&mut self, id: NodeId, depth: usize) {
        let inner = Node::Inner {
            children: HashMap::new(),
            itemsets: Vec::new(),
        };
        let itemsets = match std::mem::replace(&mut self.nodes[id], inner) {
            Node::Leaf { itemsets } => itemsets,
            node => {
                self.nodes[id] = node;
                return;
            }
        };

        let mut touched = Vec::new();
        for itemset in itemsets {
            if itemset.len() == depth {
                if let Node::Inner { itemsets, .. } = &mut self.nodes[id] {
                    itemsets.push(itemset);
                }
                continue;
            }

            let bucket = self.bucket(itemset[depth]);
            let child = self.child_or_insert(id, bucket);
            if let Node::Leaf { itemsets } = &mut self.nodes[child] {
                itemsets.push(itemset);
            }
            if !touched.contains(&child) {
                touched.push(child);
            }
        }

        for child in touched {
            if self.overflows(child) {
                self.split_leaf(child, depth + 1);
            }
        }
    }

    /// The stored itemset equal to `itemset`, if any.
    pub fn search(&self, itemset: &[Item]) -> Option<&Itemset> {
        let mut id = ROOT;
        let mut depth = 0;
        loop {
            match &self.nodes[id] {
                Node::Leaf { itemsets } => {
                    return itemsets.iter().find(|stored| stored.as_slice() == itemset);
                }
                Node::Inner { itemsets, .. } if depth == itemset.len() => {
                    return itemsets.iter().find(|stored| stored.as_slice() == itemset);
                }
                Node::Inner { children, .. } => {
                    id = *children.get(&self.bucket(itemset[depth]))?;
                    depth += 1;
                }
            }
        }
    }

    pub fn contains(&self, itemset: &[Item]) -> bool {
        self.search(itemset).is_some()
    }
}
