//! Prefix tree of frequency-ordered transactions.
//!
//! Nodes live in one arena and refer to each other by index. Each node owns its
//! children; the parent index is only followed upwards, when conditional
//! transactions are read off the tree. A node-link table lists, per item, every
//! node carrying it.

use std::collections::HashMap;

use crate::types::{Count, Database, Item, Itemset, Transaction};

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub item: Item,
    pub frequency: Count,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct FpTree {
    nodes: Vec<Node>,
    links: HashMap<Item, Vec<NodeId>>,
}

impl Default for FpTree {
    fn default() -> Self {
        FpTree::new()
    }
}

impl FpTree {
    /// Empty tree: just the root sentinel.
    pub fn new() -> Self {
        let root = Node {
            item: 0,
            frequency: 0,
            parent: None,
            children: Vec::new(),
        };
        FpTree {
            nodes: vec![root],
            links: HashMap::new(),
        }
    }

    /// Builds a tree from the items of `database` that appear in `frequent_items`,
    /// inserting every transaction in the order of that list (most frequent first).
    pub fn build(database: &[Transaction], frequent_items: &[Item]) -> Self {
        let rank: HashMap<Item, usize> = frequent_items
            .iter()
            .enumerate()
            .map(|(position, &item)| (item, position))
            .collect();

        let mut tree = FpTree::new();
        let mut path: Transaction = Vec::new();
        for transaction in database {
            path.clear();
            path.extend(transaction.iter().filter(|&&item| rank.contains_key(&item)));
            path.sort_unstable_by_key(|item| rank.get(item).copied());
            tree.insert(&path);
        }
        tree
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Number of nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_child(&self, id: NodeId, item: Item) -> Option<NodeId> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].item == item)
    }

    /// Adds one transaction, sharing the longest existing prefix. Every node on the
    /// path gains a frequency of one.
    pub fn insert(&mut self, transaction: &[Item]) {
        let mut id = ROOT;
        for &item in transaction {
            id = match self.find_child(id, item) {
                Some(child) => child,
                None => self.add_child(id, item),
            };
            self.nodes[id].frequency += 1;
        }
    }

    fn add_child(&mut self, parent: NodeId, item: Item) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            item,
            frequency: 0,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        self.links.entry(item).or_insert_with(Vec::new).push(id);
        id
    }

    /// Occurrences of `item` across the whole tree.
    pub fn item_frequency(&self, item: Item) -> Count {
        self.links
            .get(&item)
            .map(|ids| ids.iter().map(|&id| self.nodes[id].frequency).sum())
            .unwrap_or(0)
    }

    /// The items from the root down, when every node has at most one child.
    pub fn single_path(&self) -> Option<Itemset> {
        let mut path = Vec::new();
        let mut id = ROOT;
        loop {
            match self.nodes[id].children.as_slice() {
                [] => return Some(path),
                [child] => {
                    id = *child;
                    path.push(self.nodes[id].item);
                }
                _ => return None,
            }
        }
    }

    /// Ancestors of every node carrying `item`, root side first, each repeated as
    /// many times as that node's frequency. Nodes directly under the root add nothing.
    pub fn conditional_transactions(&self, item: Item) -> Database {
        let mut transactions = Database::new();
        for &id in self.links.get(&item).into_iter().flatten() {
            let node = &self.nodes[id];
            let path = self.path_to_root(node.parent);
            if path.is_empty() {
                continue;
            }
            for _ in 0..node.frequency {
                transactions.push(path.clone());
            }
        }
        transactions
    }

    fn path_to_root(&self, mut id: Option<NodeId>) -> Itemset {
        let mut path = Vec::new();
        while let Some(current) = id {
            if current == ROOT {
                break;
            }
            path.push(self.nodes[current].item);
            id = self.nodes[current].parent;
        }
        path.reverse();
        path
    }

    /// Follows `items` from the root and checks each node's frequency in turn.
    pub fn has_path_with_frequencies(&self, items: &[Item], frequencies: &[Count]) -> bool {
        if items.len() != frequencies.len() {
            return false;
        }

        let mut id = ROOT;
        for (&item, &frequency) in items.iter().zip(frequencies) {
            match self.find_child(id, item) {
                Some(child) if self.nodes[child].frequency == frequency => id = child,
                _ => return false,
            }
        }
        true
    }
}
