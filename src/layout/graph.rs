//! StepGraph — the recipe's step-dependency DAG over petgraph.
//!
//! Steps are nodes, `parents` entries are edges parent → child. The graph
//! carries cycle detection and the deterministic topological visit the
//! placer folds over. A parent id that matches no step adds no edge; that
//! tolerance is part of the input contract.

use std::collections::{HashMap, HashSet};

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::recipe::Step;

/// Dependency graph over step ids.
pub struct StepGraph {
    digraph: DiGraph<u64, ()>,
    node_index: HashMap<u64, NodeIndex>,
    /// (step id, parent ids) in declared order; fixes the visit order.
    declared: Vec<(u64, Vec<u64>)>,
}

impl StepGraph {
    /// Build the graph from the declared step list. The first declaration of
    /// an id wins if the input repeats one.
    pub fn from_steps(steps: &[Step]) -> Self {
        let mut digraph: DiGraph<u64, ()> = DiGraph::new();
        let mut node_index: HashMap<u64, NodeIndex> = HashMap::new();
        let mut declared: Vec<(u64, Vec<u64>)> = Vec::new();

        for step in steps {
            if !node_index.contains_key(&step.id) {
                let idx = digraph.add_node(step.id);
                node_index.insert(step.id, idx);
                declared.push((step.id, step.parents.clone()));
            }
        }

        for (id, parents) in &declared {
            let child = node_index[id];
            for parent_id in parents {
                if let Some(&parent) = node_index.get(parent_id) {
                    digraph.add_edge(parent, child, ());
                }
            }
        }

        Self {
            digraph,
            node_index,
            declared,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns true if the dependency graph has no cycles.
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    /// Returns step ids ordered so every step follows all of its parents, or
    /// None if the graph has cycles.
    ///
    /// The order is deterministic: steps are visited in declared order, and
    /// each step's parent list is walked in declared order, parents first.
    pub fn topological_order(&self) -> Option<Vec<u64>> {
        if !self.is_dag() {
            return None;
        }

        let parents_of: HashMap<u64, &[u64]> = self
            .declared
            .iter()
            .map(|(id, parents)| (*id, parents.as_slice()))
            .collect();

        let mut visited: HashSet<u64> = HashSet::new();
        let mut order: Vec<u64> = Vec::with_capacity(self.declared.len());
        for (id, _) in &self.declared {
            visit(*id, &parents_of, &mut visited, &mut order);
        }
        Some(order)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.node_index.contains_key(&id)
    }
}

fn visit(
    id: u64,
    parents_of: &HashMap<u64, &[u64]>,
    visited: &mut HashSet<u64>,
    order: &mut Vec<u64>,
) {
    if !visited.insert(id) {
        return;
    }
    if let Some(parents) = parents_of.get(&id) {
        for parent in *parents {
            // Dangling parent ids have no entry and are skipped.
            if parents_of.contains_key(parent) {
                visit(*parent, parents_of, visited, order);
            }
        }
    }
    order.push(id);
}

// ─── Tests ───────────────────────────────────────────────────────────────────
