use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A directed graph of site pages keyed by human-readable labels.
///
/// Pages are unique by label: re-adding an existing label is a no-op that
/// returns the original node. Links are directed, so a link and its reverse
/// are two distinct links.
#[derive(Debug, Default)]
pub struct PageGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl PageGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a page, or return the existing node for this label.
    pub fn add_page(&mut self, label: &str) -> NodeIndex {
        if let Some(&ix) = self.index.get(label) {
            return ix;
        }
        let ix = self.graph.add_node(label.to_string());
        self.index.insert(label.to_string(), ix);
        ix
    }

    /// Insert a directed link, creating missing endpoint pages on the way.
    pub fn add_link(&mut self, from: &str, to: &str) {
        let a = self.add_page(from);
        let b = self.add_page(to);
        self.graph.add_edge(a, b, ());
    }

    pub fn page_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_page(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn contains_link(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Page labels, in insertion order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Directed links as (from, to) label pairs, in insertion order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_indices().map(|e| {
            let (a, b) = self
                .graph
                .edge_endpoints(e)
                .expect("edge index from this graph");
            (self.graph[a].as_str(), self.graph[b].as_str())
        })
    }

    /// The underlying petgraph storage.
    pub fn inner(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}
