use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

use tracing::trace;

use crate::errors::{CityPlannerError, Result};
use crate::types::{Edge, Node};

/// A directed graph stored as an adjacency list.
///
/// Nodes live in an arena in registration order and are keyed by name, so a
/// name identifies at most one node. Each node owns the ordered list of its
/// children; traversals visit children in the order their edges were added.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    children: Vec<Vec<usize>>,
}

impl Digraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `node` with an empty child list.
    ///
    /// Fails with `DuplicateNode` if a node with the same name is already
    /// registered; the graph is left unchanged in that case.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.index.contains_key(&node.name) {
            return Err(CityPlannerError::DuplicateNode { name: node.name });
        }
        trace!(node = %node, "adding node");
        self.index.insert(node.name.clone(), self.nodes.len());
        self.nodes.push(node);
        self.children.push(Vec::new());
        Ok(())
    }

    /// Appends the edge's destination to its source's child list.
    ///
    /// Fails with `MissingNode` if either endpoint has not been registered.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let (src, dest) = self.endpoints(&edge)?;
        trace!(edge = %edge, "adding edge");
        self.children[src].push(dest);
        Ok(())
    }

    /// Returns the direct successors of `node` in insertion order.
    pub fn children_of(&self, node: &Node) -> Result<Vec<&Node>> {
        let idx = self.require(node)?;
        Ok(self.children[idx].iter().map(|&c| &self.nodes[c]).collect())
    }

    /// Returns `true` if a node with this name is registered.
    pub fn has_node(&self, node: &Node) -> bool {
        self.index.contains_key(&node.name)
    }

    /// Looks up the registered node called `name`.
    pub fn get_node(&self, name: &str) -> Result<&Node> {
        self.nodes
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| CityPlannerError::NotFound {
                name: name.to_string(),
            })
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, counting each child-list entry once.
    pub fn edge_count(&self) -> usize {
        self.children.iter().map(Vec::len).sum()
    }

    /// Iterates over registered nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterates over every edge, grouped by source in registration order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.children.iter().enumerate().flat_map(move |(src, kids)| {
            kids.iter()
                .map(move |&dest| Edge::new(self.nodes[src].clone(), self.nodes[dest].clone()))
        })
    }

    // -----------------------------------------------------------------------
    // Index-level access for the searches
    // -----------------------------------------------------------------------

    pub(crate) fn index_of(&self, node: &Node) -> Option<usize> {
        self.index.get(&node.name).copied()
    }

    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn child_indices(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    fn require(&self, node: &Node) -> Result<usize> {
        self.index_of(node)
            .ok_or_else(|| CityPlannerError::MissingNode {
                name: node.name.clone(),
            })
    }

    /// Resolves both endpoints of `edge`, checking both before anything is
    /// mutated.
    fn endpoints(&self, edge: &Edge) -> Result<(usize, usize)> {
        let src = self.require(&edge.source)?;
        let dest = self.require(&edge.destination)?;
        Ok((src, dest))
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{edge}")?;
        }
        Ok(())
    }
}

/// An undirected graph: every edge added is stored in both directions.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: Digraph,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> Result<()> {
        self.inner.add_node(node)
    }

    /// Adds `edge` and its reverse.
    ///
    /// Both endpoints are checked up front, so a `MissingNode` error leaves
    /// neither direction behind.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        self.inner.endpoints(&edge)?;
        let rev = edge.reversed();
        self.inner.add_edge(edge)?;
        self.inner.add_edge(rev)
    }

    /// Unwraps the underlying directed storage.
    pub fn into_digraph(self) -> Digraph {
        self.inner
    }
}

impl Deref for Graph {
    type Target = Digraph;

    fn deref(&self) -> &Digraph {
        &self.inner
    }
}

impl From<Graph> for Digraph {
    fn from(graph: Graph) -> Self {
        graph.into_digraph()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}
