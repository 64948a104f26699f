use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator placed between node names when a path is rendered.
pub const PATH_SEPARATOR: &str = "->";

/// A vertex in a city graph. Two nodes are the same node when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A directed edge from `source` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: Node,
    pub destination: Node,
}

impl Edge {
    pub fn new(source: Node, destination: Node) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Returns the same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.source.name, PATH_SEPARATOR, self.destination.name
        )
    }
}

/// An ordered sequence of nodes from a start node to an end node.
pub type Path = Vec<Node>;

/// Which search strategy a shortest-path query should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SearchMethod {
    /// Branch-and-bound depth-first search.
    #[default]
    Dfs,
    /// Level-order breadth-first search; always finds the fewest-edge path.
    Bfs,
}

impl SearchMethod {
    /// Returns the string representation of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMethod::Dfs => "dfs",
            SearchMethod::Bfs => "bfs",
        }
    }

    /// Parses a string into a `SearchMethod`, returning `None` for unrecognized values.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<SearchMethod> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Some(SearchMethod::Dfs),
            "bfs" => Some(SearchMethod::Bfs),
            _ => None,
        }
    }
}

/// Renders a path as node names joined by `->`.
///
/// An empty path renders as the empty string and a single node renders as
/// just its name.
pub fn print_path(path: &[Node]) -> String {
    path.iter()
        .map(|node| node.name.as_str())
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}
