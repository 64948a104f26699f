use tracing::debug;

use crate::errors::Result;
use crate::graph::{traversal, Digraph};
use crate::types::{self, Node, Path, SearchMethod};

/// Facade over a bound city graph answering shortest-path queries.
#[derive(Debug, Clone)]
pub struct CityPlanner {
    /// The graph queries run against. Queries by name do nothing while unset.
    pub g: Option<Digraph>,
    /// Whether searches report their progress by default.
    pub verbose: bool,
}

impl Default for CityPlanner {
    fn default() -> Self {
        Self {
            g: None,
            verbose: true,
        }
    }
}

impl CityPlanner {
    /// Creates a planner with no bound graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner bound to `graph`.
    ///
    /// Accepts a `Graph` as well, which is bound by its directed storage.
    pub fn with_graph(graph: impl Into<Digraph>) -> Self {
        Self {
            g: Some(graph.into()),
            ..Self::default()
        }
    }

    /// Replaces the bound graph.
    pub fn bind(&mut self, graph: impl Into<Digraph>) {
        self.g = Some(graph.into());
    }

    /// Renders `path` as `A->B->C`.
    pub fn print_path(&self, path: &[Node]) -> String {
        types::print_path(path)
    }

    /// Depth-first search with explicit starting accumulators.
    pub fn dfs(
        &self,
        graph: &Digraph,
        start: &Node,
        end: &Node,
        path: &[Node],
        shortest: Option<Path>,
        verbose: bool,
    ) -> Option<Path> {
        traversal::dfs(graph, start, end, path, shortest, verbose)
    }

    /// Breadth-first search.
    pub fn bfs(&self, graph: &Digraph, start: &Node, end: &Node, verbose: bool) -> Option<Path> {
        traversal::bfs(graph, start, end, verbose)
    }

    /// Depth-first shortest path using the planner's verbosity.
    pub fn shortest_path_dfs(&self, graph: &Digraph, start: &Node, end: &Node) -> Option<Path> {
        self.dfs(graph, start, end, &[], None, self.verbose)
    }

    /// Breadth-first shortest path using the planner's verbosity.
    pub fn shortest_path_bfs(&self, graph: &Digraph, start: &Node, end: &Node) -> Option<Path> {
        self.bfs(graph, start, end, self.verbose)
    }

    /// Finds the shortest path between two cities of the bound graph and
    /// returns the report line.
    ///
    /// Returns `Ok(None)` without searching when no graph is bound. Fails with
    /// `NotFound` if either name is not a node of the bound graph.
    pub fn get_shortest_path(
        &self,
        source: &str,
        destination: &str,
        method: SearchMethod,
    ) -> Result<Option<String>> {
        let Some(graph) = self.g.as_ref() else {
            debug!("no graph bound, skipping shortest path query");
            return Ok(None);
        };

        let start = graph.get_node(source)?;
        let end = graph.get_node(destination)?;
        debug!(source, destination, method = method.as_str(), "searching");

        let found = match method {
            SearchMethod::Bfs => self.shortest_path_bfs(graph, start, end),
            SearchMethod::Dfs => self.shortest_path_dfs(graph, start, end),
        };

        let report = match found {
            Some(path) => format!(
                "Shortest path from {} to {} is {}",
                source,
                destination,
                self.print_path(&path)
            ),
            None => format!("There is no path from {} to {}", source, destination),
        };
        Ok(Some(report))
    }

    /// Runs [`get_shortest_path`](Self::get_shortest_path) and prints the
    /// report line to stdout.
    pub fn print_shortest_path(
        &self,
        source: &str,
        destination: &str,
        method: SearchMethod,
    ) -> Result<()> {
        if let Some(report) = self.get_shortest_path(source, destination, method)? {
            println!("{}", report);
        }
        Ok(())
    }
}
