use std::collections::{HashSet, VecDeque};

use tracing::info;

use crate::graph::Digraph;
use crate::types::{print_path, Node, Path};

/// Runs shortest-path searches over a borrowed graph.
///
/// With `verbose` set, each search reports its progress (the path being
/// expanded, neighbors skipped because they are already on the path, and the
/// BFS queue) as `INFO` events.
pub struct PathFinder<'a> {
    graph: &'a Digraph,
    verbose: bool,
}

impl<'a> PathFinder<'a> {
    /// Creates a new `PathFinder` over the given graph.
    pub fn new(graph: &'a Digraph, verbose: bool) -> Self {
        Self { graph, verbose }
    }

    /// Branch-and-bound depth-first search from `start` to `end`.
    ///
    /// `path` is a prefix that counts toward path length and may not be
    /// revisited; `shortest` is the best complete path already known and is
    /// returned unchanged if the search cannot beat it. Returns `None` if
    /// either endpoint is not in the graph or no path exists.
    ///
    /// A neighbor is only expanded while the current path is strictly shorter
    /// than the best complete path, and every arrival at `end` under that bound
    /// replaces the best path. An equal-length path found later therefore wins
    /// over one found earlier.
    pub fn dfs(&self, start: &Node, end: &Node, path: &[Node], shortest: Option<Path>) -> Option<Path> {
        let start_idx = self.graph.index_of(start)?;
        let end_idx = self.graph.index_of(end)?;

        let prefix: HashSet<usize> = path.iter().filter_map(|n| self.graph.index_of(n)).collect();
        let materialize = |trail: &[usize]| -> Path {
            path.iter()
                .cloned()
                .chain(trail.iter().map(|&i| self.graph.node_at(i).clone()))
                .collect()
        };

        let mut trail: Vec<usize> = vec![start_idx];
        self.report_path("current DFS path", &materialize(&trail));
        if start_idx == end_idx {
            return Some(materialize(&trail));
        }

        let mut best = shortest;
        // Each frame is (node, index of the next child to try).
        let mut stack: Vec<(usize, usize)> = vec![(start_idx, 0)];

        while let Some(&(node, cursor)) = stack.last() {
            let Some(&child) = self.graph.child_indices(node).get(cursor) else {
                stack.pop();
                trail.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            if trail.contains(&child) || prefix.contains(&child) {
                if self.verbose {
                    info!(node = %self.graph.node_at(child), "already visited");
                }
                continue;
            }

            let len = path.len() + trail.len();
            if best.as_ref().is_some_and(|b| len >= b.len()) {
                continue;
            }

            trail.push(child);
            self.report_path("current DFS path", &materialize(&trail));
            if child == end_idx {
                best = Some(materialize(&trail));
                trail.pop();
            } else {
                stack.push((child, 0));
            }
        }

        best
    }

    /// Breadth-first search from `start` to `end` over simple paths.
    ///
    /// The first path dequeued that ends at `end` is returned, so the result
    /// has the fewest edges of any path between the two nodes.
    pub fn bfs(&self, start: &Node, end: &Node) -> Option<Path> {
        let start_idx = self.graph.index_of(start)?;
        let end_idx = self.graph.index_of(end)?;

        let mut queue: VecDeque<Vec<usize>> = VecDeque::new();
        queue.push_back(vec![start_idx]);

        while !queue.is_empty() {
            if self.verbose {
                info!(len = queue.len(), "queue");
                for queued in &queue {
                    info!(path = %print_path(&self.resolve(queued)), "queued");
                }
            }

            let Some(current) = queue.pop_front() else {
                break;
            };
            let resolved = self.resolve(&current);
            self.report_path("current BFS path", &resolved);

            let Some(&last) = current.last() else {
                continue;
            };
            if last == end_idx {
                return Some(resolved);
            }

            for &next in self.graph.child_indices(last) {
                if !current.contains(&next) {
                    let mut extended = current.clone();
                    extended.push(next);
                    queue.push_back(extended);
                }
            }
        }

        None
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn resolve(&self, trail: &[usize]) -> Path {
        trail.iter().map(|&i| self.graph.node_at(i).clone()).collect()
    }

    fn report_path(&self, message: &'static str, path: &[Node]) {
        if self.verbose {
            info!(path = %print_path(path), "{}", message);
        }
    }
}

/// Depth-first search with explicit starting accumulators.
///
/// See [`PathFinder::dfs`].
pub fn dfs(
    graph: &Digraph,
    start: &Node,
    end: &Node,
    path: &[Node],
    shortest: Option<Path>,
    verbose: bool,
) -> Option<Path> {
    PathFinder::new(graph, verbose).dfs(start, end, path, shortest)
}

/// Breadth-first shortest path. See [`PathFinder::bfs`].
pub fn bfs(graph: &Digraph, start: &Node, end: &Node, verbose: bool) -> Option<Path> {
    PathFinder::new(graph, verbose).bfs(start, end)
}

/// Depth-first shortest path starting from an empty path and no known bound.
pub fn shortest_path_dfs(graph: &Digraph, start: &Node, end: &Node, verbose: bool) -> Option<Path> {
    dfs(graph, start, end, &[], None, verbose)
}

/// Breadth-first shortest path.
pub fn shortest_path_bfs(graph: &Digraph, start: &Node, end: &Node, verbose: bool) -> Option<Path> {
    bfs(graph, start, end, verbose)
}
