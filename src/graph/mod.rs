/// Directed and undirected adjacency-list graphs.
pub mod digraph;

/// Depth-first and breadth-first shortest-path search.
pub mod traversal;

pub use digraph::{Digraph, Graph};
pub use traversal::{bfs, dfs, shortest_path_bfs, shortest_path_dfs, PathFinder};
