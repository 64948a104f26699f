use cityplanner::graph::{bfs, dfs, shortest_path_bfs, shortest_path_dfs, Digraph, Graph, PathFinder};
use cityplanner::types::*;

const CITIES: [&str; 7] = [
    "Boston",
    "Providence",
    "New York",
    "Chicago",
    "Denver",
    "Phoenix",
    "Los Angeles",
];

const ROADS: [(&str, &str); 10] = [
    ("Boston", "Providence"),
    ("Boston", "New York"),
    ("Providence", "Boston"),
    ("Providence", "New York"),
    ("New York", "Chicago"),
    ("Chicago", "Denver"),
    ("Chicago", "Phoenix"),
    ("Denver", "Phoenix"),
    ("Denver", "New York"),
    ("Los Angeles", "Boston"),
];

/// Helper: the seven-city directed fixture.
fn city_graph() -> Digraph {
    let mut g = Digraph::new();
    for name in CITIES {
        g.add_node(Node::new(name)).expect("failed to add city");
    }
    for (src, dest) in ROADS {
        let edge = Edge::new(
            g.get_node(src).unwrap().clone(),
            g.get_node(dest).unwrap().clone(),
        );
        g.add_edge(edge).expect("failed to add road");
    }
    g
}

/// Helper: builds a directed graph from `(src, dest)` pairs, registering
/// nodes in first-seen order.
fn graph_from(edges: &[(&str, &str)]) -> Digraph {
    let mut g = Digraph::new();
    for (src, dest) in edges {
        for name in [src, dest] {
            if !g.has_node(&Node::new(*name)) {
                g.add_node(Node::new(*name)).unwrap();
            }
        }
        g.add_edge(Edge::new(Node::new(*src), Node::new(*dest))).unwrap();
    }
    g
}

/// Length in nodes of the shortest simple path, by exhaustive enumeration.
fn brute_force_shortest(g: &Digraph, current: &Node, end: &Node, path: &mut Vec<Node>) -> Option<usize> {
    path.push(current.clone());
    let result = if current == end {
        Some(path.len())
    } else {
        let mut best: Option<usize> = None;
        for child in g.children_of(current).unwrap() {
            if path.contains(child) {
                continue;
            }
            if let Some(len) = brute_force_shortest(g, child, end, path) {
                best = Some(best.map_or(len, |b| b.min(len)));
            }
        }
        best
    };
    path.pop();
    result
}

fn node(name: &str) -> Node {
    Node::new(name)
}

// ---------------------------------------------------------------------------
// Fixture scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_shortest_path_dfs_fixture() {
    let g = city_graph();

    let sp = shortest_path_dfs(&g, &node("Chicago"), &node("Boston"), false);
    assert!(sp.is_none(), "no directed path from Chicago to Boston");

    let sp = shortest_path_dfs(&g, &node("Boston"), &node("Phoenix"), false).expect("path exists");
    assert_eq!(print_path(&sp), "Boston->New York->Chicago->Phoenix");
}

#[test]
fn test_shortest_path_bfs_fixture() {
    let g = city_graph();

    let sp = shortest_path_bfs(&g, &node("Chicago"), &node("Phoenix"), false).unwrap();
    assert_eq!(print_path(&sp), "Chicago->Phoenix");

    let sp = shortest_path_bfs(&g, &node("Boston"), &node("Phoenix"), false).unwrap();
    assert_eq!(print_path(&sp), "Boston->New York->Chicago->Phoenix");

    assert!(bfs(&g, &node("Chicago"), &node("Boston"), false).is_none());
}

#[test]
fn test_start_equals_end_returns_single_node() {
    let g = city_graph();
    let sp = shortest_path_dfs(&g, &node("Denver"), &node("Denver"), false).unwrap();
    assert_eq!(sp, vec![node("Denver")]);
    let sp = shortest_path_bfs(&g, &node("Denver"), &node("Denver"), false).unwrap();
    assert_eq!(sp, vec![node("Denver")]);
}

#[test]
fn test_unregistered_endpoints_return_none() {
    let g = city_graph();
    assert!(shortest_path_dfs(&g, &node("Atlantis"), &node("Boston"), false).is_none());
    assert!(shortest_path_dfs(&g, &node("Boston"), &node("Atlantis"), false).is_none());
    assert!(shortest_path_bfs(&g, &node("Atlantis"), &node("Boston"), false).is_none());
    assert!(shortest_path_bfs(&g, &node("Boston"), &node("Atlantis"), false).is_none());
}

#[test]
fn test_empty_graph_returns_none() {
    let g = Digraph::new();
    assert!(shortest_path_dfs(&g, &node("A"), &node("B"), false).is_none());
    assert!(shortest_path_bfs(&g, &node("A"), &node("B"), false).is_none());
}

#[test]
fn test_verbose_search_returns_same_path() {
    let g = city_graph();
    let quiet = shortest_path_bfs(&g, &node("Los Angeles"), &node("Phoenix"), false);
    let loud = shortest_path_bfs(&g, &node("Los Angeles"), &node("Phoenix"), true);
    assert_eq!(quiet, loud);

    let quiet = shortest_path_dfs(&g, &node("Los Angeles"), &node("Phoenix"), false);
    let loud = shortest_path_dfs(&g, &node("Los Angeles"), &node("Phoenix"), true);
    assert_eq!(quiet, loud);
}

// ---------------------------------------------------------------------------
// Minimality
// ---------------------------------------------------------------------------

#[test]
fn test_bfs_and_dfs_lengths_are_minimal_for_every_pair() {
    let g = city_graph();
    for src in CITIES {
        for dest in CITIES {
            let (start, end) = (node(src), node(dest));
            let expected = brute_force_shortest(&g, &start, &end, &mut Vec::new());

            let via_bfs = shortest_path_bfs(&g, &start, &end, false).map(|p| p.len());
            let via_dfs = shortest_path_dfs(&g, &start, &end, false).map(|p| p.len());
            assert_eq!(via_bfs, expected, "bfs {src} -> {dest}");
            assert_eq!(via_dfs, expected, "dfs {src} -> {dest}");
        }
    }
}

#[test]
fn test_returned_paths_follow_edges_without_repeats() {
    let g = city_graph();
    let sp = shortest_path_dfs(&g, &node("Los Angeles"), &node("Phoenix"), false).unwrap();
    assert_eq!(sp.first(), Some(&node("Los Angeles")));
    assert_eq!(sp.last(), Some(&node("Phoenix")));
    for pair in sp.windows(2) {
        let children = g.children_of(&pair[0]).unwrap();
        assert!(children.contains(&&pair[1]), "{} -> {} is not an edge", pair[0], pair[1]);
    }
    for (i, n) in sp.iter().enumerate() {
        assert!(!sp[i + 1..].contains(n), "{n} repeats");
    }
}

// ---------------------------------------------------------------------------
// DFS pruning order and accumulators
// ---------------------------------------------------------------------------

#[test]
fn test_dfs_prefers_later_equal_length_path() {
    // Two routes of equal length; the one explored last replaces the first.
    let g = graph_from(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);

    let via_dfs = shortest_path_dfs(&g, &node("A"), &node("D"), false).unwrap();
    let via_bfs = shortest_path_bfs(&g, &node("A"), &node("D"), false).unwrap();
    assert_eq!(print_path(&via_dfs), "A->C->D");
    assert_eq!(print_path(&via_bfs), "A->B->D");
}

#[test]
fn test_dfs_known_bound_is_kept_when_not_beaten() {
    let g = graph_from(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    let bound = vec![node("A"), node("D")];

    let sp = dfs(&g, &node("A"), &node("D"), &[], Some(bound.clone()), false);
    assert_eq!(sp, Some(bound));
}

#[test]
fn test_dfs_prefix_counts_toward_path() {
    let g = graph_from(&[("A", "B"), ("B", "D"), ("D", "A")]);

    let sp = dfs(&g, &node("B"), &node("D"), &[node("A")], None, false).unwrap();
    assert_eq!(print_path(&sp), "A->B->D");

    // A is already on the prefix, so it cannot be reached again.
    assert!(dfs(&g, &node("D"), &node("A"), &[node("A")], None, false).is_none());
}

#[test]
fn test_cycles_terminate() {
    let g = graph_from(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
    let finder = PathFinder::new(&g, false);
    assert_eq!(print_path(&finder.dfs(&node("A"), &node("D"), &[], None).unwrap()), "A->B->C->D");
    assert_eq!(print_path(&finder.bfs(&node("B"), &node("A")).unwrap()), "B->C->A");
}

// ---------------------------------------------------------------------------
// Undirected graphs
// ---------------------------------------------------------------------------

#[test]
fn test_undirected_graph_reaches_back() {
    let mut g = Graph::new();
    for name in CITIES {
        g.add_node(node(name)).unwrap();
    }
    for (src, dest) in ROADS {
        g.add_edge(Edge::new(node(src), node(dest))).unwrap();
    }

    let sp = shortest_path_bfs(&g, &node("Chicago"), &node("Boston"), false).unwrap();
    assert_eq!(print_path(&sp), "Chicago->New York->Boston");

    let sp = shortest_path_dfs(&g, &node("Chicago"), &node("Boston"), false).unwrap();
    assert_eq!(sp.len(), 3);
}
