//! JSON city maps.
//!
//! A map lists its cities and the roads between them:
//!
//! ```json
//! { "directed": true, "cities": ["Boston", "Providence"], "roads": [["Boston", "Providence"]] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CityPlannerError, Result};
use crate::graph::{Digraph, Graph};
use crate::types::{Edge, Node};

fn default_directed() -> bool {
    true
}

/// A city graph as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityMap {
    /// When `false`, every road is usable in both directions.
    #[serde(default = "default_directed")]
    pub directed: bool,
    /// City names, registered in this order.
    pub cities: Vec<String>,
    /// Roads as `[from, to]` pairs, added in this order.
    #[serde(default)]
    pub roads: Vec<(String, String)>,
}

/// Anything a map can be loaded into.
trait MapBuilder {
    fn add_node(&mut self, node: Node) -> Result<()>;
    fn add_edge(&mut self, edge: Edge) -> Result<()>;
}

impl MapBuilder for Digraph {
    fn add_node(&mut self, node: Node) -> Result<()> {
        Digraph::add_node(self, node)
    }

    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        Digraph::add_edge(self, edge)
    }
}

impl MapBuilder for Graph {
    fn add_node(&mut self, node: Node) -> Result<()> {
        Graph::add_node(self, node)
    }

    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        Graph::add_edge(self, edge)
    }
}

impl CityMap {
    /// Builds the graph this map describes.
    ///
    /// Duplicate cities and roads naming unknown cities fail with the same
    /// errors as building the graph by hand.
    pub fn build(&self) -> Result<Digraph> {
        if self.directed {
            let mut graph = Digraph::new();
            self.populate(&mut graph)?;
            Ok(graph)
        } else {
            let mut graph = Graph::new();
            self.populate(&mut graph)?;
            Ok(graph.into_digraph())
        }
    }

    fn populate(&self, graph: &mut impl MapBuilder) -> Result<()> {
        for city in &self.cities {
            graph.add_node(Node::new(city.as_str()))?;
        }
        for (from, to) in &self.roads {
            graph.add_edge(Edge::new(Node::new(from.as_str()), Node::new(to.as_str())))?;
        }
        Ok(())
    }
}

/// Reads and parses a map file.
pub fn load_map(path: &Path) -> Result<CityMap> {
    let contents = fs::read_to_string(path).map_err(|e| CityPlannerError::Map {
        message: format!("failed to read map file: {}", e),
        path: path.display().to_string(),
    })?;

    let map: CityMap = serde_json::from_str(&contents).map_err(|e| CityPlannerError::Map {
        message: format!("failed to parse map file: {}", e),
        path: path.display().to_string(),
    })?;

    debug!(
        cities = map.cities.len(),
        roads = map.roads.len(),
        directed = map.directed,
        "loaded map"
    );
    Ok(map)
}
