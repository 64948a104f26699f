pub mod errors;
pub mod graph;
pub mod map;
pub mod planner;
pub mod types;
