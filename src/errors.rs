use thiserror::Error;

/// Errors that can occur while building or querying a city graph.
#[derive(Error, Debug)]
pub enum CityPlannerError {
    #[error("duplicate node: {name}")]
    DuplicateNode { name: String },

    #[error("node not in graph: {name}")]
    MissingNode { name: String },

    #[error("no node named {name}")]
    NotFound { name: String },

    #[error("map error: {message} (path: {path})")]
    Map { message: String, path: String },
}

/// Convenience alias for results using `CityPlannerError`.
pub type Result<T> = std::result::Result<T, CityPlannerError>;
