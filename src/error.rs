use thiserror::Error;

/// Errors raised while building, traversing or persisting grid graphs.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid grid shape: {n} points cannot be split into {k} equal rows")]
    InvalidShape { n: usize, k: usize },

    #[error("traversal of ({n}, {k}) stalled after {ticks} ticks ({visited} points visited)")]
    TraversalStalled {
        n: usize,
        k: usize,
        ticks: usize,
        visited: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
