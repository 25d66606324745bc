use crate::Discrete;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Node {node} is out of range for a graph of {n_nodes} nodes")]
    NodeOutOfRange { node: Discrete, n_nodes: usize },

    #[error("Edge ({from}, {to}) references a node outside a graph of {n_nodes} nodes")]
    EdgeOutOfRange {
        from: Discrete,
        to: Discrete,
        n_nodes: usize,
    },

    #[error("Expected {expected} edge weights, got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    #[error("Invalid random weight range [{low}, {high})")]
    InvalidWeightRange { low: f64, high: f64 },

    #[error("Goal {goal} is not reachable from origin {origin}")]
    GoalUnreachable { origin: Discrete, goal: Discrete },

    #[error("No route joins two distinct nodes with origin {origin:?} and goal {goal:?}")]
    NoReachablePair {
        origin: Option<Discrete>,
        goal: Option<Discrete>,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl RouteError {
    pub fn io_error(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    pub(crate) fn check_node(node: Discrete, n_nodes: usize) -> Result<Discrete> {
        if node < n_nodes {
            Ok(node)
        } else {
            Err(Self::NodeOutOfRange { node, n_nodes })
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
