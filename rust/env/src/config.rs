use crate::{
    error::*,
    graph::{integer_weight_range, GraphSpec, DEFAULT_RANDOM_WEIGHTS},
    Continous, Discrete, RouteObjective,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON description of a route environment.
///
/// ```json
/// {
///   "graph": { "n_nodes": 3, "edges": [[0, 1], [1, 2]], "directed": true },
///   "origin": 0,
///   "goal": 2,
///   "weights": [2, 3],
///   "objective": "shortest",
///   "seed": 2718
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub graph: GraphSpec,
    #[serde(default)]
    pub origin: Option<Discrete>,
    #[serde(default)]
    pub goal: Option<Discrete>,
    /// One per edge, in edge order. Random when absent.
    #[serde(default)]
    pub weights: Option<Vec<Continous>>,
    #[serde(default = "default_random_weights")]
    pub random_weights: (Continous, Continous),
    #[serde(default)]
    pub objective: RouteObjective,
    #[serde(default)]
    pub seed: u64,
}

fn default_random_weights() -> (Continous, Continous) {
    DEFAULT_RANDOM_WEIGHTS
}

impl RouteConfig {
    pub fn new(graph: GraphSpec) -> Self {
        Self {
            graph,
            origin: None,
            goal: None,
            weights: None,
            random_weights: DEFAULT_RANDOM_WEIGHTS,
            objective: RouteObjective::default(),
            seed: 0,
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| RouteError::io_error(e, path))?;

        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> Result<()> {
        self.graph.validate()?;

        let n = self.graph.n_nodes;
        for node in self.origin.iter().chain(self.goal.iter()) {
            RouteError::check_node(*node, n)?;
        }

        if let Some(weights) = &self.weights {
            if weights.len() != self.graph.edges.len() {
                return Err(RouteError::WeightCountMismatch {
                    expected: self.graph.edges.len(),
                    got: weights.len(),
                });
            }
        }

        integer_weight_range(self.random_weights)?;

        Ok(())
    }
}
