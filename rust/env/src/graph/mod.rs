pub mod dijkstra;
pub mod weighted;

use crate::{error::*, Continous, Discrete, RouteObjective};
use ndarray::Array2;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Cell value in an adjacency matrix for "no edge".
pub const NO_EDGE: Continous = -1.;

pub const DEFAULT_RANDOM_WEIGHTS: (Continous, Continous) = (0., 10.);

/// Integers in `[low, high)` as the half-open range `ceil(low)..ceil(high)`.
/// Errors when the range is negative, not finite, or holds no integer.
pub fn integer_weight_range((low, high): (Continous, Continous)) -> Result<(u64, u64)> {
    if !(low.is_finite() && high.is_finite()) || low < 0. || low.ceil() >= high.ceil() {
        return Err(RouteError::InvalidWeightRange { low, high });
    }

    Ok((low.ceil() as u64, high.ceil() as u64))
}

/// Topology of a route graph. Weights are assigned when a collaborator is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub n_nodes: usize,
    pub edges: Vec<(Discrete, Discrete)>,
    #[serde(default)]
    pub directed: bool,
}

impl GraphSpec {
    pub fn directed(n_nodes: usize, edges: &[(Discrete, Discrete)]) -> Self {
        Self {
            n_nodes,
            edges: edges.to_vec(),
            directed: true,
        }
    }

    pub fn undirected(n_nodes: usize, edges: &[(Discrete, Discrete)]) -> Self {
        Self {
            n_nodes,
            edges: edges.to_vec(),
            directed: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_nodes == 0 {
            return Err(RouteError::EmptyGraph);
        }

        match self
            .edges
            .iter()
            .find(|(u, v)| *u >= self.n_nodes || *v >= self.n_nodes)
        {
            Some(&(from, to)) => Err(RouteError::EdgeOutOfRange {
                from,
                to,
                n_nodes: self.n_nodes,
            }),
            None => Ok(()),
        }
    }
}

/// Everything needed to construct a fresh collaborator on a graph-replacing reset.
#[derive(Debug, Clone, Copy)]
pub struct GraphRequest<'a> {
    pub spec: &'a GraphSpec,
    pub origin: Option<Discrete>,
    pub goal: Option<Discrete>,
    pub weights: Option<&'a [Continous]>,
    pub random_weights: (Continous, Continous),
    pub objective: RouteObjective,
}

/// Result of attempting to move to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionOutcome {
    pub valid: bool,
    pub reward: Continous,
    pub done: bool,
}

impl TransitionOutcome {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            reward: 0.,
            done: false,
        }
    }

    /// A zero reward is treated like an invalid move, so a valid zero-weight edge
    /// cannot be told apart from a rejected one.
    pub fn is_rejected(&self) -> bool {
        !self.valid || self.reward == 0.
    }
}

/// Graph state and dynamics driven by the environment.
pub trait RouteGraph: Sized {
    fn build(request: &GraphRequest<'_>, rng: &mut StdRng) -> Result<Self>;

    fn n_nodes(&self) -> usize;

    /// N x N weights, `NO_EDGE` where nodes are not connected.
    fn adjacency_matrix(&self) -> &Array2<Continous>;

    fn position(&self) -> Discrete;

    fn origin(&self) -> Discrete;

    fn goal(&self) -> Discrete;

    /// One MDP step. May mutate the position.
    fn transition(&mut self, action: Discrete) -> TransitionOutcome;

    /// Repositions without rebuilding the graph.
    fn reset(&mut self, origin: Option<Discrete>, goal: Option<Discrete>) -> Result<()>;

    fn dijkstra_path(&self) -> &[Discrete];

    fn dijkstra_cost(&self) -> Continous;

    fn path_bigram(&self) -> &HashSet<(Discrete, Discrete)>;

    fn dijkstra_bigram(&self) -> &HashSet<(Discrete, Discrete)>;

    fn was_directed(&self) -> bool;
}
