//! Shortest/longest route finding on a weighted graph, formulated as a Markov
//! Decision Process and exposed through a gym style `step`/`reset` interface.

pub mod config;
pub mod env;
pub mod error;
pub mod graph;
pub mod logging;
pub mod mdp;
pub mod policy;
pub mod reward;
pub mod spaces;

pub use config::RouteConfig;
pub use env::{ResetOptions, RouteEnv, StepInfo, REWARD_INVALID};
pub use error::{Result, RouteError};
pub use graph::{
    weighted::WeightedGraph, GraphRequest, GraphSpec, RouteGraph, TransitionOutcome,
};
pub use mdp::{MdpArtifacts, Transition, Transitions};
pub use policy::{Policy, RandomPolicy};
pub use reward::RouteObjective;
pub use spaces::ObsActSpace;

/// Node or action index.
pub type Discrete = usize;
pub type Continous = f64;

/// (position, goal)
pub type Observation = (Discrete, Discrete);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EpisodeEvent {
    pub s: Vec<Discrete>,
    pub r: Continous,
}
