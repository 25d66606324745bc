use crate::{
    config::RouteConfig,
    error::*,
    graph::{weighted::WeightedGraph, *},
    mdp::MdpArtifacts,
    spaces::ObsActSpace,
    Continous, Discrete, Observation, RouteObjective,
};
use rand::prelude::*;
use serde_json::{json, Value};
use std::rc::Rc;
use tracing::{debug, info};

/// Reward for an action the graph rejected.
pub const REWARD_INVALID: Continous = -1000.;

#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    pub observation: Discrete,
    pub reward: Continous,
    pub done: bool,
    pub info: Value,
}

/// Arguments to [`RouteEnv::reset`]. Without a graph only origin and goal are used.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetOptions {
    pub graph: Option<GraphSpec>,
    pub origin: Option<Discrete>,
    pub goal: Option<Discrete>,
    pub weights: Option<Vec<Continous>>,
    pub random_weights: (Continous, Continous),
}

impl Default for ResetOptions {
    fn default() -> Self {
        Self {
            graph: None,
            origin: None,
            goal: None,
            weights: None,
            random_weights: DEFAULT_RANDOM_WEIGHTS,
        }
    }
}

impl ResetOptions {
    pub fn reposition(origin: Option<Discrete>, goal: Option<Discrete>) -> Self {
        Self {
            origin,
            goal,
            ..Default::default()
        }
    }

    pub fn with_graph(graph: GraphSpec) -> Self {
        Self {
            graph: Some(graph),
            ..Default::default()
        }
    }
}

/// Route finding on a weighted graph, exposed as a gym style environment.
///
/// Actions are node indices: action `a` asks to move to node `a`.
/// Observations are `(position, goal)`.
pub struct RouteEnv<G: RouteGraph = WeightedGraph> {
    graph: G,
    mdp: Rc<MdpArtifacts>,
    objective: RouteObjective,
    act_space: ObsActSpace,
    obs_space: ObsActSpace,
    rng: StdRng,
}

impl RouteEnv<WeightedGraph> {
    pub fn new(config: &RouteConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

impl<G: RouteGraph> RouteEnv<G> {
    pub fn from_config(config: &RouteConfig) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let request = GraphRequest {
            spec: &config.graph,
            origin: config.origin,
            goal: config.goal,
            weights: config.weights.as_deref(),
            random_weights: config.random_weights,
            objective: config.objective,
        };
        let graph = G::build(&request, &mut rng)?;

        Ok(Self::assemble(graph, config.objective, rng))
    }

    /// Wraps an already built graph.
    pub fn from_graph(graph: G, objective: RouteObjective, seed: u64) -> Self {
        Self::assemble(graph, objective, StdRng::seed_from_u64(seed))
    }

    fn assemble(graph: G, objective: RouteObjective, rng: StdRng) -> Self {
        let n = graph.n_nodes();
        Self {
            mdp: Rc::new(Self::make_mdp(&graph, objective)),
            graph,
            objective,
            act_space: ObsActSpace::discrete(n),
            obs_space: ObsActSpace::route_observation(n),
            rng,
        }
    }

    fn make_mdp(graph: &G, objective: RouteObjective) -> MdpArtifacts {
        let mdp = MdpArtifacts::build(
            graph.adjacency_matrix(),
            graph.origin(),
            graph.goal(),
            graph.dijkstra_cost(),
            objective,
        );
        info!(
            n_nodes = mdp.n(),
            origin = graph.origin(),
            goal = graph.goal(),
            objective = ?objective,
            "Built route MDP"
        );

        mdp
    }

    pub fn step(&mut self, action: Discrete) -> StepInfo {
        let outcome = self.graph.transition(action);
        let reward = if outcome.is_rejected() {
            debug!(action, position = self.graph.position(), "Invalid action");
            REWARD_INVALID
        } else {
            outcome.reward
        };

        StepInfo {
            observation: self.graph.position(),
            reward,
            done: outcome.done,
            info: json!({}),
        }
    }

    /// Starts a new episode. Supplying a graph rebuilds the collaborator, both spaces
    /// and the MDP; otherwise only origin, goal and position change.
    pub fn reset(&mut self, options: ResetOptions) -> Result<Discrete> {
        match options.graph {
            None => {
                self.graph.reset(options.origin, options.goal)?;
                debug!(
                    origin = self.graph.origin(),
                    goal = self.graph.goal(),
                    "Repositioned"
                );
            }
            Some(ref spec) => {
                let request = GraphRequest {
                    spec,
                    origin: options.origin,
                    goal: options.goal,
                    weights: options.weights.as_deref(),
                    random_weights: options.random_weights,
                    objective: self.objective,
                };
                let graph = G::build(&request, &mut self.rng)?;
                let n = graph.n_nodes();

                self.mdp = Rc::new(Self::make_mdp(&graph, self.objective));
                self.act_space = ObsActSpace::discrete(n);
                self.obs_space = ObsActSpace::route_observation(n);
                self.graph = graph;
            }
        }

        Ok(self.graph.position())
    }

    /// Optimal route and its total weight.
    pub fn get_optimal(&self) -> (&[Discrete], Continous) {
        (self.graph.dijkstra_path(), self.graph.dijkstra_cost())
    }

    pub fn observation(&self) -> Observation {
        (self.graph.position(), self.graph.goal())
    }

    pub fn action_space(&self) -> &ObsActSpace {
        &self.act_space
    }

    pub fn observation_space(&self) -> &ObsActSpace {
        &self.obs_space
    }

    pub fn action_space_sample(&mut self) -> Discrete {
        self.act_space.sample(&mut self.rng)[0]
    }

    pub fn mdp(&self) -> Rc<MdpArtifacts> {
        Rc::clone(&self.mdp)
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn objective(&self) -> RouteObjective {
        self.objective
    }
}
