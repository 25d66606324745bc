use super::{dijkstra::shortest_path, *};
use itertools::{iproduct, Itertools};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Reference collaborator: dense weighted adjacency, Dijkstra optimum, and
/// rewards signed by the route objective.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Array2<Continous>,
    directed: bool,
    objective: RouteObjective,
    origin: Discrete,
    goal: Discrete,
    position: Discrete,
    dijkstra_path: Vec<Discrete>,
    dijkstra_cost: Continous,
    path_bigram: HashSet<(Discrete, Discrete)>,
    dijkstra_bigram: HashSet<(Discrete, Discrete)>,
}

impl WeightedGraph {
    pub fn weight(&self, from: Discrete, to: Discrete) -> Option<Continous> {
        self.adjacency
            .get((from, to))
            .copied()
            .filter(|&w| w >= 0.)
    }

    pub fn objective(&self) -> RouteObjective {
        self.objective
    }

    fn assign_weights(request: &GraphRequest<'_>, rng: &mut StdRng) -> Result<Vec<Continous>> {
        let n_edges = request.spec.edges.len();
        if let Some(weights) = request.weights {
            if weights.len() != n_edges {
                return Err(RouteError::WeightCountMismatch {
                    expected: n_edges,
                    got: weights.len(),
                });
            }
            return Ok(weights.to_vec());
        }

        let (low, high) = integer_weight_range(request.random_weights)?;
        Ok((0..n_edges)
            .map(|_| rng.gen_range(low..high) as Continous)
            .collect())
    }

    /// Missing endpoints are drawn among distinct node pairs joined by a route.
    fn pick_endpoints(
        adjacency: &Array2<Continous>,
        origin: Option<Discrete>,
        goal: Option<Discrete>,
        rng: &mut StdRng,
    ) -> Result<(Discrete, Discrete)> {
        let n_nodes = adjacency.nrows();
        let origin = origin
            .map(|o| RouteError::check_node(o, n_nodes))
            .transpose()?;
        let goal = goal.map(|g| RouteError::check_node(g, n_nodes)).transpose()?;

        if let (Some(o), Some(g)) = (origin, goal) {
            return Ok((o, g));
        }
        if n_nodes == 1 {
            return Ok((0, 0));
        }

        let candidates = iproduct!(0..n_nodes, 0..n_nodes)
            .filter(|&(o, g)| o != g)
            .filter(|&(o, g)| origin.map_or(true, |x| x == o) && goal.map_or(true, |x| x == g))
            .filter(|&(o, g)| shortest_path(adjacency, o, g).is_some())
            .collect::<Vec<_>>();

        candidates
            .choose(rng)
            .copied()
            .ok_or(RouteError::NoReachablePair { origin, goal })
    }

    fn solve(&mut self) -> Result<()> {
        let (path, cost) = shortest_path(&self.adjacency, self.origin, self.goal).ok_or(
            RouteError::GoalUnreachable {
                origin: self.origin,
                goal: self.goal,
            },
        )?;

        self.dijkstra_bigram = path.iter().copied().tuple_windows().collect();
        self.dijkstra_path = path;
        self.dijkstra_cost = cost;
        debug!(
            origin = self.origin,
            goal = self.goal,
            cost = self.dijkstra_cost,
            "Solved optimal route {:?}",
            self.dijkstra_path
        );

        Ok(())
    }
}

impl RouteGraph for WeightedGraph {
    fn build(request: &GraphRequest<'_>, rng: &mut StdRng) -> Result<Self> {
        let spec = request.spec;
        spec.validate()?;

        let weights = Self::assign_weights(request, rng)?;
        let mut adjacency = Array2::from_elem((spec.n_nodes, spec.n_nodes), NO_EDGE);
        for (&(u, v), &w) in spec.edges.iter().zip(weights.iter()) {
            adjacency[[u, v]] = w;
            if !spec.directed {
                adjacency[[v, u]] = w;
            }
        }

        let (origin, goal) = Self::pick_endpoints(&adjacency, request.origin, request.goal, rng)?;

        let mut graph = Self {
            adjacency,
            directed: spec.directed,
            objective: request.objective,
            origin,
            goal,
            position: origin,
            dijkstra_path: vec![],
            dijkstra_cost: 0.,
            path_bigram: HashSet::new(),
            dijkstra_bigram: HashSet::new(),
        };
        graph.solve()?;

        Ok(graph)
    }

    fn n_nodes(&self) -> usize {
        self.adjacency.nrows()
    }

    fn adjacency_matrix(&self) -> &Array2<Continous> {
        &self.adjacency
    }

    fn position(&self) -> Discrete {
        self.position
    }

    fn origin(&self) -> Discrete {
        self.origin
    }

    fn goal(&self) -> Discrete {
        self.goal
    }

    fn transition(&mut self, action: Discrete) -> TransitionOutcome {
        let Some(w) = self.weight(self.position, action) else {
            return TransitionOutcome::invalid();
        };

        self.path_bigram.insert((self.position, action));
        self.position = action;

        let done = self.position == self.goal;
        let reward = if done {
            self.objective.refund(self.dijkstra_cost)
        } else {
            self.objective.edge_reward(w)
        };

        TransitionOutcome {
            valid: true,
            reward,
            done,
        }
    }

    fn reset(&mut self, origin: Option<Discrete>, goal: Option<Discrete>) -> Result<()> {
        let n = self.n_nodes();
        let origin = RouteError::check_node(origin.unwrap_or(self.origin), n)?;
        let goal = RouteError::check_node(goal.unwrap_or(self.goal), n)?;

        if (origin, goal) != (self.origin, self.goal) {
            let (prev_origin, prev_goal) = (self.origin, self.goal);
            self.origin = origin;
            self.goal = goal;
            if let Err(e) = self.solve() {
                self.origin = prev_origin;
                self.goal = prev_goal;
                return Err(e);
            }
        }

        self.position = self.origin;
        self.path_bigram.clear();

        Ok(())
    }

    fn dijkstra_path(&self) -> &[Discrete] {
        &self.dijkstra_path
    }

    fn dijkstra_cost(&self) -> Continous {
        self.dijkstra_cost
    }

    fn path_bigram(&self) -> &HashSet<(Discrete, Discrete)> {
        &self.path_bigram
    }

    fn dijkstra_bigram(&self) -> &HashSet<(Discrete, Discrete)> {
        &self.dijkstra_bigram
    }

    fn was_directed(&self) -> bool {
        self.directed
    }
}
