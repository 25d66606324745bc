use crate::{graph::NO_EDGE, Continous, Discrete, RouteObjective};
use itertools::iproduct;
use ndarray::{s, Array1, Array2, Array3, Axis};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next_state: Discrete,
    pub probability: Continous,
    pub reward: Continous,
    pub done: bool,
}

/// (s, a) -> possible outcomes.
pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;

/// Transition tensor, reward matrix and initial distribution of a route graph.
///
/// Action `a` means "move to node `a`". `p[[a, s, s']]` is 1 for exactly one `s'`:
/// node `a` when an edge `s -> a` exists, `s` itself otherwise. `r[[s, a]]` is the
/// reward for attempting `a` from `s`.
///
/// The tensor is dense, so memory grows as N^3. Meant for small graphs only.
#[derive(Debug, Clone, PartialEq)]
pub struct MdpArtifacts {
    p: Array3<Continous>,
    r: Array2<Continous>,
    alpha: Array1<Continous>,
    origin: Discrete,
    goal: Discrete,
}

impl MdpArtifacts {
    pub fn build(
        adjacency: &Array2<Continous>,
        origin: Discrete,
        goal: Discrete,
        dijkstra_cost: Continous,
        objective: RouteObjective,
    ) -> Self {
        let n = adjacency.nrows();
        let connectivity = adjacency.mapv(|w| if w >= 0. { 1. } else { 0. });

        let mut p = Array3::<Continous>::zeros((n, n, n));
        for (a, mut p_a) in p.axis_iter_mut(Axis(0)).enumerate() {
            p_a.assign(&connectivity);
            for (j, mut col) in p_a.axis_iter_mut(Axis(1)).enumerate() {
                if j != a {
                    col.fill(0.);
                }
            }

            // Node a not reachable: stay put.
            for (s, mut row) in p_a.axis_iter_mut(Axis(0)).enumerate() {
                if !row.iter().any(|&x| x == 1.) {
                    row[s] = 1.;
                }
            }
        }

        let sentinel = 10. * adjacency.fold(Continous::NEG_INFINITY, |m, &w| m.max(w));
        let mut r = adjacency.mapv(|w| if w == NO_EDGE { sentinel } else { w });
        r.mapv_inplace(|w| objective.multiplier() * w);

        // Without the refund, agents learn to stall in dead ends instead of finishing.
        let refund = objective.refund(dijkstra_cost);
        for (a, s) in iproduct!(0..n, 0..n) {
            if p[[a, s, goal]] == 1. {
                r[[s, goal]] = refund;
            }
        }

        // Index sequence with the origin entry set to 1, not a one-hot vector.
        let mut alpha = Array1::from_iter((0..n).map(|i| i as Continous));
        alpha[origin] = 1.;

        Self {
            p,
            r,
            alpha,
            origin,
            goal,
        }
    }

    pub fn n(&self) -> usize {
        self.r.nrows()
    }

    pub fn p(&self) -> &Array3<Continous> {
        &self.p
    }

    pub fn r(&self) -> &Array2<Continous> {
        &self.r
    }

    pub fn alpha(&self) -> &Array1<Continous> {
        &self.alpha
    }

    pub fn origin(&self) -> Discrete {
        self.origin
    }

    pub fn goal(&self) -> Discrete {
        self.goal
    }

    pub fn successor(&self, a: Discrete, s: Discrete) -> Discrete {
        self.p
            .slice(s![a, s, ..])
            .iter()
            .position(|&x| x == 1.)
            .unwrap_or(s)
    }

    pub fn reward(&self, s: Discrete, a: Discrete) -> Continous {
        self.r[[s, a]]
    }

    pub fn transitions(&self) -> Transitions {
        iproduct!(0..self.n(), 0..self.n())
            .map(|(s, a)| {
                let next_state = self.successor(a, s);
                let t = Transition {
                    next_state,
                    probability: 1.,
                    reward: self.reward(s, a),
                    done: next_state == self.goal,
                };
                ((s, a), vec![t])
            })
            .collect()
    }
}
