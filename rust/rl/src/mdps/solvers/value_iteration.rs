use super::super::mdp::*;
use routegym::{Continous, Discrete};
use std::rc::Rc;
use tracing::info;

/// Bellman optimality sweeps over a tabular MDP - Sutton & Barto 2018, 4.4.
///
/// Transitions flagged `done` do not bootstrap.
#[derive(Clone)]
pub struct ValueIteration {
    mdp: Rc<dyn Mdp>,
    v: Vec<Continous>,
}

impl ValueIteration {
    pub fn new(mdp: Rc<dyn Mdp>, v_init: Continous) -> Self {
        let v = vec![v_init; mdp.n_s()];
        Self { mdp, v }
    }

    pub fn v(&self) -> &[Continous] {
        &self.v
    }
}

impl MdpSolver<bool> for ValueIteration {
    fn v_star(&self, s: Discrete) -> Continous {
        self.v[s]
    }

    fn q_star(&self, s: Discrete, a: Discrete) -> Option<Continous> {
        let transitions = self.mdp.transitions();
        let gamma = self.mdp.gamma();

        transitions.get(&(s, a)).map(|ts| {
            ts.iter()
                .map(|t| {
                    let next = if t.done { 0. } else { self.v[t.next_state] };
                    t.probability * (t.reward + gamma * next)
                })
                .sum()
        })
    }

    fn pi_star(&self, s: Discrete) -> Option<Discrete> {
        (0..self.mdp.n_a())
            .filter_map(|a| self.q_star(s, a).map(|q| (a, q)))
            .max_by(|x, y| x.1.total_cmp(&y.1).then_with(|| y.0.cmp(&x.0)))
            .map(|(a, _)| a)
    }

    /// Returns whether the largest update fell below `theta`, and the sweeps taken.
    fn exec(&mut self, theta: Continous, num_iterations: Option<usize>) -> (bool, usize) {
        let max_iterations = num_iterations.unwrap_or(usize::MAX);
        let mut i = 0;
        while i < max_iterations {
            i += 1;
            let mut delta: Continous = 0.;
            for s in 0..self.mdp.n_s() {
                let Some(best) = (0..self.mdp.n_a())
                    .filter_map(|a| self.q_star(s, a))
                    .max_by(|x, y| x.total_cmp(y))
                else {
                    continue;
                };
                delta = delta.max((best - self.v[s]).abs());
                self.v[s] = best;
            }

            if delta < theta {
                info!(iterations = i, "Value iteration converged");
                return (true, i);
            }
        }

        (false, i)
    }
}
