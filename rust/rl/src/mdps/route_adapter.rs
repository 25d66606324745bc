use super::mdp::Mdp;
use routegym::*;
use std::rc::Rc;

/// Presents the MDP of a route environment to the solvers.
pub struct RouteAdapter {
    n: usize,
    gamma: Continous,
    transitions: Rc<Transitions>,
}

impl RouteAdapter {
    pub fn new(mdp: &MdpArtifacts, gamma: Continous) -> Self {
        Self {
            n: mdp.n(),
            gamma,
            transitions: Rc::new(mdp.transitions()),
        }
    }

    pub fn from_env<G: RouteGraph>(env: &RouteEnv<G>, gamma: Continous) -> Self {
        Self::new(&env.mdp(), gamma)
    }
}

impl Mdp for RouteAdapter {
    fn n_s(&self) -> usize {
        self.n
    }

    fn n_a(&self) -> usize {
        self.n
    }

    fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }

    fn gamma(&self) -> Continous {
        self.gamma
    }
}
