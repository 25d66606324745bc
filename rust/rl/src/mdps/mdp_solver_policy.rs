use super::mdp::MdpSolver;
use routegym::*;
use std::rc::Rc;

pub struct MdpSolverPolicy<T> {
    pub mdp_solver: Rc<dyn MdpSolver<T>>,
}

impl<T> Policy for MdpSolverPolicy<T> {
    fn policy(&self, s: &Observation) -> Discrete {
        self.mdp_solver.pi_star(s.0).unwrap_or(s.0)
    }
}
