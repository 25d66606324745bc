use crate::*;
use rand::prelude::*;
use std::cell::RefCell;

pub trait Policy {
    fn policy(&self, s: &Observation) -> Discrete;
}

/// Picks any node uniformly, ignoring the observation.
pub struct RandomPolicy {
    act_space: ObsActSpace,
    rng: RefCell<StdRng>,
}

impl RandomPolicy {
    pub fn new(act_space: &ObsActSpace, seed: u64) -> Self {
        Self {
            act_space: act_space.clone(),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Policy for RandomPolicy {
    fn policy(&self, _s: &Observation) -> Discrete {
        self.act_space.sample(&mut *self.rng.borrow_mut())[0]
    }
}
