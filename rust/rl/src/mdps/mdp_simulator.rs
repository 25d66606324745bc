use routegym::{EpisodeEvent, Policy, ResetOptions, RouteEnv, RouteGraph};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

pub trait EpisodeGenerator {
    fn generate(&self, n: usize) -> routegym::Result<Vec<Vec<EpisodeEvent>>>;
}

/// Rolls a policy through a live environment, restarting from the origin each episode.
pub struct EpisodeGeneratorForEnv<G: RouteGraph> {
    env: RefCell<RouteEnv<G>>,
    policy: Rc<dyn Policy>,
    max_steps: usize,
}

impl<G: RouteGraph> EpisodeGeneratorForEnv<G> {
    pub fn new(env: RouteEnv<G>, policy: Rc<dyn Policy>, max_steps: usize) -> Self {
        Self {
            env: RefCell::new(env),
            policy,
            max_steps,
        }
    }
}

impl<G: RouteGraph> EpisodeGenerator for EpisodeGeneratorForEnv<G> {
    fn generate(&self, n: usize) -> routegym::Result<Vec<Vec<EpisodeEvent>>> {
        let env = &mut *self.env.borrow_mut();
        let mut eps = vec![];

        for _ in 0..n {
            let s = env.reset(ResetOptions::default())?;
            let mut ep = vec![EpisodeEvent {
                s: vec![s],
                r: Default::default(),
            }];

            for _ in 0..self.max_steps {
                let a = self.policy.policy(&env.observation());
                let si = env.step(a);
                ep.push(EpisodeEvent {
                    s: vec![si.observation],
                    r: si.reward,
                });
                if si.done {
                    break;
                }
            }

            debug!(steps = ep.len() - 1, "Generated episode");
            eps.push(ep);
        }

        Ok(eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routegym::*;

    struct Scripted(Vec<Discrete>);

    impl Policy for Scripted {
        fn policy(&self, s: &Observation) -> Discrete {
            self.0[s.0]
        }
    }

    #[test]
    fn episodes_stop_at_goal_or_cap() {
        let config = RouteConfig {
            origin: Some(0),
            goal: Some(2),
            weights: Some(vec![2., 3.]),
            ..RouteConfig::new(GraphSpec::directed(3, &[(0, 1), (1, 2)]))
        };

        let env = RouteEnv::new(&config).unwrap();
        let ep_gen = EpisodeGeneratorForEnv::new(env, Rc::new(Scripted(vec![1, 2, 2])), 10);
        let eps = ep_gen.generate(2).unwrap();
        assert_eq!(eps.len(), 2);
        assert_eq!(
            eps[1],
            vec![
                EpisodeEvent { s: vec![0], r: 0. },
                EpisodeEvent { s: vec![1], r: -2. },
                EpisodeEvent { s: vec![2], r: 5. },
            ]
        );

        let env = RouteEnv::new(&config).unwrap();
        let ep_gen = EpisodeGeneratorForEnv::new(env, Rc::new(Scripted(vec![0, 0, 0])), 3);
        let eps = ep_gen.generate(1).unwrap();
        assert_eq!(eps[0].len(), 4);
        assert!(eps[0][1..].iter().all(|e| e.r == REWARD_INVALID));
    }
}
