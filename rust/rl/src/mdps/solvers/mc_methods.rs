use super::super::mdp_simulator::*;
use routegym::{Continous, Discrete, EpisodeEvent};
use std::iter::zip;
use std::rc::Rc;

/// State-value estimate from `n_ep` generated episodes.
pub type McEstimator = fn(
    Rc<dyn EpisodeGenerator>,
    Continous,
    usize,
    usize,
) -> routegym::Result<Vec<Continous>>;

/// Ref: https://youtu.be/P0ZvxeQqv0A?si=RLKdOUTNEfKXE63C
pub fn mc_first_visit(
    ep_gen: Rc<dyn EpisodeGenerator>,
    gamma: Continous,
    n_s: usize,
    n_ep: usize,
) -> routegym::Result<Vec<Continous>> {
    mc_core(ep_gen, gamma, n_s, n_ep, is_first_visit)
}

/// Ref: https://youtu.be/P0ZvxeQqv0A?si=RLKdOUTNEfKXE63C
pub fn mc_every_visit(
    ep_gen: Rc<dyn EpisodeGenerator>,
    gamma: Continous,
    n_s: usize,
    n_ep: usize,
) -> routegym::Result<Vec<Continous>> {
    mc_core(ep_gen, gamma, n_s, n_ep, |_, _, _| true)
}

fn mc_core(
    ep_gen: Rc<dyn EpisodeGenerator>,
    gamma: Continous,
    n_s: usize,
    n_ep: usize,
    counts: fn(&[EpisodeEvent], usize, Discrete) -> bool,
) -> routegym::Result<Vec<Continous>> {
    let returns = &mut vec![0 as Continous; n_s];
    let visits = &mut vec![0usize; n_s];

    let eps = ep_gen.generate(n_ep)?;
    for ep in eps.iter().take(n_ep) {
        let mut g = 0.;
        for t in (0..ep.len().saturating_sub(1)).rev() {
            g = gamma * g + ep[t + 1].r;
            let s = ep[t].s[0];
            if counts(ep, t, s) {
                returns[s] += g;
                visits[s] += 1;
            }
        }
    }

    Ok(zip(returns, visits)
        .map(|(&mut r, &mut v)| if v == 0 { 0. } else { r / (v as Continous) })
        .collect())
}

fn is_first_visit(ep: &[EpisodeEvent], t: usize, s: Discrete) -> bool {
    !ep.iter().take(t).any(|x| x.s[0] == s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;
    use routegym::*;

    struct SimpleEnv {
        pub episodes: Vec<Vec<EpisodeEvent>>,
    }

    impl EpisodeGenerator for SimpleEnv {
        fn generate(&self, _n: usize) -> routegym::Result<Vec<Vec<EpisodeEvent>>> {
            Ok(self.episodes.clone())
        }
    }

    fn toy() -> Rc<dyn EpisodeGenerator> {
        Rc::new(SimpleEnv {
            episodes: vec![
                vec![
                    EpisodeEvent { s: vec![1], r: -3. },
                    EpisodeEvent { s: vec![4], r: -2. },
                    EpisodeEvent { s: vec![1], r: -1. },
                    EpisodeEvent { s: vec![2], r: -3. },
                    EpisodeEvent { s: vec![1], r: -1. },
                ],
                vec![
                    EpisodeEvent { s: vec![1], r: -3. },
                    EpisodeEvent { s: vec![4], r: -0. },
                ],
                vec![
                    EpisodeEvent { s: vec![2], r: -3. },
                    EpisodeEvent { s: vec![4], r: -0. },
                ],
            ],
        })
    }

    #[test]
    fn toy_example_with_first_vist() {
        let v = mc_first_visit(toy(), 0.9, 6, 3).unwrap();

        assert_float_eq!(
            v,
            vec![0., (-6.059 / 2.0), (-1. / 2.0), 0., -4.51, 0.],
            abs_all <= 1e-5
        );
    }

    #[test]
    fn toy_example_with_every_vist() {
        let v = mc_every_visit(toy(), 0.9, 6, 3).unwrap();

        assert_float_eq!(
            v,
            vec![
                0.,
                ((-6.059 + -3.0 + -0.9) / 3.0),
                (-1. / 2.0),
                0.,
                -4.51,
                0.
            ],
            abs_all <= 1e-5
        );
    }

    #[test]
    fn optimal_route_value_from_live_env() {
        let config = RouteConfig {
            origin: Some(0),
            goal: Some(2),
            weights: Some(vec![2., 3.]),
            ..RouteConfig::new(GraphSpec::directed(3, &[(0, 1), (1, 2)]))
        };
        struct Forward;
        impl Policy for Forward {
            fn policy(&self, s: &Observation) -> Discrete {
                s.0 + 1
            }
        }

        let env = RouteEnv::new(&config).unwrap();
        let ep_gen = Rc::new(EpisodeGeneratorForEnv::new(env, Rc::new(Forward), 10));
        let v = mc_first_visit(ep_gen, 0.9, 3, 5).unwrap();

        assert_float_eq!(v, vec![-2. + 0.9 * 5., 5., 0.], abs_all <= 1e-9);
    }
}
