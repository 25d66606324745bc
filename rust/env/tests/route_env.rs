extern crate float_eq;
extern crate routegym;
mod common;

use common::*;
use float_eq::*;
use routegym::*;
use std::rc::Rc;

#[test]
fn chain_mdp_and_episode() {
    let mut env = RouteEnv::new(&chain_config(RouteObjective::Shortest)).unwrap();

    let mdp = env.mdp();
    assert_eq!(mdp.p()[[1, 0, 1]], 1.);
    assert_eq!(mdp.p()[[2, 1, 2]], 1.);
    assert_float_eq!(mdp.r()[[0, 1]], -2., abs <= 1e-12);
    assert_float_eq!(mdp.r()[[1, 2]], 5., abs <= 1e-12);

    assert_eq!(env.observation(), (0, 2));
    let si = env.step(2);
    assert_eq!((si.observation, si.reward, si.done), (0, REWARD_INVALID, false));

    let si = env.step(1);
    assert_eq!((si.observation, si.done), (1, false));
    assert_float_eq!(si.reward, -2., abs <= 1e-12);

    let si = env.step(2);
    assert_eq!((si.observation, si.done), (2, true));
    assert_float_eq!(si.reward, 5., abs <= 1e-12);
}

#[test]
fn step_rewards_match_reward_matrix() {
    let mut env = RouteEnv::new(&ring_config(RouteObjective::Longest)).unwrap();
    let mdp = env.mdp();

    for a in [1, 2, 4] {
        let s = env.observation().0;
        let si = env.step(a);
        assert_float_eq!(si.reward, mdp.reward(s, a), abs <= 1e-12);
        assert_eq!(si.observation, mdp.successor(a, s));
    }
    assert_eq!(env.observation(), (4, 4));
}

#[test]
fn following_optimum_earns_refund() {
    let mut env = RouteEnv::new(&ring_config(RouteObjective::Shortest)).unwrap();
    let (path, cost) = env.get_optimal();
    let path = path.to_vec();
    assert_float_eq!(cost, 4., abs <= 1e-12);

    insta::assert_yaml_snapshot!(path, @r###"
    ---
    - 0
    - 3
    - 4
    "###);

    let mut total = 0.;
    let mut done = false;
    for &node in &path[1..] {
        let si = env.step(node);
        total += si.reward;
        done = si.done;
    }
    assert!(done);
    assert_float_eq!(total, -1. + 4., abs <= 1e-12);
}

#[test]
fn graph_reset_rebuilds_everything() {
    let mut env = RouteEnv::new(&chain_config(RouteObjective::Shortest)).unwrap();
    let before = env.mdp();

    let ring = ring_config(RouteObjective::Shortest);
    let position = env
        .reset(ResetOptions {
            graph: Some(ring.graph.clone()),
            origin: Some(1),
            goal: Some(4),
            weights: ring.weights.clone(),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(position, 1);
    assert!(!Rc::ptr_eq(&before, &env.mdp()));
    assert_eq!(env.mdp().n(), 5);
    assert_eq!(env.mdp().p().dim(), (5, 5, 5));
    assert_eq!(env.action_space(), &ObsActSpace::discrete(5));
    assert_eq!(env.observation_space(), &ObsActSpace::route_observation(5));
    assert_eq!(env.get_optimal(), (&[1, 2, 4][..], 7.));
}

#[test]
fn reposition_keeps_mdp() {
    let mut env = RouteEnv::new(&ring_config(RouteObjective::Shortest)).unwrap();
    let before = env.mdp();
    env.step(3);

    let position = env.reset(ResetOptions::reposition(Some(2), None)).unwrap();

    assert_eq!(position, 2);
    assert_eq!(env.observation(), (2, 4));
    assert!(Rc::ptr_eq(&before, &env.mdp()));
    assert_eq!(env.action_space(), &ObsActSpace::discrete(5));
    assert_eq!(env.get_optimal(), (&[2, 4][..], 5.));

    assert!(env.reset(ResetOptions::reposition(Some(9), None)).is_err());
    assert_eq!(env.observation(), (2, 4));
}

#[test]
fn objectives_negate_rewards() {
    let shortest = RouteEnv::new(&ring_config(RouteObjective::Shortest)).unwrap();
    let longest = RouteEnv::new(&ring_config(RouteObjective::Longest)).unwrap();

    let (s, l) = (shortest.mdp(), longest.mdp());
    assert_eq!(s.p(), l.p());
    assert_float_eq!(
        s.r().iter().copied().collect::<Vec<_>>(),
        l.r().iter().map(|x| -x).collect::<Vec<_>>(),
        abs_all <= 1e-12
    );
}

#[test]
fn random_weights_are_seeded() {
    let config = RouteConfig {
        weights: None,
        ..ring_config(RouteObjective::Shortest)
    };

    let a = RouteEnv::new(&config).unwrap();
    let b = RouteEnv::new(&config).unwrap();
    assert_eq!(a.graph().adjacency_matrix(), b.graph().adjacency_matrix());
    assert_eq!(a.mdp().r(), b.mdp().r());
}

#[test]
fn zero_weight_edge_reads_as_invalid() {
    let config = RouteConfig {
        origin: Some(0),
        goal: Some(2),
        weights: Some(vec![0., 1.]),
        ..RouteConfig::new(GraphSpec::directed(3, &[(0, 1), (1, 2)]))
    };
    let mut env = RouteEnv::new(&config).unwrap();

    let si = env.step(1);
    assert_eq!((si.observation, si.reward, si.done), (1, REWARD_INVALID, false));
}

#[test]
fn unreachable_goal_fails_construction() {
    let config = RouteConfig {
        origin: Some(2),
        goal: Some(0),
        ..chain_config(RouteObjective::Shortest)
    };
    assert!(matches!(
        RouteEnv::new(&config),
        Err(RouteError::GoalUnreachable { origin: 2, goal: 0 })
    ));
}

#[test]
fn out_of_range_action_is_penalized() {
    let mut env = RouteEnv::new(&ring_config(RouteObjective::Shortest)).unwrap();
    env.step(3);

    let si = env.step(99);
    assert_eq!((si.observation, si.reward, si.done), (3, REWARD_INVALID, false));
    assert_eq!(env.observation(), (3, 4));
    assert_eq!(env.graph().position(), 3);
}
