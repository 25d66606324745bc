use routegym::*;

/// 0 -> 1 -> 2 with weights 2 and 3.
#[allow(dead_code)]
pub fn chain_config(objective: RouteObjective) -> RouteConfig {
    RouteConfig {
        origin: Some(0),
        goal: Some(2),
        weights: Some(vec![2., 3.]),
        objective,
        ..RouteConfig::new(GraphSpec::directed(3, &[(0, 1), (1, 2)]))
    }
}

/// Undirected 5 node ring with a chord; optimal 0 -> 4 is 0-3-4 at cost 4.
#[allow(dead_code)]
pub fn ring_config(objective: RouteObjective) -> RouteConfig {
    RouteConfig {
        origin: Some(0),
        goal: Some(4),
        weights: Some(vec![4., 2., 7., 3., 1., 5.]),
        objective,
        seed: 2718,
        ..RouteConfig::new(GraphSpec::undirected(
            5,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 3), (2, 4)],
        ))
    }
}
