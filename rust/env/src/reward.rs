use crate::Continous;
use serde::{Deserialize, Serialize};

/// Which way the agent is pulled along edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteObjective {
    /// Heavier routes earn more negative reward.
    #[default]
    Shortest,
    /// Heavier routes earn more positive reward.
    Longest,
}

impl RouteObjective {
    pub fn multiplier(self) -> Continous {
        match self {
            RouteObjective::Shortest => -1.,
            RouteObjective::Longest => 1.,
        }
    }

    pub fn edge_reward(self, weight: Continous) -> Continous {
        self.multiplier() * weight
    }

    /// Credits back the whole optimal route cost once the goal is reached.
    pub fn refund(self, dijkstra_cost: Continous) -> Continous {
        -self.multiplier() * dijkstra_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;
    use rstest::*;

    #[rstest]
    #[case(RouteObjective::Shortest, -2., 5.)]
    #[case(RouteObjective::Longest, 2., -5.)]
    fn sign_follows_objective(
        #[case] objective: RouteObjective,
        #[case] edge: Continous,
        #[case] refund: Continous,
    ) {
        assert_float_eq!(objective.edge_reward(2.), edge, abs <= 1e-12);
        assert_float_eq!(objective.refund(5.), refund, abs <= 1e-12);
    }

    #[test]
    fn objective_reads_lowercase() {
        let o: RouteObjective = serde_json::from_str("\"longest\"").unwrap();
        assert_eq!(o, RouteObjective::Longest);
        assert_eq!(RouteObjective::default(), RouteObjective::Shortest);
    }
}
