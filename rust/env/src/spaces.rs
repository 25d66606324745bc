use crate::Discrete;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObsActSpace {
    /// Refer: https://www.gymlibrary.dev/api/spaces/#discrete
    Discrete { n: usize },

    // Refer: https://www.gymlibrary.dev/api/spaces/#tuple
    Tuple { spaces: Vec<ObsActSpace> },
}

impl ObsActSpace {
    pub fn discrete(n: usize) -> Self {
        ObsActSpace::Discrete { n }
    }

    /// (position, goal), both node indices.
    pub fn route_observation(n: usize) -> Self {
        ObsActSpace::Tuple {
            spaces: vec![Self::discrete(n), Self::discrete(n)],
        }
    }

    pub fn discrete_n(&self) -> Option<usize> {
        if let Self::Discrete { n } = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Number of flat components an item of this space has.
    pub fn arity(&self) -> usize {
        match self {
            ObsActSpace::Discrete { .. } => 1,
            ObsActSpace::Tuple { spaces } => spaces.iter().map(|s| s.arity()).sum(),
        }
    }

    pub fn contains(&self, item: &[Discrete]) -> bool {
        if item.len() != self.arity() {
            return false;
        }

        match self {
            ObsActSpace::Discrete { n } => item[0] < *n,
            ObsActSpace::Tuple { spaces } => {
                let mut offset = 0;
                spaces.iter().all(|s| {
                    let k = s.arity();
                    let ok = s.contains(&item[offset..offset + k]);
                    offset += k;
                    ok
                })
            }
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Discrete> {
        match self {
            ObsActSpace::Discrete { n } => vec![rng.gen_range(0..*n)],
            ObsActSpace::Tuple { spaces } => spaces.iter().flat_map(|s| s.sample(rng)).collect(),
        }
    }
}
