use crate::{Continous, Discrete};
use ndarray::Array2;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    cost: Continous,
    node: Discrete,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum-weight route from `origin` to `goal` over an adjacency matrix.
/// Returns `None` when the goal cannot be reached.
pub fn shortest_path(
    adjacency: &Array2<Continous>,
    origin: Discrete,
    goal: Discrete,
) -> Option<(Vec<Discrete>, Continous)> {
    let n = adjacency.nrows();
    let mut dist = vec![Continous::INFINITY; n];
    let mut prev: Vec<Option<Discrete>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[origin] = 0.;
    heap.push(Reverse(Frontier {
        cost: 0.,
        node: origin,
    }));

    while let Some(Reverse(Frontier { cost, node })) = heap.pop() {
        if node == goal {
            break;
        }
        if cost > dist[node] {
            continue;
        }

        for (next, &w) in adjacency.row(node).indexed_iter() {
            if w < 0. {
                continue;
            }
            let c = cost + w;
            if c < dist[next] {
                dist[next] = c;
                prev[next] = Some(node);
                heap.push(Reverse(Frontier { cost: c, node: next }));
            }
        }
    }

    if !dist[goal].is_finite() {
        return None;
    }

    let mut path = vec![goal];
    let mut at = goal;
    while let Some(p) = prev[at] {
        path.push(p);
        at = p;
    }
    path.reverse();

    Some((path, dist[goal]))
}
