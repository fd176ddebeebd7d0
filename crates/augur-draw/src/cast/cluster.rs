//! Proximity zones and cluster detection for cast runes.

use std::collections::VecDeque;

use crate::config::CastConfig;
use crate::drawn::Proximity;

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Classify a point by its distance from the canvas centre.
pub fn classify_proximity(x: f64, y: f64, config: &CastConfig) -> Proximity {
    let d = distance((x, y), (CastConfig::CENTER, CastConfig::CENTER));
    if d < config.inner_radius {
        Proximity::Inner
    } else if d < config.middle_radius {
        Proximity::Middle
    } else {
        Proximity::Outer
    }
}

/// Label connected components of the "within `threshold`" graph.
///
/// Components are found by breadth-first search in input order. Components
/// of two or more points receive consecutive ids starting at 1; points with
/// no neighbour within range get `None`. Id 0 is never used.
pub fn cluster_positions(points: &[(f64, f64)], threshold: f64) -> Vec<Option<u32>> {
    let n = points.len();
    let mut labels = vec![None; n];
    let mut visited = vec![false; n];
    let mut next_id = 1u32;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut members = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for other in 0..n {
                if !visited[other] && distance(points[current], points[other]) <= threshold {
                    visited[other] = true;
                    members.push(other);
                    queue.push_back(other);
                }
            }
        }

        // Singletons stay isolated.
        if members.len() > 1 {
            for member in members {
                labels[member] = Some(next_id);
            }
            next_id += 1;
        }
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zones_by_distance() {
        let cfg = CastConfig::default();
        assert_eq!(classify_proximity(50.0, 50.0, &cfg), Proximity::Inner);
        assert_eq!(classify_proximity(60.0, 60.0, &cfg), Proximity::Inner); // ~14.1
        assert_eq!(classify_proximity(65.0, 50.0, &cfg), Proximity::Middle); // exactly 15
        assert_eq!(classify_proximity(50.0, 79.0, &cfg), Proximity::Middle);
        assert_eq!(classify_proximity(80.0, 50.0, &cfg), Proximity::Outer); // exactly 30
        assert_eq!(classify_proximity(10.0, 10.0, &cfg), Proximity::Outer);
    }

    #[test]
    fn empty_input() {
        assert!(cluster_positions(&[], 15.0).is_empty());
    }

    #[test]
    fn lone_point_is_isolated() {
        assert_eq!(cluster_positions(&[(50.0, 50.0)], 15.0), vec![None]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let labels = cluster_positions(&[(10.0, 10.0), (25.0, 10.0)], 15.0);
        assert_eq!(labels, vec![Some(1), Some(1)]);
        let labels = cluster_positions(&[(10.0, 10.0), (25.1, 10.0)], 15.0);
        assert_eq!(labels, vec![None, None]);
    }

    #[test]
    fn chains_are_transitive() {
        // A-B and B-D are within range, A-D is not: all three share a cluster.
        let points = [(10.0, 50.0), (22.0, 50.0), (34.0, 50.0)];
        let labels = cluster_positions(&points, 15.0);
        assert_eq!(labels, vec![Some(1), Some(1), Some(1)]);
    }

    #[test]
    fn separate_groups_get_consecutive_ids() {
        let points = [
            (10.0, 10.0), // isolated
            (50.0, 50.0),
            (55.0, 55.0),
            (90.0, 90.0),
            (85.0, 88.0),
            (10.0, 90.0), // isolated
        ];
        let labels = cluster_positions(&points, 15.0);
        assert_eq!(
            labels,
            vec![None, Some(1), Some(1), Some(2), Some(2), None]
        );
    }

    fn point() -> impl Strategy<Value = (f64, f64)> {
        (10.0f64..=90.0, 10.0f64..=90.0)
    }

    proptest! {
        #[test]
        fn neighbours_share_a_cluster(points in prop::collection::vec(point(), 0..24)) {
            let labels = cluster_positions(&points, 15.0);
            for i in 0..points.len() {
                for j in 0..points.len() {
                    if i != j && distance(points[i], points[j]) <= 15.0 {
                        prop_assert!(labels[i].is_some());
                        prop_assert_eq!(labels[i], labels[j]);
                    }
                }
            }
        }

        #[test]
        fn every_cluster_has_two_members(points in prop::collection::vec(point(), 0..24)) {
            let labels = cluster_positions(&points, 15.0);
            prop_assert!(!labels.contains(&Some(0)));
            for id in labels.iter().flatten() {
                let size = labels.iter().filter(|l| **l == Some(*id)).count();
                prop_assert!(size >= 2);
            }
        }
    }
}
