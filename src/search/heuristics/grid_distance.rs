//! Distance estimates for grid problems where the agent has to visit a set of
//! pickups before reaching an exit.

use crate::search::{Coordinate, HeuristicName, HeuristicValue};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Estimate the remaining cost from `agent` to a goal, where a goal is reached
/// by visiting every coordinate in `pickups` and then `exit`.
pub fn evaluate(
    heuristic: HeuristicName,
    agent: &Coordinate,
    pickups: &BTreeSet<Coordinate>,
    exit: &Coordinate,
) -> HeuristicValue {
    match heuristic {
        HeuristicName::None => (0.).into(),
        HeuristicName::Manhattan => manhattan(agent, exit),
        HeuristicName::Euclidean => agent.euclidean_distance(exit).into(),
        HeuristicName::MiceRemaining => {
            if pickups.is_empty() {
                manhattan(agent, exit)
            } else {
                (pickups.len() as f64).into()
            }
        }
        HeuristicName::ClosestMouse => {
            let closest = pickups
                .iter()
                .min_by_key(|pickup| agent.manhattan_distance(pickup));
            match closest {
                Some(pickup) => {
                    let distance =
                        agent.manhattan_distance(pickup) + pickup.manhattan_distance(exit);
                    f64::from(distance).into()
                }
                None => manhattan(agent, exit),
            }
        }
        HeuristicName::TotalDistance => {
            if pickups.is_empty() {
                manhattan(agent, exit)
            } else {
                let total: i32 = pickups
                    .iter()
                    .tuple_windows()
                    .map(|(from, to)| from.manhattan_distance(to))
                    .sum();
                f64::from(total).into()
            }
        }
    }
}

fn manhattan(from: &Coordinate, to: &Coordinate) -> HeuristicValue {
    f64::from(from.manhattan_distance(to)).into()
}
