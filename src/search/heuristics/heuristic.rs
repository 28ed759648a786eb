use ordered_float::OrderedFloat;
use std::str::FromStr;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// The distance estimates a problem can be asked to use. Which of these are
/// meaningful is up to the problem, and problems should treat any estimate
/// they do not know about as [`HeuristicName::None`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, EnumIter, IntoStaticStr,
)]
pub enum HeuristicName {
    /// No heuristic, every estimate is zero.
    #[default]
    #[strum(serialize = "")]
    None,
    /// Manhattan distance from the agent to the exit.
    #[strum(serialize = "manhattan")]
    Manhattan,
    /// Straight line distance from the agent to the exit.
    #[strum(serialize = "euclidean")]
    Euclidean,
    /// Number of pickups remaining, or the Manhattan distance to the exit once
    /// there are none left.
    #[strum(serialize = "mice-remaining")]
    MiceRemaining,
    /// Manhattan distance to the nearest pickup plus the Manhattan distance
    /// from that pickup to the exit.
    #[strum(serialize = "closest-mouse")]
    ClosestMouse,
    /// Sum of the Manhattan distances between consecutive pickups, in
    /// coordinate order, or the Manhattan distance to the exit once there are
    /// none left. Ignores where the agent stands while pickups remain.
    #[strum(serialize = "total-distance")]
    TotalDistance,
}

impl HeuristicName {
    /// Look up a heuristic by name. Unknown names silently select
    /// [`HeuristicName::None`].
    pub fn from_name(name: &str) -> Self {
        match HeuristicName::from_str(name) {
            Ok(heuristic) => heuristic,
            Err(_) => {
                debug!(heuristic = name, "unknown heuristic, using none");
                HeuristicName::None
            }
        }
    }

    /// Whether `name` names a known heuristic. The empty string is known and
    /// selects [`HeuristicName::None`].
    pub fn is_known(name: &str) -> bool {
        HeuristicName::from_str(name).is_ok()
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}
