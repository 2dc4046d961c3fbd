use std::fmt;

use itertools::Itertools;
use serde_derive::Serialize;

use crate::graphs::{Cost, VertexId};

pub mod collections;
pub mod heuristic;
pub mod ida_star;
pub mod query;
pub mod uniform_cost;

/// One traversed road and the predicted cost paid for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathSegment {
    pub road: String,
    pub cost: Cost,
}

impl PathSegment {
    pub fn new(road: &str, cost: Cost) -> PathSegment {
        PathSegment {
            road: road.to_string(),
            cost,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.road, self.cost)
    }
}

/// A path found by a search: the roads taken in order and their total cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoutePath {
    pub segments: Vec<PathSegment>,
    pub cost: Cost,
}

impl RoutePath {
    pub fn empty() -> RoutePath {
        RoutePath {
            segments: Vec::new(),
            cost: Cost::ZERO,
        }
    }

    /// Road names in travel order.
    pub fn roads(&self) -> Vec<&str> {
        self.segments
            .iter()
            .map(|segment| segment.road.as_str())
            .collect()
    }
}

/// Renders as `road(cost) -> road(cost)`; the empty path renders as "".
impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.iter().join(" -> "))
    }
}

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    /// Frontier nodes taken out and expanded.
    pub expanded: u64,
    /// Cost-limit iterations, zero for searches without a cost limit.
    pub iterations: u64,
}

pub trait PathFinding {
    fn shortest_path(&mut self, source: VertexId, destination: VertexId) -> Option<RoutePath>;

    fn statistics(&self) -> SearchStatistics;
}
