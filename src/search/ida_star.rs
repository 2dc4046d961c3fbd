use itertools::Itertools;
use log::debug;

use super::{heuristic::CostHeuristic, PathFinding, PathSegment, RoutePath, SearchStatistics};
use crate::{
    graphs::{Cost, RoadGraph, RoadNameId, VertexId},
    traffic::TrafficModel,
};

/// Outcome of one depth-first pass under a fixed cost limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bounded {
    /// Reached the destination at this cost.
    Found(Cost),
    /// Pruned; the smallest f-value that exceeded the limit.
    Exceeded(Cost),
    /// Nothing left to expand, no limit would help.
    Exhausted,
}

impl Bounded {
    /// Combines the outcomes of two failed siblings.
    fn merge(self, other: Bounded) -> Bounded {
        match (self, other) {
            (Bounded::Exceeded(a), Bounded::Exceeded(b)) => Bounded::Exceeded(a.min(b)),
            (Bounded::Exhausted, other) | (other, Bounded::Exhausted) => other,
            (found, _) => found,
        }
    }
}

struct Child {
    road: RoadNameId,
    vertex: VertexId,
    road_cost: Cost,
    f_value: Cost,
}

/// Iterative-deepening A* over predicted traffic costs.
///
/// Memory is bounded by the recursion depth: the only state kept across calls
/// is the stack of roads on the current path. A vertex never steps straight
/// back to the vertex it came from, and never re-enters a vertex of the
/// current path at the cost it already had there. Other cycles are cut off
/// by the cost limit.
pub struct IdaStar<'a> {
    graph: &'a RoadGraph,
    traffic: &'a TrafficModel,
    heuristic: &'a dyn CostHeuristic,
    statistics: SearchStatistics,
}

impl<'a> IdaStar<'a> {
    pub fn new(
        graph: &'a RoadGraph,
        traffic: &'a TrafficModel,
        heuristic: &'a dyn CostHeuristic,
    ) -> IdaStar<'a> {
        IdaStar {
            graph,
            traffic,
            heuristic,
            statistics: SearchStatistics::default(),
        }
    }

    fn search(
        &mut self,
        vertex: VertexId,
        destination: VertexId,
        cost: Cost,
        limit: Cost,
        path: &mut Vec<(RoadNameId, Cost)>,
        trail: &mut Vec<(VertexId, Cost)>,
    ) -> Bounded {
        let Some(bound) = self.heuristic.lower_bound(vertex) else {
            return Bounded::Exhausted;
        };
        let f_value = cost + bound;
        // the destination has to pass the limit too, or a costlier path can win
        if f_value > limit {
            return Bounded::Exceeded(f_value);
        }
        if vertex == destination {
            return Bounded::Found(cost);
        }

        self.statistics.expanded += 1;
        let parent = trail.last().map(|&(parent, _)| parent);
        trail.push((vertex, cost));
        let children = self
            .graph
            .roads(vertex)
            .iter()
            .filter(|road| Some(road.leads_to()) != parent)
            .filter_map(|road| {
                let road_cost = self.traffic.predicted_cost(road);
                // zero-cost loop back onto the current path
                if trail.contains(&(road.leads_to(), cost + road_cost)) {
                    return None;
                }
                let bound = self.heuristic.lower_bound(road.leads_to())?;
                Some(Child {
                    road: road.name(),
                    vertex: road.leads_to(),
                    road_cost,
                    f_value: cost + road_cost + bound,
                })
            })
            .sorted_by_key(|child| child.f_value);

        let mut outcome = Bounded::Exhausted;
        for child in children {
            path.push((child.road, child.road_cost));
            let child_outcome = self.search(
                child.vertex,
                destination,
                cost + child.road_cost,
                limit,
                path,
                trail,
            );
            if let Bounded::Found(_) = child_outcome {
                return child_outcome;
            }
            path.pop();
            outcome = outcome.merge(child_outcome);
        }
        trail.pop();

        outcome
    }
}

impl PathFinding for IdaStar<'_> {
    fn shortest_path(&mut self, source: VertexId, destination: VertexId) -> Option<RoutePath> {
        self.statistics = SearchStatistics::default();

        let mut limit = self.heuristic.lower_bound(source)?;
        let mut path = Vec::new();
        let mut trail = Vec::new();

        loop {
            self.statistics.iterations += 1;
            debug!(
                "IDA* iteration {} with cost limit {}",
                self.statistics.iterations, limit
            );

            path.clear();
            trail.clear();
            match self.search(source, destination, Cost::ZERO, limit, &mut path, &mut trail) {
                Bounded::Found(cost) => {
                    debug!(
                        "IDA* expanded {} nodes in {} iterations",
                        self.statistics.expanded, self.statistics.iterations
                    );
                    let segments = path
                        .iter()
                        .map(|&(road, road_cost)| {
                            PathSegment::new(self.graph.road_name(road), road_cost)
                        })
                        .collect();
                    return Some(RoutePath { segments, cost });
                }
                Bounded::Exceeded(next_limit) if next_limit > limit => limit = next_limit,
                _ => {
                    debug!("IDA* exhausted with cost limit {}", limit);
                    return None;
                }
            }
        }
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics
    }
}
