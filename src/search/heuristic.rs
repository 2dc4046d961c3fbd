use log::debug;

use super::collections::{cost_queue::CostQueue, expanded_roads::ExpandedRoads};
use crate::{
    graphs::{Cost, RoadGraph, VertexId},
    traffic::TrafficLevel,
};

/// Lower bound on the remaining cost from a vertex to a fixed destination.
pub trait CostHeuristic {
    /// `None` if the destination cannot be reached from `vertex` at all.
    fn lower_bound(&self, vertex: VertexId) -> Option<Cost>;
}

/// Knows nothing, turns IDA* into iterative lengthening.
pub struct TrivialHeuristic {}

impl CostHeuristic for TrivialHeuristic {
    fn lower_bound(&self, _vertex: VertexId) -> Option<Cost> {
        Some(Cost::ZERO)
    }
}

/// Cheapest cost from every vertex to the destination if every road had low
/// traffic. No prediction is cheaper than low traffic, so the bound is
/// admissible and consistent for any traffic model.
#[derive(Clone, Debug)]
pub struct MinCostToDestination {
    destination: VertexId,
    min_cost_to_dest: Vec<Option<Cost>>,
}

impl MinCostToDestination {
    pub fn new(graph: &RoadGraph, destination: VertexId) -> MinCostToDestination {
        let mut heuristic = MinCostToDestination {
            destination,
            min_cost_to_dest: Vec::new(),
        };
        heuristic.compute(graph);
        heuristic
    }

    /// Backward relaxation from the destination over low traffic costs.
    ///
    /// Each road name is relaxed once, from whichever endpoint is settled
    /// first. Roads are symmetric, so relaxing from the later endpoint could
    /// never improve the earlier one.
    pub fn compute(&mut self, graph: &RoadGraph) {
        self.min_cost_to_dest = vec![None; graph.number_of_vertices() as usize];
        self.min_cost_to_dest[self.destination as usize] = Some(Cost::ZERO);

        let mut relaxed = ExpandedRoads::new(graph);
        let mut queue = CostQueue::new();
        queue.insert(Cost::ZERO, self.destination);

        let mut settled = 0;
        while let Some((bound, vertex)) = queue.pop() {
            // stale entry, the vertex was re-inserted with a smaller bound
            if self.min_cost_to_dest[vertex as usize] != Some(bound) {
                continue;
            }
            settled += 1;

            for road in graph.roads(vertex) {
                if relaxed.expand(road.name()) {
                    continue;
                }
                let candidate = bound + TrafficLevel::Low.cost(road.cost());
                let neighbor = &mut self.min_cost_to_dest[road.leads_to() as usize];
                if neighbor.map_or(true, |current| candidate < current) {
                    *neighbor = Some(candidate);
                    queue.insert(candidate, road.leads_to());
                }
            }
        }

        debug!(
            "low traffic bounds for {} of {} vertices",
            settled,
            graph.number_of_vertices()
        );
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }

    pub fn min_costs(&self) -> &[Option<Cost>] {
        &self.min_cost_to_dest
    }
}

impl CostHeuristic for MinCostToDestination {
    fn lower_bound(&self, vertex: VertexId) -> Option<Cost> {
        self.min_cost_to_dest[vertex as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::{CostHeuristic, MinCostToDestination};
    use crate::graphs::{test_graphs, Cost, RoadGraph};

    #[test]
    fn bounds_use_low_traffic_costs() {
        let mut graph = RoadGraph::new();
        graph.add_road("R1", 10, "A", "B");
        graph.add_road("R2", 10, "B", "C");
        graph.add_road("R3", 30, "A", "C");
        let c = graph.vertex_id("C").unwrap();

        let heuristic = MinCostToDestination::new(&graph, c);
        let bound = |name: &str| heuristic.lower_bound(graph.vertex_id(name).unwrap());

        assert_eq!(bound("C"), Some(Cost::ZERO));
        assert_eq!(bound("B"), Some(Cost::from_hundredths(900)));
        assert_eq!(bound("A"), Some(Cost::from_hundredths(1800)));
    }

    #[test]
    fn unreachable_vertices_have_no_bound() {
        let mut graph = RoadGraph::new();
        graph.add_road("R1", 3, "A", "B");
        graph.add_road("R2", 3, "C", "D");
        let isolated = graph.add_vertex("E");

        let heuristic = MinCostToDestination::new(&graph, graph.vertex_id("A").unwrap());

        assert!(heuristic.lower_bound(graph.vertex_id("B").unwrap()).is_some());
        assert_eq!(heuristic.lower_bound(graph.vertex_id("C").unwrap()), None);
        assert_eq!(heuristic.lower_bound(isolated), None);
    }

    #[test]
    fn recomputing_is_idempotent() {
        let graph = test_graphs::small_test_graph();
        let destination = graph.vertex_id("H").unwrap();

        let mut heuristic = MinCostToDestination::new(&graph, destination);
        let first = heuristic.min_costs().to_vec();
        heuristic.compute(&graph);

        assert_eq!(first, heuristic.min_costs());
        assert_eq!(heuristic.destination(), destination);
    }

    #[test]
    fn bounds_are_consistent_along_every_road() {
        let graph = test_graphs::small_test_graph();
        let heuristic = MinCostToDestination::new(&graph, graph.vertex_id("H").unwrap());

        for vertex in graph.vertices() {
            let Some(bound) = heuristic.lower_bound(vertex) else {
                continue;
            };
            for road in graph.roads(vertex) {
                let neighbor = heuristic.lower_bound(road.leads_to()).unwrap();
                let low = Cost::scaled(road.cost(), 90);
                assert!(bound <= neighbor + low);
                assert!(neighbor <= bound + low);
            }
        }
    }
}
