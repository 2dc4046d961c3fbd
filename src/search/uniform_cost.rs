use log::debug;

use super::{
    collections::{cost_queue::CostQueue, expanded_roads::ExpandedRoads, search_tree::SearchTree},
    PathFinding, RoutePath, SearchStatistics,
};
use crate::{
    graphs::{RoadGraph, VertexId},
    traffic::TrafficModel,
};

/// Uniform cost search over predicted traffic costs.
///
/// Each road name is taken at most once per search, in either direction: it
/// is marked when the first of its endpoints is expanded and skipped from
/// then on.
pub struct UniformCostSearch<'a> {
    graph: &'a RoadGraph,
    traffic: &'a TrafficModel,
    statistics: SearchStatistics,
}

impl<'a> UniformCostSearch<'a> {
    pub fn new(graph: &'a RoadGraph, traffic: &'a TrafficModel) -> UniformCostSearch<'a> {
        UniformCostSearch {
            graph,
            traffic,
            statistics: SearchStatistics::default(),
        }
    }
}

impl PathFinding for UniformCostSearch<'_> {
    fn shortest_path(&mut self, source: VertexId, destination: VertexId) -> Option<RoutePath> {
        self.statistics = SearchStatistics::default();

        let mut expanded_roads = ExpandedRoads::new(self.graph);
        let mut tree = SearchTree::new();
        let mut queue = CostQueue::new();

        let root = tree.root(source);
        queue.insert(tree.cost(root), root);

        while let Some((_cost, node)) = queue.pop() {
            let vertex = tree.vertex(node);
            if vertex == destination {
                debug!(
                    "uniform cost search expanded {} nodes",
                    self.statistics.expanded
                );
                return Some(tree.path(self.graph, node));
            }

            self.statistics.expanded += 1;
            for road in self.graph.roads(vertex) {
                if expanded_roads.expand(road.name()) {
                    continue;
                }
                let road_cost = self.traffic.predicted_cost(road);
                let child = tree.child(node, road.name(), road_cost, road.leads_to());
                queue.insert(tree.cost(child), child);
            }
        }

        debug!(
            "uniform cost search exhausted after {} nodes",
            self.statistics.expanded
        );
        None
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::UniformCostSearch;
    use crate::{
        graphs::{Cost, RoadGraph},
        search::PathFinding,
        traffic::{TrafficLevel, TrafficModel},
    };

    #[test]
    fn source_is_destination() {
        let mut graph = RoadGraph::new();
        graph.add_road("R1", 4, "A", "B");
        let traffic = TrafficModel::uniform(&graph, TrafficLevel::Normal);
        let a = graph.vertex_id("A").unwrap();

        let path = UniformCostSearch::new(&graph, &traffic)
            .shortest_path(a, a)
            .unwrap();
        assert!(path.segments.is_empty());
        assert_eq!(path.cost, Cost::ZERO);
    }

    #[test]
    fn picks_the_cheaper_of_two_routes() {
        let mut graph = RoadGraph::new();
        graph.add_road("Direct", 20, "A", "D");
        graph.add_road("Left", 8, "A", "L");
        graph.add_road("LeftOn", 8, "L", "D");
        let traffic = TrafficModel::uniform(&graph, TrafficLevel::Heavy);
        let (a, d) = (graph.vertex_id("A").unwrap(), graph.vertex_id("D").unwrap());

        let mut ucs = UniformCostSearch::new(&graph, &traffic);
        let path = ucs.shortest_path(a, d).unwrap();

        assert_eq!(path.to_string(), "Left(10.0) -> LeftOn(10.0)");
        assert_eq!(path.cost, Cost::from_hundredths(2000));
        assert!(ucs.statistics().expanded >= 2);
    }

    #[test]
    fn roads_are_not_taken_back() {
        // A dead end; without the road marking B would bounce back to A.
        let mut graph = RoadGraph::new();
        graph.add_road("R1", 1, "A", "B");
        let target = graph.add_vertex("C");
        let traffic = TrafficModel::uniform(&graph, TrafficLevel::Low);

        let mut ucs = UniformCostSearch::new(&graph, &traffic);
        assert_eq!(ucs.shortest_path(graph.vertex_id("A").unwrap(), target), None);
        assert_eq!(ucs.statistics().expanded, 2);
    }
}
