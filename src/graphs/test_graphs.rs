use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::RoadGraph;
use crate::traffic::{TrafficLevel, TrafficPredictions};

/// Eight connected vertices and twelve roads.
pub fn small_test_graph() -> RoadGraph {
    let mut graph = RoadGraph::new();
    graph.add_road("AB", 3, "A", "B");
    graph.add_road("AC", 5, "A", "C");
    graph.add_road("BC", 3, "B", "C");
    graph.add_road("BD", 5, "B", "D");
    graph.add_road("CD", 2, "C", "D");
    graph.add_road("CE", 2, "C", "E");
    graph.add_road("DE", 4, "D", "E");
    graph.add_road("DF", 7, "D", "F");
    graph.add_road("EF", 3, "E", "F");
    graph.add_road("FG", 4, "F", "G");
    graph.add_road("GH", 3, "G", "H");
    graph.add_road("FH", 9, "F", "H");
    graph
}

/// Predictions cycling through low, normal and heavy in road insertion order.
pub fn mixed_predictions(graph: &RoadGraph) -> TrafficPredictions {
    let levels = [TrafficLevel::Low, TrafficLevel::Normal, TrafficLevel::Heavy];
    let mut predictions = TrafficPredictions::new();
    for name in 0..graph.number_of_road_names() {
        predictions.insert(graph.road_name(name), levels[name as usize % levels.len()]);
    }
    predictions
}

/// A reproducible random road network with uniquely named roads of cost
/// `0..=max_cost` and a random prediction for every road. The graph may be
/// disconnected and may contain parallel roads.
pub fn random_test_graph(
    seed: u64,
    number_of_vertices: u32,
    number_of_roads: u32,
    max_cost: u32,
) -> (RoadGraph, TrafficPredictions) {
    let mut rng = StdRng::seed_from_u64(seed);
    let levels = [TrafficLevel::Low, TrafficLevel::Normal, TrafficLevel::Heavy];

    let mut graph = RoadGraph::new();
    let mut predictions = TrafficPredictions::new();
    for vertex in 0..number_of_vertices {
        graph.add_vertex(&format!("V{}", vertex));
    }

    for road in 0..number_of_roads {
        let a = rng.gen_range(0..number_of_vertices);
        let mut b = rng.gen_range(0..number_of_vertices);
        while number_of_vertices > 1 && a == b {
            b = rng.gen_range(0..number_of_vertices);
        }
        let name = format!("R{}", road);
        let cost = rng.gen_range(0..=max_cost);
        graph.add_road(&name, cost, &format!("V{}", a), &format!("V{}", b));

        let level = *levels.choose(&mut rng).unwrap_or(&TrafficLevel::Normal);
        predictions.insert(&name, level);
    }

    (graph, predictions)
}
