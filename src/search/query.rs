use clap::ValueEnum;
use log::info;
use serde_derive::Serialize;

use super::{
    heuristic::{CostHeuristic, MinCostToDestination, TrivialHeuristic},
    ida_star::IdaStar,
    uniform_cost::UniformCostSearch,
    PathFinding, RoutePath, SearchStatistics,
};
use crate::{
    error::QueryError,
    graphs::RoadGraph,
    traffic::{TrafficModel, TrafficPredictions},
};

/// Lower bound used to prune IDA*.
#[derive(Debug, Default, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    /// Backward relaxation from the destination at low traffic.
    #[default]
    MinCost,
    /// Zero everywhere.
    Trivial,
}

/// Results of both searches for one query.
#[derive(Clone, Debug, Serialize)]
pub struct QueryOutcome {
    pub source: String,
    pub destination: String,
    pub ucs: Option<RoutePath>,
    pub ida_star: Option<RoutePath>,
    pub ucs_statistics: SearchStatistics,
    pub ida_star_statistics: SearchStatistics,
}

impl QueryOutcome {
    /// Both searches found a path.
    pub fn found(&self) -> bool {
        self.ucs.is_some() && self.ida_star.is_some()
    }
}

pub fn run(
    source: &str,
    destination: &str,
    graph: &RoadGraph,
    predictions: &TrafficPredictions,
) -> Result<QueryOutcome, QueryError> {
    run_with(source, destination, graph, predictions, HeuristicKind::default())
}

/// Resolves the query against `graph`, precomputes the heuristic and runs
/// uniform cost search followed by IDA*.
pub fn run_with(
    source: &str,
    destination: &str,
    graph: &RoadGraph,
    predictions: &TrafficPredictions,
    heuristic_kind: HeuristicKind,
) -> Result<QueryOutcome, QueryError> {
    let source_id = graph.vertex_id(source)?;
    let destination_id = graph.vertex_id(destination)?;
    let traffic = TrafficModel::resolve(graph, predictions)?;

    let heuristic: Box<dyn CostHeuristic> = match heuristic_kind {
        HeuristicKind::MinCost => Box::new(MinCostToDestination::new(graph, destination_id)),
        HeuristicKind::Trivial => Box::new(TrivialHeuristic {}),
    };

    let mut ucs = UniformCostSearch::new(graph, &traffic);
    let ucs_path = ucs.shortest_path(source_id, destination_id);
    info!(
        "uniform cost search from {} to {}: {}",
        source,
        destination,
        describe(&ucs_path)
    );

    let mut ida_star = IdaStar::new(graph, &traffic, heuristic.as_ref());
    let ida_star_path = ida_star.shortest_path(source_id, destination_id);
    info!(
        "IDA* from {} to {}: {}",
        source,
        destination,
        describe(&ida_star_path)
    );

    Ok(QueryOutcome {
        source: source.to_string(),
        destination: destination.to_string(),
        ucs: ucs_path,
        ida_star: ida_star_path,
        ucs_statistics: ucs.statistics(),
        ida_star_statistics: ida_star.statistics(),
    })
}

fn describe(path: &Option<RoutePath>) -> String {
    match path {
        Some(path) => format!("cost {} over {} roads", path.cost, path.segments.len()),
        None => "no path".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{run, run_with, HeuristicKind};
    use crate::{
        error::QueryError,
        graphs::{Cost, RoadGraph},
        traffic::{TrafficLevel, TrafficPredictions},
    };

    fn line_graph() -> (RoadGraph, TrafficPredictions) {
        let mut graph = RoadGraph::new();
        graph.add_road("R1", 10, "A", "B");
        graph.add_road("R2", 10, "B", "C");
        let mut predictions = TrafficPredictions::new();
        predictions.insert("R1", TrafficLevel::Normal);
        predictions.insert("R2", TrafficLevel::Low);
        (graph, predictions)
    }

    #[test]
    fn both_searches_agree() {
        let (graph, predictions) = line_graph();
        let outcome = run("A", "C", &graph, &predictions).unwrap();

        assert!(outcome.found());
        assert_eq!(outcome.ucs, outcome.ida_star);
        let path = outcome.ucs.unwrap();
        assert_eq!(path.to_string(), "R1(10.0) -> R2(9.0)");
        assert_eq!(path.cost, Cost::from_hundredths(1900));
    }

    #[test]
    fn trivial_heuristic_finds_the_same_path() {
        let (graph, predictions) = line_graph();
        let outcome = run_with("C", "A", &graph, &predictions, HeuristicKind::Trivial).unwrap();

        assert_eq!(outcome.ucs, outcome.ida_star);
        assert_eq!(outcome.ida_star.unwrap().to_string(), "R2(9.0) -> R1(10.0)");
    }

    #[test]
    fn unknown_endpoints_are_errors() {
        let (graph, predictions) = line_graph();
        assert_eq!(
            run("A", "Z", &graph, &predictions).unwrap_err(),
            QueryError::UnknownVertex("Z".to_string())
        );
        assert_eq!(
            run("Y", "A", &graph, &predictions).unwrap_err(),
            QueryError::UnknownVertex("Y".to_string())
        );
    }

    #[test]
    fn missing_prediction_is_an_error() {
        let (graph, _) = line_graph();
        let mut predictions = TrafficPredictions::new();
        predictions.insert("R1", TrafficLevel::Low);
        assert_eq!(
            run("A", "C", &graph, &predictions).unwrap_err(),
            QueryError::MissingPrediction("R2".to_string())
        );
    }
}
