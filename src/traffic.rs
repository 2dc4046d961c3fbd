use std::str::FromStr;

use ahash::AHashMap;
use log::debug;
use serde_derive::Serialize;

use crate::{
    error::{LoadError, QueryError},
    graphs::{BaseCost, Cost, Road, RoadGraph, RoadNameId},
    loading::record_fields,
};

/// Predicted congestion on a road.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Low,
    Normal,
    Heavy,
}

impl TrafficLevel {
    /// Multiplier applied to the base cost, in percent.
    pub fn percent(&self) -> u32 {
        match self {
            TrafficLevel::Low => 90,
            TrafficLevel::Normal => 100,
            TrafficLevel::Heavy => 125,
        }
    }

    pub fn cost(&self, base: BaseCost) -> Cost {
        Cost::scaled(base, self.percent())
    }

    /// Anything that is neither `low` nor `normal` counts as heavy traffic.
    pub fn parse_lenient(level: &str) -> TrafficLevel {
        let level = level.trim();
        if level.eq_ignore_ascii_case("low") {
            TrafficLevel::Low
        } else if level.eq_ignore_ascii_case("normal") {
            TrafficLevel::Normal
        } else {
            TrafficLevel::Heavy
        }
    }
}

/// A prediction as it appears in the input: `road name; level`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionRecord {
    pub road: String,
    pub level: TrafficLevel,
}

impl PredictionRecord {
    pub fn new(road: &str, level: TrafficLevel) -> PredictionRecord {
        PredictionRecord {
            road: road.to_string(),
            level,
        }
    }
}

impl FromStr for PredictionRecord {
    type Err = LoadError;

    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let fields = record_fields(record);
        let [road, level] = fields[..] else {
            return Err(LoadError::PredictionFieldCount {
                record: record.to_string(),
                found: fields.len(),
            });
        };
        Ok(PredictionRecord::new(road, TrafficLevel::parse_lenient(level)))
    }
}

/// Traffic level per road name.
#[derive(Clone, Debug, Default)]
pub struct TrafficPredictions {
    levels: AHashMap<String, TrafficLevel>,
}

impl TrafficPredictions {
    pub fn new() -> TrafficPredictions {
        TrafficPredictions::default()
    }

    /// Later records for the same road overwrite earlier ones.
    pub fn from_records(records: &[PredictionRecord]) -> TrafficPredictions {
        let mut predictions = TrafficPredictions::new();
        for record in records {
            predictions.insert(&record.road, record.level);
        }
        debug!(
            "{} prediction records for {} roads",
            records.len(),
            predictions.len()
        );
        predictions
    }

    pub fn insert(&mut self, road: &str, level: TrafficLevel) {
        self.levels.insert(road.to_string(), level);
    }

    pub fn get(&self, road: &str) -> Option<TrafficLevel> {
        self.levels.get(road).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Predictions resolved against one graph, indexed by road name id.
#[derive(Clone, Debug)]
pub struct TrafficModel {
    levels: Vec<TrafficLevel>,
}

impl TrafficModel {
    /// Fails if any road of `graph` has no prediction.
    pub fn resolve(
        graph: &RoadGraph,
        predictions: &TrafficPredictions,
    ) -> Result<TrafficModel, QueryError> {
        let levels = (0..graph.number_of_road_names())
            .map(|name| {
                let name = graph.road_name(name);
                predictions
                    .get(name)
                    .ok_or_else(|| QueryError::MissingPrediction(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TrafficModel { levels })
    }

    /// Same level on every road.
    pub fn uniform(graph: &RoadGraph, level: TrafficLevel) -> TrafficModel {
        TrafficModel {
            levels: vec![level; graph.number_of_road_names() as usize],
        }
    }

    pub fn level(&self, name: RoadNameId) -> TrafficLevel {
        self.levels[name as usize]
    }

    /// Predicted cost of traversing `road`.
    pub fn predicted_cost(&self, road: &Road) -> Cost {
        self.level(road.name()).cost(road.cost())
    }
}

#[cfg(test)]
mod tests {
    use super::{PredictionRecord, TrafficLevel, TrafficModel, TrafficPredictions};
    use crate::{
        error::{LoadError, QueryError},
        graphs::{Cost, RoadGraph},
    };

    #[test]
    fn levels_are_trimmed_and_unknown_levels_are_heavy() {
        assert_eq!(TrafficLevel::parse_lenient(" low "), TrafficLevel::Low);
        assert_eq!(TrafficLevel::parse_lenient("Normal"), TrafficLevel::Normal);
        assert_eq!(TrafficLevel::parse_lenient("heavy"), TrafficLevel::Heavy);
        assert_eq!(TrafficLevel::parse_lenient("jammed"), TrafficLevel::Heavy);
        assert_eq!(TrafficLevel::parse_lenient(""), TrafficLevel::Heavy);
    }

    #[test]
    fn factors() {
        assert_eq!(TrafficLevel::Low.cost(10), Cost::from_hundredths(900));
        assert_eq!(TrafficLevel::Normal.cost(10), Cost::from_hundredths(1000));
        assert_eq!(TrafficLevel::Heavy.cost(5), Cost::from_hundredths(625));
    }

    #[test]
    fn parses_prediction_records() {
        let record: PredictionRecord = " R1 ;  low".parse().unwrap();
        assert_eq!(record, PredictionRecord::new("R1", TrafficLevel::Low));

        assert_eq!(
            "R1".parse::<PredictionRecord>().unwrap_err(),
            LoadError::PredictionFieldCount {
                record: "R1".to_string(),
                found: 1
            }
        );
        assert!("R1; low; heavy".parse::<PredictionRecord>().is_err());
    }

    #[test]
    fn ignores_a_trailing_separator() {
        let record: PredictionRecord = "R1; low;".parse().unwrap();
        assert_eq!(record, PredictionRecord::new("R1", TrafficLevel::Low));
        assert_eq!(
            "R1;".parse::<PredictionRecord>().unwrap_err(),
            LoadError::PredictionFieldCount {
                record: "R1;".to_string(),
                found: 1
            }
        );
    }

    #[test]
    fn later_predictions_overwrite_earlier_ones() {
        let predictions = TrafficPredictions::from_records(&[
            PredictionRecord::new("R1", TrafficLevel::Low),
            PredictionRecord::new("R1", TrafficLevel::Normal),
        ]);
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions.get("R1"), Some(TrafficLevel::Normal));
    }

    #[test]
    fn resolving_requires_every_road() {
        let mut graph = RoadGraph::new();
        graph.add_road("R1", 10, "A", "B");
        graph.add_road("R2", 4, "B", "C");

        let mut predictions = TrafficPredictions::new();
        predictions.insert("R1", TrafficLevel::Heavy);
        assert_eq!(
            TrafficModel::resolve(&graph, &predictions).unwrap_err(),
            QueryError::MissingPrediction("R2".to_string())
        );

        predictions.insert("R2", TrafficLevel::Low);
        let model = TrafficModel::resolve(&graph, &predictions).unwrap();
        let b = graph.vertex_id("B").unwrap();
        let costs: Vec<Cost> = graph
            .roads(b)
            .iter()
            .map(|road| model.predicted_cost(road))
            .collect();
        assert_eq!(
            costs,
            vec![Cost::from_hundredths(1250), Cost::from_hundredths(360)]
        );
    }
}
