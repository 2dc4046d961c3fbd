//! Reads a query document:
//!
//! ```text
//! <Source>A</Source>
//! <Destination>C</Destination>
//! <Roads>
//! R1; A; B; 10
//! R2; B; C; 10
//! </Roads>
//! <Predictions>
//! R1; normal
//! R2; low
//! </Predictions>
//! ```

use std::{io::Read, str::FromStr};

use log::debug;

use crate::{
    error::LoadError,
    graphs::{RoadGraph, RoadRecord},
    traffic::{PredictionRecord, TrafficPredictions},
};

/// Everything needed to run one query, validated but not yet built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    pub source: String,
    pub destination: String,
    pub roads: Vec<RoadRecord>,
    pub predictions: Vec<PredictionRecord>,
}

struct Lines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Lines<'a> {
        Lines {
            lines: text.lines().enumerate(),
        }
    }

    /// Next line and its 1-based number.
    fn next_line(&mut self, tag: &'static str) -> Result<(usize, &'a str), LoadError> {
        self.lines
            .next()
            .map(|(index, line)| (index + 1, line))
            .ok_or(LoadError::UnexpectedEnd { tag })
    }

    fn expect(&mut self, tag: &'static str) -> Result<(), LoadError> {
        let (line, text) = self.next_line(tag)?;
        if text.trim() != tag {
            return Err(LoadError::MissingTag { line, tag });
        }
        Ok(())
    }

    /// Value enclosed by `open` and `close` on a single line.
    fn enclosed(&mut self, open: &'static str, close: &'static str) -> Result<String, LoadError> {
        let (line, text) = self.next_line(open)?;
        let inner = text
            .trim()
            .strip_prefix(open)
            .ok_or(LoadError::MissingTag { line, tag: open })?;
        let value = inner
            .strip_suffix(close)
            .ok_or(LoadError::MissingTag { line, tag: close })?;
        Ok(value.trim().to_string())
    }

    /// Parses every line up to the closing tag.
    fn records<T>(&mut self, close: &'static str) -> Result<Vec<T>, LoadError>
    where
        T: FromStr<Err = LoadError>,
    {
        let mut records = Vec::new();
        loop {
            let (line, text) = self.next_line(close)?;
            if text.trim() == close {
                return Ok(records);
            }
            records.push(text.parse().map_err(|error: LoadError| error.at_line(line))?);
        }
    }
}

/// Splits a record at `;` and trims every field. Trailing empty fields are
/// dropped, so `R1; low;` has two fields.
pub(crate) fn record_fields(record: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = record.split(';').collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    fields.into_iter().map(str::trim).collect()
}

impl QueryInput {
    pub fn parse(text: &str) -> Result<QueryInput, LoadError> {
        let mut lines = Lines::new(text);

        let source = lines.enclosed("<Source>", "</Source>")?;
        let destination = lines.enclosed("<Destination>", "</Destination>")?;

        lines.expect("<Roads>")?;
        let roads = lines.records("</Roads>")?;

        lines.expect("<Predictions>")?;
        let predictions = lines.records("</Predictions>")?;

        debug!(
            "read {} roads and {} predictions, querying {} to {}",
            roads.len(),
            predictions.len(),
            source,
            destination
        );

        Ok(QueryInput {
            source,
            destination,
            roads,
            predictions,
        })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<QueryInput, LoadError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|error| LoadError::Io(error.to_string()))?;
        QueryInput::parse(&text)
    }

    pub fn graph(&self) -> RoadGraph {
        RoadGraph::from_records(&self.roads)
    }

    pub fn traffic_predictions(&self) -> TrafficPredictions {
        TrafficPredictions::from_records(&self.predictions)
    }
}
