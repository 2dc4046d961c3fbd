use thiserror::Error;

/// Malformed input. Fatal to the whole run, raised before any search starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoadError {
    #[error("line {line}: expected `{tag}`")]
    MissingTag { line: usize, tag: &'static str },

    #[error("input ended before `{tag}`")]
    UnexpectedEnd { tag: &'static str },

    #[error("road record `{record}` has {found} fields, expected 4")]
    RoadFieldCount { record: String, found: usize },

    #[error("road record `{record}` has a cost that is not a non-negative integer")]
    InvalidCost { record: String },

    #[error("prediction record `{record}` has {found} fields, expected 2")]
    PredictionFieldCount { record: String, found: usize },

    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: Box<LoadError>,
    },

    #[error("could not read input: {0}")]
    Io(String),
}

impl LoadError {
    pub(crate) fn at_line(self, line: usize) -> LoadError {
        LoadError::Record {
            line,
            source: Box::new(self),
        }
    }
}

/// A query that cannot be answered with the loaded graph and predictions.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown vertex `{0}`")]
    UnknownVertex(String),

    #[error("no traffic prediction for road `{0}`")]
    MissingPrediction(String),
}
