//! Least-cost routing on a road network under predicted traffic.
//!
//! A query loads an undirected road graph and a traffic prediction per road,
//! then answers it twice: with uniform cost search and with IDA* pruned by a
//! low-traffic lower bound computed backwards from the destination.

pub mod error;
pub mod graphs;
pub mod loading;
pub mod report;
pub mod search;
pub mod traffic;
pub mod utility;

pub use error::{LoadError, QueryError};
pub use search::query::{run, run_with, HeuristicKind, QueryOutcome};
