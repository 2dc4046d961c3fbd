use std::str::FromStr;

use super::{BaseCost, RoadNameId, VertexId};
use crate::{error::LoadError, loading::record_fields};

/// One direction of an undirected road, owned by the vertex it leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Road {
    name: RoadNameId,
    cost: BaseCost,
    leads_to: VertexId,
}

impl Road {
    pub fn new(name: RoadNameId, cost: BaseCost, leads_to: VertexId) -> Road {
        Road {
            name,
            cost,
            leads_to,
        }
    }

    pub fn name(&self) -> RoadNameId {
        self.name
    }

    /// Cost under normal traffic.
    pub fn cost(&self) -> BaseCost {
        self.cost
    }

    pub fn leads_to(&self) -> VertexId {
        self.leads_to
    }
}

/// A road definition as it appears in the input: `name; vertex_a; vertex_b; cost`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadRecord {
    pub name: String,
    pub vertex_a: String,
    pub vertex_b: String,
    pub cost: BaseCost,
}

impl RoadRecord {
    pub fn new(name: &str, vertex_a: &str, vertex_b: &str, cost: BaseCost) -> RoadRecord {
        RoadRecord {
            name: name.to_string(),
            vertex_a: vertex_a.to_string(),
            vertex_b: vertex_b.to_string(),
            cost,
        }
    }
}

impl FromStr for RoadRecord {
    type Err = LoadError;

    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let fields = record_fields(record);
        let [name, vertex_a, vertex_b, cost] = fields[..] else {
            return Err(LoadError::RoadFieldCount {
                record: record.to_string(),
                found: fields.len(),
            });
        };

        let cost = cost.parse().map_err(|_| LoadError::InvalidCost {
            record: record.to_string(),
        })?;

        Ok(RoadRecord::new(name, vertex_a, vertex_b, cost))
    }
}
