use ahash::AHashMap;
use log::debug;

use crate::error::QueryError;

pub mod cost;
pub mod road;
pub mod test_graphs;

pub use cost::Cost;
pub use road::{Road, RoadRecord};

pub type VertexId = u32;
pub type RoadNameId = u32;
pub type BaseCost = u32;

/// A named location and the roads leaving it.
#[derive(Clone, Debug)]
pub struct Vertex {
    name: String,
    roads: Vec<Road>,
}

impl Vertex {
    fn new(name: &str) -> Vertex {
        Vertex {
            name: name.to_string(),
            roads: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }
}

/// Undirected road network keyed by vertex name.
///
/// Every undirected road is stored as two [`Road`] records, one owned by each
/// endpoint. Vertices and road names are interned into dense ids on first
/// mention; the graph is never mutated once a query runs on it.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    vertices: Vec<Vertex>,
    vertex_ids: AHashMap<String, VertexId>,
    road_names: Vec<String>,
    road_name_ids: AHashMap<String, RoadNameId>,
}

impl RoadGraph {
    pub fn new() -> RoadGraph {
        RoadGraph::default()
    }

    /// Builds a graph from already validated road records.
    pub fn from_records(records: &[RoadRecord]) -> RoadGraph {
        let mut graph = RoadGraph::new();
        for record in records {
            graph.add_road(&record.name, record.cost, &record.vertex_a, &record.vertex_b);
        }
        debug!(
            "loaded {} vertices and {} road records",
            graph.number_of_vertices(),
            graph.number_of_roads()
        );
        graph
    }

    /// Returns the id of the vertex called `name`, creating it if necessary.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.vertex_ids.get(name) {
            return id;
        }
        let id = self.vertices.len() as VertexId;
        self.vertices.push(Vertex::new(name));
        self.vertex_ids.insert(name.to_string(), id);
        id
    }

    fn add_road_name(&mut self, name: &str) -> RoadNameId {
        if let Some(&id) = self.road_name_ids.get(name) {
            return id;
        }
        let id = self.road_names.len() as RoadNameId;
        self.road_names.push(name.to_string());
        self.road_name_ids.insert(name.to_string(), id);
        id
    }

    /// Adds the undirected road `name` between `vertex_a` and `vertex_b`.
    pub fn add_road(&mut self, name: &str, cost: BaseCost, vertex_a: &str, vertex_b: &str) {
        let name = self.add_road_name(name);
        let a = self.add_vertex(vertex_a);
        let b = self.add_vertex(vertex_b);
        self.vertices[a as usize].roads.push(Road::new(name, cost, b));
        self.vertices[b as usize].roads.push(Road::new(name, cost, a));
    }

    pub fn vertex_id(&self, name: &str) -> Result<VertexId, QueryError> {
        self.vertex_ids
            .get(name)
            .copied()
            .ok_or_else(|| QueryError::UnknownVertex(name.to_string()))
    }

    pub fn get_vertex(&self, name: &str) -> Result<&Vertex, QueryError> {
        let id = self.vertex_id(name)?;
        Ok(&self.vertices[id as usize])
    }

    pub fn vertex(&self, vertex: VertexId) -> &Vertex {
        &self.vertices[vertex as usize]
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        0..self.vertices.len() as VertexId
    }

    pub fn roads(&self, vertex: VertexId) -> &[Road] {
        &self.vertices[vertex as usize].roads
    }

    pub fn road_name(&self, name: RoadNameId) -> &str {
        &self.road_names[name as usize]
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of directed road records, twice the number of undirected roads.
    pub fn number_of_roads(&self) -> u32 {
        self.vertices
            .iter()
            .map(|vertex| vertex.roads.len() as u32)
            .sum()
    }

    pub fn number_of_road_names(&self) -> u32 {
        self.road_names.len() as u32
    }
}
