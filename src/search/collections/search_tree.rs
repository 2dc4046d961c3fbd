use crate::{
    graphs::{Cost, RoadGraph, RoadNameId, VertexId},
    search::{PathSegment, RoutePath},
};

pub type NodeIndex = usize;

struct SearchNode {
    vertex: VertexId,
    cost: Cost,
    parent: Option<(NodeIndex, RoadNameId, Cost)>,
}

/// Arena of frontier nodes. Each node remembers the node it was reached from,
/// so a path is only materialized once the destination is popped.
#[derive(Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> SearchTree {
        SearchTree::default()
    }

    pub fn root(&mut self, vertex: VertexId) -> NodeIndex {
        self.nodes.push(SearchNode {
            vertex,
            cost: Cost::ZERO,
            parent: None,
        });
        self.nodes.len() - 1
    }

    /// Adds the node reached from `parent` over road `name` at `road_cost`.
    pub fn child(
        &mut self,
        parent: NodeIndex,
        name: RoadNameId,
        road_cost: Cost,
        vertex: VertexId,
    ) -> NodeIndex {
        let cost = self.nodes[parent].cost + road_cost;
        self.nodes.push(SearchNode {
            vertex,
            cost,
            parent: Some((parent, name, road_cost)),
        });
        self.nodes.len() - 1
    }

    pub fn vertex(&self, node: NodeIndex) -> VertexId {
        self.nodes[node].vertex
    }

    pub fn cost(&self, node: NodeIndex) -> Cost {
        self.nodes[node].cost
    }

    /// Traces back from `node` to the root.
    pub fn path(&self, graph: &RoadGraph, node: NodeIndex) -> RoutePath {
        let mut segments = Vec::new();
        let mut current = node;
        while let Some((parent, name, cost)) = self.nodes[current].parent {
            segments.push(PathSegment::new(graph.road_name(name), cost));
            current = parent;
        }
        segments.reverse();

        RoutePath {
            segments,
            cost: self.nodes[node].cost,
        }
    }
}
