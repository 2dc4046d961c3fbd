use crate::graphs::{RoadGraph, RoadNameId};

/// Road names already taken by a search, in either direction.
pub struct ExpandedRoads {
    expanded: Vec<bool>,
}

impl ExpandedRoads {
    pub fn new(graph: &RoadGraph) -> Self {
        ExpandedRoads {
            expanded: vec![false; graph.number_of_road_names() as usize],
        }
    }

    /// Marks `name` as expanded and returns whether it already was.
    pub fn expand(&mut self, name: RoadNameId) -> bool {
        let is_expanded = self.expanded[name as usize];
        self.expanded[name as usize] = true;
        is_expanded
    }
}
