pub mod cost_queue;
pub mod expanded_roads;
pub mod search_tree;
