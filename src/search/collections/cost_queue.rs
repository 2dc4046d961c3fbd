use radix_heap::RadixHeapMap;

use crate::graphs::Cost;

/// A monotone min-priority queue keyed by [`Cost`].
///
/// Every inserted cost must be at least the cost most recently popped, which
/// holds for Dijkstra-style searches over non-negative road costs.
pub struct CostQueue<T> {
    heap: RadixHeapMap<i64, T>,
}

impl<T> Default for CostQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CostQueue<T> {
    pub fn new() -> CostQueue<T> {
        CostQueue {
            heap: RadixHeapMap::new(),
        }
    }

    pub fn insert(&mut self, cost: Cost, item: T) {
        // RadixHeapMap is a max-heap
        self.heap.push(-(cost.hundredths() as i64), item);
    }

    pub fn pop(&mut self) -> Option<(Cost, T)> {
        let (negative_cost, item) = self.heap.pop()?;
        Some((Cost::from_hundredths(-negative_cost as u64), item))
    }
}
