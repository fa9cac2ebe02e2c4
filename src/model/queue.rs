// Min-priority queue for Dijkstra and Prim

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-first priority queue over `Ord` items
///
/// Items are tuples whose first field is the key, e.g. `(Distance, NodeId)`.
/// Ties on the key fall back to the payload fields, which keeps the pop order
/// deterministic across runs.
#[derive(Debug, Clone)]
pub struct MinQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MinQueue<T> {
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Items in unspecified order (for frontier display)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter().map(|Reverse(item)| item)
    }
}

impl<T: Ord> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_first() {
        let mut queue = MinQueue::new();
        queue.push((5, 1));
        queue.push((2, 9));
        queue.push((2, 3));
        queue.push((7, 0));

        assert_eq!(queue.pop(), Some((2, 3)));
        assert_eq!(queue.pop(), Some((2, 9)));
        assert_eq!(queue.pop(), Some((5, 1)));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&(7, 0)]);
    }
}
