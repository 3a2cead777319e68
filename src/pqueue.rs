use std::collections::VecDeque;

/// A bucketed priority queue keyed by small integer priorities.
///
/// Buckets are allocated on demand up to the largest priority pushed. Items
/// of equal priority pop in insertion order. Pop-min is amortised O(1) when
/// priorities pushed are never below the last popped one, which holds for
/// A* with a consistent heuristic.
pub struct PriorityQueue<T> {
    buckets: Vec<VecDeque<T>>,
    // Index of the lowest non-empty bucket whenever len > 0
    cursor: usize,
    len: usize,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            cursor: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, priority: usize, item: T) {
        if priority >= self.buckets.len() {
            self.buckets.resize_with(priority + 1, VecDeque::new);
        }
        self.buckets[priority].push_back(item);

        if self.len == 0 || priority < self.cursor {
            self.cursor = priority;
        }
        self.len += 1;
    }

    pub fn pop_min(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buckets[self.cursor].pop_front()?;
        self.len -= 1;

        if self.len > 0 {
            while self.buckets[self.cursor].is_empty() {
                self.cursor += 1;
            }
        }

        Some(item)
    }

    pub fn peek_min(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buckets[self.cursor].front()
    }

    pub fn min_priority(&self) -> Option<usize> {
        (self.len > 0).then_some(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_grow_on_demand() {
        let mut pq = PriorityQueue::new();
        assert_eq!(pq.buckets.len(), 0);
        pq.push(3, 'a');
        assert_eq!(pq.buckets.len(), 4);
        pq.push(1, 'b');
        assert_eq!(pq.buckets.len(), 4);
        pq.push(9, 'c');
        assert_eq!(pq.buckets.len(), 10);
        assert_eq!(pq.len(), 3);
    }

    #[test]
    fn test_cursor_skips_empty_buckets() {
        let mut pq = PriorityQueue::new();
        pq.push(2, 'a');
        pq.push(6, 'b');
        assert_eq!(pq.cursor, 2);
        assert_eq!(pq.pop_min(), Some('a'));
        assert_eq!(pq.cursor, 6);
        assert_eq!(pq.min_priority(), Some(6));
        assert_eq!(pq.pop_min(), Some('b'));
        assert!(pq.is_empty());
        assert_eq!(pq.min_priority(), None);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut pq = PriorityQueue::new();
        for (i, name) in ["n0", "n1", "n2"].into_iter().enumerate() {
            pq.push(4, name);
            assert_eq!(pq.len(), i + 1);
        }
        pq.push(5, "later");

        for expected in ["n0", "n1", "n2", "later"] {
            assert_eq!(pq.peek_min(), Some(&expected));
            assert_eq!(pq.pop_min(), Some(expected));
        }
        assert_eq!(pq.peek_min(), None);
    }

    #[test]
    fn test_push_below_cursor() {
        let mut pq = PriorityQueue::new();
        pq.push(100, "a");
        pq.push(50, "b");
        assert_eq!(pq.pop_min(), Some("b"));
        pq.push(25, "c");
        pq.push(75, "d");
        assert_eq!(pq.min_priority(), Some(25));
        assert_eq!(pq.pop_min(), Some("c"));
        assert_eq!(pq.pop_min(), Some("d"));
        assert_eq!(pq.pop_min(), Some("a"));
        assert_eq!(pq.min_priority(), None);
    }

    #[test]
    fn test_peek_min() {
        let mut pq = PriorityQueue::new();
        assert_eq!(pq.peek_min(), None);
        pq.push(3, "x");
        pq.push(1, "y");
        assert_eq!(pq.peek_min(), Some(&"y"));
        assert_eq!(pq.len(), 2);
        pq.pop_min();
        assert_eq!(pq.peek_min(), Some(&"x"));
    }

    #[test]
    fn test_large_priorities() {
        let mut pq = PriorityQueue::new();
        pq.push(0, "min");
        pq.push(100_000, "max");
        pq.push(4096, "mid");

        assert_eq!(pq.pop_min(), Some("min"));
        assert_eq!(pq.pop_min(), Some("mid"));
        assert_eq!(pq.pop_min(), Some("max"));
    }

    #[test]
    fn test_empty_queue() {
        let mut pq: PriorityQueue<i32> = PriorityQueue::default();
        assert_eq!(pq.pop_min(), None);
        assert_eq!(pq.peek_min(), None);
    }

    #[test]
    fn test_refill_after_drain() {
        let mut pq = PriorityQueue::new();
        pq.push(7, 1);
        assert_eq!(pq.pop_min(), Some(1));
        pq.push(9, 2);
        pq.push(8, 3);
        assert_eq!(pq.pop_min(), Some(3));
        assert_eq!(pq.pop_min(), Some(2));
    }
}
