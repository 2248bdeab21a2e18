/// A min-priority queue that keeps its entries sorted on insertion.
///
/// There is no decrease-key operation: the same element may be queued several times with
/// different priorities, and it is up to the caller to ignore outdated entries.
///
/// Entries with equal priority leave the queue in the order they were added, which keeps
/// every search that uses the queue deterministic.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use road_search::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.enqueue('b', 2.0);
/// queue.enqueue('a', 1.0);
/// queue.enqueue('c', 2.0);
///
/// assert_eq!(queue.dequeue(), Some(('a', 1.0)));
/// assert_eq!(queue.dequeue(), Some(('b', 2.0)));
/// assert_eq!(queue.dequeue(), Some(('c', 2.0)));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
	// sorted by descending priority, so the next entry is always at the end
	entries: Vec<(T, f64)>,
}

impl<T> PriorityQueue<T> {
	/// creates an empty queue
	pub fn new() -> PriorityQueue<T> {
		PriorityQueue {
			entries: Vec::new(),
		}
	}

	/// creates an empty queue with room for `capacity` entries
	pub fn with_capacity(capacity: usize) -> PriorityQueue<T> {
		PriorityQueue {
			entries: Vec::with_capacity(capacity),
		}
	}

	/// Inserts `element` behind every entry with a lower or equal `priority`.
	///
	/// `priority` must not be NaN.
	pub fn enqueue(&mut self, element: T, priority: f64) {
		debug_assert!(!priority.is_nan(), "NaN priority");
		let index = self.entries.partition_point(|&(_, other)| other > priority);
		self.entries.insert(index, (element, priority));
	}

	/// Removes the entry with the lowest priority, or returns `None` if the queue is empty.
	pub fn dequeue(&mut self) -> Option<(T, f64)> {
		self.entries.pop()
	}

	/// the entry [`dequeue`](Self::dequeue) would return next
	pub fn peek(&self) -> Option<(&T, f64)> {
		self.entries.last().map(|(element, priority)| (element, *priority))
	}

	/// `true` if there are no entries left
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// the number of entries, outdated ones included
	pub fn len(&self) -> usize {
		self.entries.len()
	}
}

impl<T> Default for PriorityQueue<T> {
	fn default() -> PriorityQueue<T> {
		PriorityQueue::new()
	}
}
