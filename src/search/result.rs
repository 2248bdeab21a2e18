use crate::{node_id::*, NodeID, WeightedGraph};

/// The outcome of a single search.
///
/// Besides the `path`, a SearchResult records everything needed to replay the search step
/// by step: the order in which Nodes were visited and the predecessor of every Node the
/// search touched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
	/// The Nodes from start to end, both included.
	///
	/// Empty if the end could not be reached. This is **not** an error.
	pub path: Vec<NodeID>,
	/// every Node in the order it was visited, without duplicates
	pub visited_in_order: Vec<NodeID>,
	/// The predecessor of every Node that was touched during the search.
	///
	/// The start Node maps to `None`. Nodes that were never reached are missing.
	pub prev: NodeIDMap<Option<NodeID>>,
}

impl SearchResult {
	/// creates a new SearchResult
	pub fn new(
		path: Vec<NodeID>,
		visited_in_order: Vec<NodeID>,
		prev: NodeIDMap<Option<NodeID>>,
	) -> SearchResult {
		SearchResult {
			path,
			visited_in_order,
			prev,
		}
	}

	/// `true` if a path to the end was found
	pub fn is_found(&self) -> bool {
		!self.path.is_empty()
	}

	/// the number of Edges along the path, `0` if no path was found
	pub fn hops(&self) -> usize {
		self.path.len().saturating_sub(1)
	}

	/// the total weight of the path in `graph`, see [`WeightedGraph::path_cost`]
	pub fn cost(&self, graph: &WeightedGraph) -> f64 {
		graph.path_cost(&self.path)
	}
}

use std::fmt;
impl fmt::Display for SearchResult {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Visited = {}]: ", self.visited_in_order.len())?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

/// Walks `prev` backwards from `end` until `start` is reached.
///
/// Returns an empty path if the chain breaks off or loops before reaching `start`.
pub(crate) fn reconstruct_path(
	prev: &NodeIDMap<Option<NodeID>>,
	start: NodeID,
	end: NodeID,
) -> Vec<NodeID> {
	let mut steps = vec![end];
	let mut current = end;

	while current != start {
		match prev.get(&current) {
			Some(&Some(previous)) if steps.len() <= prev.len() => {
				steps.push(previous);
				current = previous;
			}
			_ => return vec![],
		}
	}
	steps.reverse();
	steps
}

#[cfg(test)]
mod tests {
	use super::*;

	fn prev_map(entries: &[(NodeID, Option<NodeID>)]) -> NodeIDMap<Option<NodeID>> {
		entries.iter().copied().collect()
	}

	#[test]
	fn reconstruct() {
		let prev = prev_map(&[(0, None), (1, Some(0)), (2, Some(1)), (3, Some(0))]);
		assert_eq!(reconstruct_path(&prev, 0, 2), vec![0, 1, 2]);
		assert_eq!(reconstruct_path(&prev, 0, 3), vec![0, 3]);
		assert_eq!(reconstruct_path(&prev, 0, 0), vec![0]);
	}

	#[test]
	fn reconstruct_broken_chain() {
		// 2 claims a predecessor, but the chain ends before reaching the start
		let prev = prev_map(&[(0, None), (1, None), (2, Some(1))]);
		assert_eq!(reconstruct_path(&prev, 0, 2), Vec::<NodeID>::new());
		assert_eq!(reconstruct_path(&prev, 0, 5), Vec::<NodeID>::new());
	}

	#[test]
	fn reconstruct_loop() {
		let prev = prev_map(&[(0, None), (1, Some(2)), (2, Some(1))]);
		assert_eq!(reconstruct_path(&prev, 0, 1), Vec::<NodeID>::new());
	}

	#[test]
	fn display() {
		let result = SearchResult::new(vec![4, 2, 0], vec![4, 3, 2, 0], node_id_map());
		assert_eq!(&format!("{}", result), "Path[Visited = 4]: 4 -> 2 -> 0");
		assert_eq!(result.hops(), 2);
		assert!(result.is_found());
	}

	#[test]
	fn display_empty() {
		let result = SearchResult::new(vec![], vec![1], node_id_map());
		assert_eq!(&format!("{}", result), "Path[Visited = 1]: <empty>");
		assert_eq!(result.hops(), 0);
		assert!(!result.is_found());
	}
}
