use super::{reconstruct_path, SearchResult};
use crate::{node_id::*, Error, NodeID, WeightedGraph};

use std::collections::VecDeque;

/// Searches the graph using [Breadth-First Search](https://en.wikipedia.org/wiki/Breadth-first_search).
///
/// Edge weights are ignored. The returned path has the fewest possible Edges, which is not
/// necessarily the lowest total weight.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use road_search::{WeightedGraph, Node, Edge, search::breadth_first_search};
/// let graph = WeightedGraph::build(
/// 	(0..4).map(|id| Node::new(id, 0.0, 0.0)),
/// 	[
/// 		Edge::new(0, 1, 1.0),
/// 		Edge::new(1, 2, 1.0),
/// 		Edge::new(2, 3, 1.0),
/// 		Edge::new(0, 3, 5.0),
/// 	],
/// )
/// .unwrap();
///
/// let result = breadth_first_search(&graph, 0, 3).unwrap();
/// assert_eq!(result.path, vec![0, 3]);
/// ```
///
/// ## Returns
/// a [`SearchResult`] with an empty `path` if `end` cannot be reached, or
/// [`Error::InvalidEndpoint`] if `start` or `end` are not part of the graph.
pub fn breadth_first_search(
	graph: &WeightedGraph,
	start: NodeID,
	end: NodeID,
) -> Result<SearchResult, Error> {
	super::check_endpoints(graph, start, end)?;

	let mut visited = node_id_set();
	let mut prev = node_id_map();
	let mut visited_in_order = vec![];
	let mut next = VecDeque::new();

	visited.insert(start);
	prev.insert(start, None);
	next.push_back(start);

	let mut found = false;
	while let Some(current_id) = next.pop_front() {
		visited_in_order.push(current_id);
		if current_id == end {
			found = true;
			break;
		}

		for edge in graph.neighbors(current_id) {
			if visited.insert(edge.target) {
				prev.insert(edge.target, Some(current_id));
				next.push_back(edge.target);
			}
		}
	}

	let path = if found {
		reconstruct_path(&prev, start, end)
	} else {
		vec![]
	};

	log::debug!(
		"bfs {} -> {}: visited {} Nodes, path of {} Nodes",
		start,
		end,
		visited_in_order.len(),
		path.len()
	);

	Ok(SearchResult::new(path, visited_in_order, prev))
}
