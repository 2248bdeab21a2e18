use super::{reconstruct_path, SearchResult};
use crate::{node_id::*, Error, NodeID, PriorityQueue, WeightedGraph};

/// Searches the graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// The search stops as soon as `end` is visited, so the rest of the graph is left unexplored.
/// The returned path is the one with the lowest total weight.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use road_search::{WeightedGraph, Node, Edge, search::dijkstra_search};
/// // A--1--B
/// // |     |
/// // 5     1
/// // |     |
/// // D--1--C
/// let (a, b, c, d) = (0, 1, 2, 3);
/// let graph = WeightedGraph::build(
/// 	[
/// 		Node::new(a, 0.0, 0.0),
/// 		Node::new(b, 0.0, 1.0),
/// 		Node::new(c, 1.0, 1.0),
/// 		Node::new(d, 1.0, 0.0),
/// 	],
/// 	[
/// 		Edge::new(a, b, 1.0),
/// 		Edge::new(b, c, 1.0),
/// 		Edge::new(c, d, 1.0),
/// 		Edge::new(a, d, 5.0),
/// 	],
/// )
/// .unwrap();
///
/// let result = dijkstra_search(&graph, a, d).unwrap();
///
/// assert_eq!(result.path, vec![a, b, c, d]);
/// assert_eq!(result.cost(&graph), 3.0);
/// ```
///
/// ## Returns
/// a [`SearchResult`] with an empty `path` if `end` cannot be reached, or
/// [`Error::InvalidEndpoint`] if `start` or `end` are not part of the graph.
pub fn dijkstra_search(
	graph: &WeightedGraph,
	start: NodeID,
	end: NodeID,
) -> Result<SearchResult, Error> {
	super::check_endpoints(graph, start, end)?;

	let mut distance = node_id_map();
	let mut prev = node_id_map();
	let mut settled = node_id_set();
	let mut visited_in_order = vec![];
	let mut next = PriorityQueue::new();

	distance.insert(start, 0.0);
	prev.insert(start, None);
	next.enqueue(start, 0.0);

	let mut found = false;
	while let Some((current_id, _)) = next.dequeue() {
		// outdated duplicate of an already settled Node
		if !settled.insert(current_id) {
			continue;
		}
		visited_in_order.push(current_id);
		if current_id == end {
			found = true;
			break;
		}

		let current_cost = distance[&current_id];

		for edge in graph.neighbors(current_id) {
			let other_id = edge.target;
			if settled.contains(&other_id) {
				continue;
			}
			let other_cost = current_cost + edge.weight;
			// an unreached Node is always relaxed, even if the sum overflowed to infinity
			let known_cost = distance.get(&other_id).copied();

			if known_cost.map_or(true, |known| other_cost < known) {
				log::trace!("relax {} via {}: {:?} -> {}", other_id, current_id, known_cost, other_cost);
				distance.insert(other_id, other_cost);
				prev.insert(other_id, Some(current_id));
				next.enqueue(other_id, other_cost);
			}
		}
	}

	let path = if found {
		reconstruct_path(&prev, start, end)
	} else {
		vec![]
	};

	log::debug!(
		"dijkstra {} -> {}: visited {} Nodes, path of {} Nodes",
		start,
		end,
		visited_in_order.len(),
		path.len()
	);

	Ok(SearchResult::new(path, visited_in_order, prev))
}
