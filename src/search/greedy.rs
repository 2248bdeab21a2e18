use super::{reconstruct_path, SearchResult};
use crate::{node_id::*, Error, NodeID, PriorityQueue, WeightedGraph};

/// Searches the graph using [Greedy Best-First Search](https://en.wikipedia.org/wiki/Best-first_search).
///
/// Always continues with the discovered Node closest to `end` in a straight line, ignoring
/// how expensive it was to get there. Every Node keeps the predecessor it was first
/// discovered from, even if a cheaper way to it shows up later.
///
/// This usually visits very few Nodes, but the path it returns **is not the shortest one**
/// in general.
///
/// ## Returns
/// a [`SearchResult`] with an empty `path` if `end` cannot be reached, or
/// [`Error::InvalidEndpoint`] if `start` or `end` are not part of the graph.
pub fn greedy_best_first_search(
	graph: &WeightedGraph,
	start: NodeID,
	end: NodeID,
) -> Result<SearchResult, Error> {
	super::check_endpoints(graph, start, end)?;
	let heuristic = super::distance_to(graph, end);

	let mut visited = node_id_set();
	let mut prev = node_id_map();
	let mut visited_in_order = vec![];
	let mut next = PriorityQueue::new();

	visited.insert(start);
	prev.insert(start, None);
	next.enqueue(start, heuristic(start));

	let mut found = false;
	while let Some((current_id, _)) = next.dequeue() {
		visited_in_order.push(current_id);
		if current_id == end {
			found = true;
			break;
		}

		for edge in graph.neighbors(current_id) {
			if visited.insert(edge.target) {
				prev.insert(edge.target, Some(current_id));
				next.enqueue(edge.target, heuristic(edge.target));
			}
		}
	}

	let path = if found {
		reconstruct_path(&prev, start, end)
	} else {
		vec![]
	};

	log::debug!(
		"greedy best-first {} -> {}: visited {} Nodes, path of {} Nodes",
		start,
		end,
		visited_in_order.len(),
		path.len()
	);

	Ok(SearchResult::new(path, visited_in_order, prev))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Edge, Node};

	#[test]
	fn follows_the_heuristic() {
		//      1 ------- 2
		//     /           \
		//    0 --- 3 ----- 4 (goal)
		// 3 lies closer to the goal, but its Edge to the goal is very expensive
		let graph = WeightedGraph::build(
			[
				Node::new(0, 0.0, 0.000),
				Node::new(1, 0.001, 0.001),
				Node::new(2, 0.001, 0.003),
				Node::new(3, 0.0, 0.002),
				Node::new(4, 0.0, 0.004),
			],
			[
				Edge::new(0, 1, 160.0),
				Edge::new(1, 2, 230.0),
				Edge::new(2, 4, 160.0),
				Edge::new(0, 3, 230.0),
				Edge::new(3, 4, 5000.0),
			],
		)
		.unwrap();

		let greedy = greedy_best_first_search(&graph, 0, 4).unwrap();
		assert_eq!(greedy.path, vec![0, 3, 4]);
		assert_eq!(greedy.visited_in_order, vec![0, 3, 4]);

		let dijkstra = crate::search::dijkstra_search(&graph, 0, 4).unwrap();
		assert_eq!(dijkstra.path, vec![0, 1, 2, 4]);
		assert!(greedy.cost(&graph) > dijkstra.cost(&graph));
	}

	#[test]
	fn first_discovery_wins() {
		// 2 is discovered from 0 first and keeps 0 as its predecessor
		let graph = WeightedGraph::build(
			[
				Node::new(0, 0.0, 0.0),
				Node::new(1, 0.0, 0.0),
				Node::new(2, 0.0, 0.0),
			],
			[Edge::new(0, 2, 100.0), Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)],
		)
		.unwrap();

		let result = greedy_best_first_search(&graph, 0, 2).unwrap();
		assert_eq!(result.prev[&2], Some(0));
		assert_eq!(result.path, vec![0, 2]);
	}
}
