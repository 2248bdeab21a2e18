use super::{reconstruct_path, SearchResult};
use crate::{node_id::*, Error, NodeID, WeightedGraph};

/// Searches the graph using [Depth-First Search](https://en.wikipedia.org/wiki/Depth-first_search).
///
/// Neighbors are pushed onto a stack in the order of the adjacency list, so the Neighbor
/// added last is explored first. Edge weights are ignored.
///
/// The returned path is just *some* path from `start` to `end`. It is often very long, and its
/// shape depends on the order in which the Edges were supplied when building the graph. For a
/// given graph the result is always the same.
///
/// ## Returns
/// a [`SearchResult`] with an empty `path` if `end` cannot be reached, or
/// [`Error::InvalidEndpoint`] if `start` or `end` are not part of the graph.
pub fn depth_first_search(
	graph: &WeightedGraph,
	start: NodeID,
	end: NodeID,
) -> Result<SearchResult, Error> {
	super::check_endpoints(graph, start, end)?;

	let mut visited = node_id_set();
	let mut prev = node_id_map();
	let mut visited_in_order = vec![];
	let mut next = vec![start];

	visited.insert(start);
	prev.insert(start, None);

	let mut found = false;
	while let Some(current_id) = next.pop() {
		visited_in_order.push(current_id);
		if current_id == end {
			found = true;
			break;
		}

		for edge in graph.neighbors(current_id) {
			if visited.insert(edge.target) {
				prev.insert(edge.target, Some(current_id));
				next.push(edge.target);
			}
		}
	}

	let path = if found {
		reconstruct_path(&prev, start, end)
	} else {
		vec![]
	};

	log::debug!(
		"dfs {} -> {}: visited {} Nodes, path of {} Nodes",
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
	fn last_neighbor_first() {
		// 0 - 1 - 2
		//  \
		//   3 - 4
		let graph = WeightedGraph::build(
			(0..5).map(|id| Node::new(id, 0.0, 0.0)),
			[
				Edge::new(0, 1, 1.0),
				Edge::new(1, 2, 1.0),
				Edge::new(0, 3, 1.0),
				Edge::new(3, 4, 1.0),
			],
		)
		.unwrap();

		let result = depth_first_search(&graph, 0, 2).unwrap();
		assert_eq!(result.visited_in_order, vec![0, 3, 4, 1, 2]);
		assert_eq!(result.path, vec![0, 1, 2]);
	}

	#[test]
	fn depends_on_edge_order() {
		// a square 0-1-2-3: which way around 2 is reached depends on the order of the Edges
		let nodes = || (0..4).map(|id| Node::new(id, 0.0, 0.0));

		let forward = WeightedGraph::build(
			nodes(),
			[
				Edge::new(0, 1, 1.0),
				Edge::new(1, 2, 1.0),
				Edge::new(2, 3, 1.0),
				Edge::new(0, 3, 1.0),
			],
		)
		.unwrap();
		assert_eq!(depth_first_search(&forward, 0, 2).unwrap().path, vec![0, 3, 2]);

		let backward = WeightedGraph::build(
			nodes(),
			[
				Edge::new(0, 3, 1.0),
				Edge::new(2, 3, 1.0),
				Edge::new(1, 2, 1.0),
				Edge::new(0, 1, 1.0),
			],
		)
		.unwrap();
		assert_eq!(depth_first_search(&backward, 0, 2).unwrap().path, vec![0, 1, 2]);

		// but the same graph always gives the same result
		assert_eq!(
			depth_first_search(&forward, 0, 2).unwrap(),
			depth_first_search(&forward, 0, 2).unwrap()
		);
	}
}
