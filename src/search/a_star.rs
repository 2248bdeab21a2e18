use super::{reconstruct_path, SearchResult};
use crate::{node_id::*, Error, NodeID, PriorityQueue, WeightedGraph};

/// Searches the graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Nodes are visited in order of `g + h`, where `g` is the weight of the best known path from
/// `start` and `h` is the great-circle distance to `end` in metres. As long as no Edge is
/// shorter than the straight line between its Nodes (which holds for road lengths in metres),
/// `h` never overestimates, and the returned path costs exactly as much as the one from
/// [`dijkstra_search`](super::dijkstra_search), usually after visiting far fewer Nodes.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use road_search::{WeightedGraph, Node, Edge, search::{a_star_search, dijkstra_search}};
/// // three Nodes roughly 110m apart along the equator, with a detour over 3
/// let graph = WeightedGraph::build(
/// 	[
/// 		Node::new(0, 0.0, 0.000),
/// 		Node::new(1, 0.0, 0.001),
/// 		Node::new(2, 0.0, 0.002),
/// 		Node::new(3, 0.001, 0.001),
/// 	],
/// 	[
/// 		Edge::new(0, 1, 120.0),
/// 		Edge::new(1, 2, 120.0),
/// 		Edge::new(0, 3, 160.0),
/// 		Edge::new(3, 2, 160.0),
/// 	],
/// )
/// .unwrap();
///
/// let result = a_star_search(&graph, 0, 2).unwrap();
///
/// assert_eq!(result.path, vec![0, 1, 2]);
/// assert_eq!(result.cost(&graph), dijkstra_search(&graph, 0, 2).unwrap().cost(&graph));
/// ```
///
/// ## Returns
/// a [`SearchResult`] with an empty `path` if `end` cannot be reached, or
/// [`Error::InvalidEndpoint`] if `start` or `end` are not part of the graph.
pub fn a_star_search(
	graph: &WeightedGraph,
	start: NodeID,
	end: NodeID,
) -> Result<SearchResult, Error> {
	super::check_endpoints(graph, start, end)?;
	let heuristic = super::distance_to(graph, end);

	let mut distance = node_id_map();
	let mut prev = node_id_map();
	let mut settled = node_id_set();
	let mut visited_in_order = vec![];
	let mut next = PriorityQueue::new();

	distance.insert(start, 0.0);
	prev.insert(start, None);
	next.enqueue(start, heuristic(start));

	let mut found = false;
	while let Some((current_id, _)) = next.dequeue() {
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
			// rounding in the heuristic may break consistency by a few ulps
			if settled.contains(&other_id) {
				continue;
			}
			let other_cost = current_cost + edge.weight;
			let improves = distance
				.get(&other_id)
				.map_or(true, |&known_cost| other_cost < known_cost);

			if improves {
				distance.insert(other_id, other_cost);
				prev.insert(other_id, Some(current_id));
				next.enqueue(other_id, other_cost + heuristic(other_id));
			}
		}
	}

	let path = if found {
		reconstruct_path(&prev, start, end)
	} else {
		vec![]
	};

	log::debug!(
		"a* {} -> {}: visited {} Nodes, path of {} Nodes",
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

	/// a 5x5 grid of Nodes ~111m apart, every Edge 10% longer than the straight line
	fn grid() -> WeightedGraph {
		let size = 5;
		let spacing = 0.001;
		let nodes: Vec<Node> = (0..size * size)
			.map(|id| {
				let (x, y) = (id % size, id / size);
				Node::new(id, y as f64 * spacing, x as f64 * spacing)
			})
			.collect();
		let mut edges = vec![];
		for id in 0..size * size {
			let (x, y) = (id % size, id / size);
			if x + 1 < size {
				edges.push((id, id + 1));
			}
			if y + 1 < size {
				edges.push((id, id + size));
			}
		}
		let edges: Vec<Edge> = edges
			.into_iter()
			.map(|(a, b)| {
				let dist = nodes[a as usize].distance_to(&nodes[b as usize]);
				Edge::new(a, b, dist * 1.1)
			})
			.collect();
		WeightedGraph::build(nodes, edges).unwrap()
	}

	#[test]
	fn same_cost_as_dijkstra() {
		let graph = grid();
		let a_star = a_star_search(&graph, 0, 24).unwrap();
		let dijkstra = crate::search::dijkstra_search(&graph, 0, 24).unwrap();

		assert_eq!(a_star.hops(), 8);
		assert!((a_star.cost(&graph) - dijkstra.cost(&graph)).abs() < 1e-6);
	}

	#[test]
	fn visits_fewer_nodes() {
		let graph = grid();
		// straight line along the bottom row
		let a_star = a_star_search(&graph, 0, 4).unwrap();
		let dijkstra = crate::search::dijkstra_search(&graph, 0, 4).unwrap();

		assert_eq!(a_star.path, vec![0, 1, 2, 3, 4]);
		assert_eq!(a_star.visited_in_order, vec![0, 1, 2, 3, 4]);
		assert!(a_star.visited_in_order.len() < dijkstra.visited_in_order.len());
	}

	#[test]
	fn overflowing_weights() {
		let graph = WeightedGraph::build(
			(0..3).map(|id| Node::new(id, 0.0, 0.0)),
			[Edge::new(0, 1, f64::MAX), Edge::new(1, 2, f64::MAX)],
		)
		.unwrap();

		let result = a_star_search(&graph, 0, 2).unwrap();
		assert_eq!(result.path, vec![0, 1, 2]);
		assert_eq!(result.visited_in_order, vec![0, 1, 2]);
	}
}
