use super::{BuildConfig, Edge, Node};
use crate::{node_id::*, Error, NodeID};

/// An undirected, weighted road network.
///
/// Built once from a set of [`Node`]s and a list of [`Edge`]s and never changed afterwards.
/// Every input Edge `a -> b` is stored in the adjacency list of `a` and mirrored into the
/// adjacency list of `b`, so the adjacency is always symmetric. The order of each adjacency
/// list is the order in which the Edges were supplied, which is what decides ties in
/// [`depth_first_search`](crate::search::depth_first_search) and
/// [`greedy_best_first_search`](crate::search::greedy_best_first_search).
///
/// ## Examples
/// ```
/// # use road_search::{WeightedGraph, Node, Edge};
/// let graph = WeightedGraph::build(
/// 	[Node::new(0, 0.0, 0.0), Node::new(1, 0.0, 0.001)],
/// 	[Edge::new(0, 1, 120.0)],
/// )
/// .unwrap();
///
/// assert_eq!(graph.neighbors(0), &[Edge::new(0, 1, 120.0)]);
/// assert_eq!(graph.neighbors(1), &[Edge::new(1, 0, 120.0)]);
/// assert_eq!(graph.edge_weight(1, 0), 120.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
	nodes: NodeIDMap<Node>,
	adjacency: NodeIDMap<Vec<Edge>>,
	edges: Vec<Edge>,
}

impl WeightedGraph {
	/// Builds a graph with the default [`BuildConfig`].
	///
	/// Fails with [`Error::MalformedInput`] if a Node id appears twice, if an Edge references
	/// an unknown Node or if a weight is negative or not finite.
	pub fn build(
		nodes: impl IntoIterator<Item = Node>,
		edges: impl IntoIterator<Item = Edge>,
	) -> Result<WeightedGraph, Error> {
		WeightedGraph::build_with_config(nodes, edges, BuildConfig::default())
	}

	/// Builds a graph, see [`BuildConfig`] for the available options.
	pub fn build_with_config(
		nodes: impl IntoIterator<Item = Node>,
		edges: impl IntoIterator<Item = Edge>,
		config: BuildConfig,
	) -> Result<WeightedGraph, Error> {
		let nodes = nodes.into_iter();
		let mut node_map = node_id_map_with_cap(nodes.size_hint().0);
		let mut adjacency = node_id_map_with_cap(nodes.size_hint().0);

		for node in nodes {
			if !node.lat.is_finite() || !node.lon.is_finite() {
				return Err(Error::MalformedInput(format!(
					"Node {} has invalid coordinates ({}, {})",
					node.id, node.lat, node.lon
				)));
			}
			if node_map.insert(node.id, node).is_some() {
				return Err(Error::MalformedInput(format!(
					"Node {} appears more than once",
					node.id
				)));
			}
			adjacency.insert(node.id, Vec::new());
		}

		let mut accepted = Vec::new();
		let mut skipped = 0;
		for edge in edges {
			if !edge.weight.is_finite() || edge.weight < 0.0 {
				return Err(Error::MalformedInput(format!(
					"Edge {} -> {} has invalid weight {}",
					edge.source, edge.target, edge.weight
				)));
			}
			if let Some(missing) = [edge.source, edge.target]
				.into_iter()
				.find(|id| !node_map.contains_key(id))
			{
				if config.skip_unknown_edges {
					log::warn!(
						"skipping Edge {} -> {}: unknown Node {}",
						edge.source,
						edge.target,
						missing
					);
					skipped += 1;
					continue;
				}
				return Err(Error::MalformedInput(format!(
					"Edge {} -> {} references unknown Node {}",
					edge.source, edge.target, missing
				)));
			}
			if edge.source == edge.target && !config.allow_self_loops {
				log::warn!("skipping self-loop on Node {}", edge.source);
				skipped += 1;
				continue;
			}

			adjacency.entry(edge.source).or_default().push(edge);
			adjacency
				.entry(edge.target)
				.or_default()
				.push(edge.mirrored());
			accepted.push(edge);
		}

		log::debug!(
			"built graph with {} Nodes and {} Edges ({} skipped)",
			node_map.len(),
			accepted.len(),
			skipped
		);

		Ok(WeightedGraph {
			nodes: node_map,
			adjacency,
			edges: accepted,
		})
	}

	/// the Node with the given id, if it exists
	pub fn node(&self, id: NodeID) -> Option<&Node> {
		self.nodes.get(&id)
	}

	/// `true` if the graph has a Node with the given id
	pub fn contains(&self, id: NodeID) -> bool {
		self.nodes.contains_key(&id)
	}

	/// An Iterator over all Nodes in no particular order.
	///
	/// The graph has no spatial index. Callers looking for the Node closest to some
	/// coordinates are expected to scan this.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
		self.nodes.values()
	}

	/// the number of Nodes
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// the number of (undirected) Edges that were accepted when building the graph
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// the accepted input Edges in their original direction and order
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// The outgoing Edges of a Node in the order they were added.
	///
	/// Unknown Nodes have no Edges.
	pub fn neighbors(&self, id: NodeID) -> &[Edge] {
		self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// The weight of the Edge `a -> b`.
	///
	/// If there is no such Edge, the great-circle distance between `a` and `b` is returned
	/// instead and a warning is logged. This keeps cost reports working, but it also hides
	/// missing Edges, so a path that was not produced by one of the searches may be priced
	/// lower than it could ever be driven. Returns `f64::INFINITY` if either Node is unknown.
	///
	/// None of the search algorithms use this; they only ever look at stored Edges.
	pub fn edge_weight(&self, a: NodeID, b: NodeID) -> f64 {
		if let Some(edge) = self.neighbors(a).iter().find(|edge| edge.target == b) {
			return edge.weight;
		}
		match (self.node(a), self.node(b)) {
			(Some(node_a), Some(node_b)) => {
				log::warn!(
					"no Edge {} -> {}, falling back to great-circle distance",
					a,
					b
				);
				node_a.distance_to(node_b)
			}
			_ => f64::INFINITY,
		}
	}

	/// The total weight of walking along `path`, summing [`edge_weight`](Self::edge_weight)
	/// for every consecutive pair of Nodes.
	///
	/// ## Examples
	/// ```
	/// # use road_search::{WeightedGraph, Node, Edge};
	/// let graph = WeightedGraph::build(
	/// 	[Node::new(0, 0.0, 0.0), Node::new(1, 0.0, 0.001), Node::new(2, 0.0, 0.002)],
	/// 	[Edge::new(0, 1, 120.0), Edge::new(1, 2, 130.0)],
	/// )
	/// .unwrap();
	///
	/// assert_eq!(graph.path_cost(&[0, 1, 2]), 250.0);
	/// assert_eq!(graph.path_cost(&[2]), 0.0);
	/// ```
	pub fn path_cost(&self, path: &[NodeID]) -> f64 {
		path.windows(2)
			.map(|pair| self.edge_weight(pair[0], pair[1]))
			.sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> WeightedGraph {
		WeightedGraph::build(
			[
				Node::new(0, 0.0, 0.0),
				Node::new(1, 0.0, 1.0),
				Node::new(2, 1.0, 1.0),
				Node::new(3, 1.0, 0.0),
			],
			[
				Edge::new(0, 1, 1.0),
				Edge::new(1, 2, 1.0),
				Edge::new(2, 3, 1.0),
				Edge::new(0, 3, 5.0),
			],
		)
		.unwrap()
	}

	#[test]
	fn adjacency_is_symmetric() {
		let graph = square();
		for node in graph.nodes() {
			for edge in graph.neighbors(node.id) {
				assert_eq!(edge.source, node.id);
				assert!(graph
					.neighbors(edge.target)
					.iter()
					.any(|other| other.target == node.id && other.weight == edge.weight));
			}
		}
		assert_eq!(graph.node_count(), 4);
		assert_eq!(graph.edge_count(), 4);
	}

	#[test]
	fn adjacency_keeps_insertion_order() {
		let graph = square();
		let targets: Vec<NodeID> = graph.neighbors(0).iter().map(|e| e.target).collect();
		assert_eq!(targets, vec![1, 3]);
		let targets: Vec<NodeID> = graph.neighbors(3).iter().map(|e| e.target).collect();
		assert_eq!(targets, vec![2, 0]);
	}

	#[test]
	fn lookups() {
		let graph = square();
		assert_eq!(graph.node(2), Some(&Node::new(2, 1.0, 1.0)));
		assert_eq!(graph.node(9), None);
		assert!(graph.contains(3));
		assert!(!graph.contains(4));
		assert!(graph.neighbors(9).is_empty());
	}

	#[test]
	fn edge_weight_fallback() {
		let graph = square();
		assert_eq!(graph.edge_weight(0, 3), 5.0);
		assert_eq!(graph.edge_weight(3, 0), 5.0);

		// no direct Edge between the diagonal corners
		let expected = graph.node(0).unwrap().distance_to(graph.node(2).unwrap());
		assert_eq!(graph.edge_weight(0, 2), expected);

		assert_eq!(graph.edge_weight(0, 9), f64::INFINITY);
		assert_eq!(graph.path_cost(&[0, 1, 2, 3]), 3.0);
		assert_eq!(graph.path_cost(&[]), 0.0);
	}

	#[test]
	fn unknown_node_is_rejected() {
		let result = WeightedGraph::build([Node::new(0, 0.0, 0.0)], [Edge::new(0, 1, 1.0)]);
		assert!(matches!(result, Err(Error::MalformedInput(_))));
	}

	#[test]
	fn unknown_node_is_skipped_when_tolerant() {
		let graph = WeightedGraph::build_with_config(
			[Node::new(0, 0.0, 0.0), Node::new(1, 0.0, 0.0)],
			[Edge::new(0, 1, 1.0), Edge::new(0, 7, 1.0), Edge::new(1, 1, 0.0)],
			BuildConfig::TOLERANT,
		)
		.unwrap();
		assert_eq!(graph.edge_count(), 1);
		assert_eq!(graph.neighbors(0).len(), 1);
		assert_eq!(graph.neighbors(1).len(), 1);
	}

	#[test]
	fn self_loops_are_kept_by_default() {
		let graph =
			WeightedGraph::build([Node::new(0, 0.0, 0.0)], [Edge::new(0, 0, 2.0)]).unwrap();
		assert_eq!(graph.neighbors(0), &[Edge::new(0, 0, 2.0), Edge::new(0, 0, 2.0)]);
	}

	#[test]
	fn invalid_input_is_rejected() {
		let nodes = [Node::new(0, 0.0, 0.0), Node::new(1, 0.0, 0.0)];

		let negative = WeightedGraph::build(nodes, [Edge::new(0, 1, -1.0)]);
		assert!(matches!(negative, Err(Error::MalformedInput(_))));

		let nan = WeightedGraph::build(nodes, [Edge::new(0, 1, f64::NAN)]);
		assert!(matches!(nan, Err(Error::MalformedInput(_))));

		let duplicate = WeightedGraph::build([Node::new(0, 0.0, 0.0), Node::new(0, 1.0, 1.0)], []);
		assert!(matches!(duplicate, Err(Error::MalformedInput(_))));

		let bad_coords = WeightedGraph::build([Node::new(0, f64::NAN, 0.0)], []);
		assert!(matches!(bad_coords, Err(Error::MalformedInput(_))));
	}
}
