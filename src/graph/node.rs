use crate::NodeID;
use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

/// A point in the road network.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	/// unique identifier of the Node
	pub id: NodeID,
	/// latitude in degrees
	pub lat: f64,
	/// longitude in degrees
	pub lon: f64,
}

impl Node {
	/// creates a new Node at the given coordinates
	pub fn new(id: NodeID, lat: f64, lon: f64) -> Node {
		Node { id, lat, lon }
	}

	/// the position of the Node as a geo Point (`x` = longitude, `y` = latitude)
	pub fn point(&self) -> Point<f64> {
		Point::new(self.lon, self.lat)
	}

	/// The great-circle distance to `other` in metres.
	///
	/// This never overestimates the length of a road between the two Nodes, which makes it
	/// an admissible Heuristic for [`a_star_search`](crate::search::a_star_search).
	/// ## Examples
	/// ```
	/// # use road_search::Node;
	/// let a = Node::new(0, 0.0, 0.0);
	/// let b = Node::new(1, 0.0, 1.0);
	///
	/// let dist = a.distance_to(&b);
	/// assert!((dist - 111_195.0).abs() < 100.0);
	/// assert_eq!(a.distance_to(&a), 0.0);
	/// ```
	pub fn distance_to(&self, other: &Node) -> f64 {
		Haversine.distance(self.point(), other.point())
	}
}

/// A directed entry in the adjacency list of a [`WeightedGraph`](crate::WeightedGraph).
///
/// Every Edge of the input is stored twice: once as given and once mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
	/// the Node this Edge starts at
	pub source: NodeID,
	/// the Node this Edge leads to
	pub target: NodeID,
	/// the non-negative cost of traversing the Edge
	pub weight: f64,
}

impl Edge {
	/// creates a new Edge
	pub fn new(source: NodeID, target: NodeID, weight: f64) -> Edge {
		Edge {
			source,
			target,
			weight,
		}
	}

	/// the same Edge walked in the other direction
	pub fn mirrored(&self) -> Edge {
		Edge::new(self.target, self.source, self.weight)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn distance_is_symmetric() {
		let a = Node::new(0, 22.5726, 88.3639);
		let b = Node::new(1, 22.5958, 88.2636);
		let ab = a.distance_to(&b);
		assert!(ab > 10_000.0 && ab < 11_000.0, "{}", ab);
		assert_eq!(ab, b.distance_to(&a));
	}

	#[test]
	fn mirrored_edge() {
		let edge = Edge::new(3, 4, 2.5);
		assert_eq!(edge.mirrored(), Edge::new(4, 3, 2.5));
		assert_eq!(edge.mirrored().mirrored(), edge);
	}
}
