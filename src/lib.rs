#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to compare classic Search Algorithms on a weighted Road Network.
//!
//! ## Introduction
//! The Graph is an undirected road network: every Node has coordinates, and every Edge has a
//! weight, usually the length of the road in metres. On this Graph, five different
//! Algorithms can search for a Path between two Nodes:
//!
//! - [Dijkstra](search::dijkstra_search) and [A*](search::a_star_search) find the Path with
//!   the lowest total weight. A* uses the straight-line distance to the Goal to visit fewer Nodes.
//! - [Greedy Best-First Search](search::greedy_best_first_search) heads straight for the Goal
//!   and usually visits the fewest Nodes, but its Paths can be far from optimal.
//! - [Breadth-First Search](search::breadth_first_search) finds the Path with the fewest Edges.
//! - [Depth-First Search](search::depth_first_search) finds *some* Path.
//!
//! Every search returns a [`SearchResult`] with the Path as well as the order in which Nodes
//! were visited and the predecessor of every touched Node, which is enough to replay the
//! exploration step by step.
//!
//! ## Examples
//! Creating the Graph:
//! ```
//! use road_search::{WeightedGraph, Node, Edge};
//!
//! // A--1--B
//! // |     |
//! // 5     1
//! // |     |
//! // D--1--C
//! let graph = WeightedGraph::build(
//!     [
//!         Node::new(0, 0.0, 0.0), // A
//!         Node::new(1, 0.0, 1.0), // B
//!         Node::new(2, 1.0, 1.0), // C
//!         Node::new(3, 1.0, 0.0), // D
//!     ],
//!     [
//!         Edge::new(0, 1, 1.0),
//!         Edge::new(1, 2, 1.0),
//!         Edge::new(2, 3, 1.0),
//!         Edge::new(0, 3, 5.0),
//!     ],
//! )
//! .unwrap();
//!
//! // Edges work in both directions
//! assert_eq!(graph.edge_weight(3, 0), 5.0);
//! ```
//! Graphs are usually loaded from the JSON form produced by the map extraction tooling, see
//! [`WeightedGraph::from_path`].
//!
//! ### Searching
//! ```
//! # use road_search::{WeightedGraph, Node, Edge};
//! use road_search::search::{breadth_first_search, dijkstra_search};
//! #
//! # let graph = WeightedGraph::build(
//! #     [
//! #         Node::new(0, 0.0, 0.0), // A
//! #         Node::new(1, 0.0, 1.0), // B
//! #         Node::new(2, 1.0, 1.0), // C
//! #         Node::new(3, 1.0, 0.0), // D
//! #     ],
//! #     [
//! #         Edge::new(0, 1, 1.0),
//! #         Edge::new(1, 2, 1.0),
//! #         Edge::new(2, 3, 1.0),
//! #         Edge::new(0, 3, 5.0),
//! #     ],
//! # )
//! # .unwrap();
//!
//! // the cheapest Path goes around
//! let result = dijkstra_search(&graph, 0, 3).unwrap();
//! assert_eq!(result.path, vec![0, 1, 2, 3]);
//! assert_eq!(result.cost(&graph), 3.0);
//!
//! // the Path with the fewest Edges goes straight
//! let result = breadth_first_search(&graph, 0, 3).unwrap();
//! assert_eq!(result.path, vec![0, 3]);
//! ```
//! An unreachable Goal is not an error. The `path` is simply empty:
//! ```
//! # use road_search::{WeightedGraph, Node, Edge};
//! # use road_search::search::dijkstra_search;
//! let graph = WeightedGraph::build(
//!     [Node::new(0, 0.0, 0.0), Node::new(1, 0.0, 1.0), Node::new(4, 2.0, 2.0)],
//!     [Edge::new(0, 1, 1.0)],
//! )
//! .unwrap();
//!
//! let result = dijkstra_search(&graph, 0, 4).unwrap();
//! assert!(result.path.is_empty());
//! assert!(!result.visited_in_order.contains(&4));
//!
//! // but a Node that does not exist is
//! assert!(dijkstra_search(&graph, 0, 7).is_err());
//! ```
//!
//! ### Comparing Algorithms
//! [`search_all`](search::search_all) runs every Algorithm on the same start and end, and a
//! [`RouteCache`] keeps results around until they are explicitly invalidated.
//!
//! ### Logging
//! The crate reports through the [`log`](https://docs.rs/log) facade: a summary of every
//! search on `debug`, individual relaxations on `trace` and questionable input on `warn`.
//! No logger is installed by the crate itself.

/// The Type used to reference a Node in the Graph
pub type NodeID = u32;

pub mod node_id;

mod error;
pub use self::error::Error;

mod graph;
pub use self::graph::{BuildConfig, Edge, GraphData, Node, WeightedGraph};

mod priority_queue;
pub use self::priority_queue::PriorityQueue;

pub mod search;
pub use self::search::{Algorithm, SearchResult};

mod route_cache;
pub use self::route_cache::RouteCache;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		search::{
			a_star_search, breadth_first_search, depth_first_search, dijkstra_search,
			greedy_best_first_search, search_all,
		},
		Algorithm, BuildConfig, Edge, Error, Node, NodeID, RouteCache, SearchResult,
		WeightedGraph,
	};
}
