//! The search algorithms.
//!
//! Every algorithm takes the graph, a start and an end Node and returns a [`SearchResult`].
//! The graph is only ever borrowed immutably, so any number of searches may run against the
//! same graph at once, even on different threads.
//!
//! | Algorithm                    | Optimal path        | Uses weights | Uses coordinates |
//! |------------------------------|---------------------|--------------|------------------|
//! | [`dijkstra_search`]          | lowest weight       | yes          | no               |
//! | [`a_star_search`]            | lowest weight       | yes          | yes              |
//! | [`greedy_best_first_search`] | no                  | no           | yes              |
//! | [`breadth_first_search`]     | fewest Edges        | no           | no               |
//! | [`depth_first_search`]       | no                  | no           | no               |

mod result;
pub use self::result::SearchResult;
use self::result::reconstruct_path;

mod dijkstra;
pub use self::dijkstra::dijkstra_search;

mod a_star;
pub use self::a_star::a_star_search;

mod greedy;
pub use self::greedy::greedy_best_first_search;

mod bfs;
pub use self::bfs::breadth_first_search;

mod dfs;
pub use self::dfs::depth_first_search;

mod algorithm;
pub use self::algorithm::{search_all, Algorithm};

use crate::{Error, NodeID, WeightedGraph};

fn check_endpoints(graph: &WeightedGraph, start: NodeID, end: NodeID) -> Result<(), Error> {
	for id in [start, end] {
		if !graph.contains(id) {
			return Err(Error::InvalidEndpoint(id));
		}
	}
	Ok(())
}

/// the straight-line Heuristic towards `end`
fn distance_to(graph: &WeightedGraph, end: NodeID) -> impl Fn(NodeID) -> f64 + '_ {
	let goal = graph.node(end).copied();
	move |id| match (graph.node(id), &goal) {
		(Some(node), Some(goal)) => node.distance_to(goal),
		_ => 0.0,
	}
}
