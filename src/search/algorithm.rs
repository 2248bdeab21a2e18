use super::*;
use std::fmt;
use std::str::FromStr;

/// The available search algorithms, for callers that pick one at runtime.
///
/// ## Examples
/// ```
/// # use road_search::{WeightedGraph, Node, Edge, search::Algorithm};
/// let graph = WeightedGraph::build(
/// 	(0..3).map(|id| Node::new(id, 0.0, 0.0)),
/// 	[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)],
/// )
/// .unwrap();
///
/// let algorithm: Algorithm = "bfs".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::BreadthFirst);
///
/// let result = algorithm.run(&graph, 0, 2).unwrap();
/// assert_eq!(result.path, vec![0, 1, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
	/// [`dijkstra_search`]
	Dijkstra,
	/// [`a_star_search`]
	AStar,
	/// [`greedy_best_first_search`]
	GreedyBestFirst,
	/// [`breadth_first_search`]
	BreadthFirst,
	/// [`depth_first_search`]
	DepthFirst,
}

impl Algorithm {
	/// all Algorithms
	pub const ALL: [Algorithm; 5] = [
		Algorithm::Dijkstra,
		Algorithm::AStar,
		Algorithm::GreedyBestFirst,
		Algorithm::BreadthFirst,
		Algorithm::DepthFirst,
	];

	/// a short, lowercase name that [`FromStr`] accepts
	pub fn name(self) -> &'static str {
		match self {
			Algorithm::Dijkstra => "dijkstra",
			Algorithm::AStar => "astar",
			Algorithm::GreedyBestFirst => "gbfs",
			Algorithm::BreadthFirst => "bfs",
			Algorithm::DepthFirst => "dfs",
		}
	}

	/// `true` if the Algorithm always finds the path with the lowest total weight
	pub fn is_cost_optimal(self) -> bool {
		matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
	}

	/// runs the Algorithm on `graph`
	pub fn run(
		self,
		graph: &WeightedGraph,
		start: NodeID,
		end: NodeID,
	) -> Result<SearchResult, Error> {
		match self {
			Algorithm::Dijkstra => dijkstra_search(graph, start, end),
			Algorithm::AStar => a_star_search(graph, start, end),
			Algorithm::GreedyBestFirst => greedy_best_first_search(graph, start, end),
			Algorithm::BreadthFirst => breadth_first_search(graph, start, end),
			Algorithm::DepthFirst => depth_first_search(graph, start, end),
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "{}", self.name())
	}
}

impl FromStr for Algorithm {
	type Err = Error;
	fn from_str(s: &str) -> Result<Algorithm, Error> {
		match s.to_ascii_lowercase().as_str() {
			"dijkstra" => Ok(Algorithm::Dijkstra),
			"astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
			"gbfs" | "greedy" => Ok(Algorithm::GreedyBestFirst),
			"bfs" => Ok(Algorithm::BreadthFirst),
			"dfs" => Ok(Algorithm::DepthFirst),
			_ => Err(Error::UnknownAlgorithm(s.to_string())),
		}
	}
}

/// Runs every [`Algorithm`] on the same start and end.
///
/// The results are returned in the order of [`Algorithm::ALL`]. With the `parallel` feature
/// (enabled by default) the searches run on the rayon thread pool.
pub fn search_all(
	graph: &WeightedGraph,
	start: NodeID,
	end: NodeID,
) -> Vec<(Algorithm, Result<SearchResult, Error>)> {
	#[cfg(feature = "parallel")]
	{
		use rayon::prelude::*;
		Algorithm::ALL
			.par_iter()
			.map(|&algorithm| (algorithm, algorithm.run(graph, start, end)))
			.collect()
	}
	#[cfg(not(feature = "parallel"))]
	{
		Algorithm::ALL
			.iter()
			.map(|&algorithm| (algorithm, algorithm.run(graph, start, end)))
			.collect()
	}
}
