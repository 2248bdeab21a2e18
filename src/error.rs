use crate::NodeID;
use thiserror::Error;

/// Errors produced while building a [`WeightedGraph`](crate::WeightedGraph) or starting a search.
///
/// Note that an unreachable goal is **not** an Error: searches return a
/// [`SearchResult`](crate::SearchResult) with an empty `path` in that case.
#[derive(Error, Debug)]
pub enum Error {
	/// The graph data references unknown Nodes, contains duplicates or invalid weights.
	#[error("Malformed graph input: {0}")]
	MalformedInput(String),
	/// The start or end of a search is not a Node of the graph.
	#[error("Node {0} is not part of the graph")]
	InvalidEndpoint(NodeID),
	/// The name does not match any known search algorithm.
	#[error("Unknown search algorithm: {0}")]
	UnknownAlgorithm(String),
	/// Reading the graph file failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
	/// The graph file is not valid JSON or lacks required fields.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}
