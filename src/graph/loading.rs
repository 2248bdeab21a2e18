//! Reading and writing the JSON form of a road network.
//!
//! The format is the one produced by the map extraction tooling:
//! ```json
//! {
//!     "nodes": { "0": { "id": 0, "lat": 22.57, "lon": 88.36 }, ... },
//!     "edges": [ { "source": 0, "target": 1, "weight": 41.7 }, ... ]
//! }
//! ```
//! Weights are road lengths in metres.

use super::{BuildConfig, Edge, Node, WeightedGraph};
use crate::{Error, NodeID};

use serde::{
	de::{self, MapAccess, Visitor},
	Deserialize, Deserializer, Serialize,
};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The serialized form of a [`WeightedGraph`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	/// all Nodes, keyed by their id
	///
	/// A key that appears twice in the JSON object is a deserialization error.
	#[serde(deserialize_with = "deserialize_unique_nodes")]
	pub nodes: BTreeMap<NodeID, Node>,
	/// the Edges in the order they should be added
	pub edges: Vec<Edge>,
}

impl GraphData {
	/// Turns the data into a graph.
	///
	/// Fails with [`Error::MalformedInput`] if a key of `nodes` differs from the id of its record.
	pub fn into_graph(self, config: BuildConfig) -> Result<WeightedGraph, Error> {
		if let Some((key, node)) = self.nodes.iter().find(|(key, node)| **key != node.id) {
			return Err(Error::MalformedInput(format!(
				"Node stored under key {} has id {}",
				key, node.id
			)));
		}
		WeightedGraph::build_with_config(self.nodes.into_values(), self.edges, config)
	}
}

fn deserialize_unique_nodes<'de, D>(deserializer: D) -> Result<BTreeMap<NodeID, Node>, D::Error>
where
	D: Deserializer<'de>,
{
	struct NodesVisitor;

	impl<'de> Visitor<'de> for NodesVisitor {
		type Value = BTreeMap<NodeID, Node>;

		fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
			fmt.write_str("a map of Nodes keyed by their id")
		}

		fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
			let mut nodes = BTreeMap::new();
			while let Some((key, node)) = access.next_entry::<NodeID, Node>()? {
				if nodes.insert(key, node).is_some() {
					return Err(de::Error::custom(format_args!("Node key {} appears twice", key)));
				}
			}
			Ok(nodes)
		}
	}

	deserializer.deserialize_map(NodesVisitor)
}

impl WeightedGraph {
	/// Parses a graph from a JSON string with the default [`BuildConfig`].
	///
	/// ## Examples
	/// ```
	/// # use road_search::WeightedGraph;
	/// let json = r#"{
	///     "nodes": {
	///         "0": { "id": 0, "lat": 22.5726, "lon": 88.3639 },
	///         "1": { "id": 1, "lat": 22.5730, "lon": 88.3642 }
	///     },
	///     "edges": [ { "source": 0, "target": 1, "weight": 53.2 } ]
	/// }"#;
	///
	/// let graph = WeightedGraph::from_json_str(json).unwrap();
	/// assert_eq!(graph.node_count(), 2);
	/// assert_eq!(graph.edge_weight(1, 0), 53.2);
	/// ```
	pub fn from_json_str(json: &str) -> Result<WeightedGraph, Error> {
		WeightedGraph::from_json_str_with_config(json, BuildConfig::default())
	}

	/// Parses a graph from a JSON string.
	pub fn from_json_str_with_config(
		json: &str,
		config: BuildConfig,
	) -> Result<WeightedGraph, Error> {
		let data: GraphData = serde_json::from_str(json)?;
		data.into_graph(config)
	}

	/// Reads a graph in JSON form with the default [`BuildConfig`].
	pub fn from_reader(reader: impl Read) -> Result<WeightedGraph, Error> {
		WeightedGraph::from_reader_with_config(reader, BuildConfig::default())
	}

	/// Reads a graph in JSON form.
	pub fn from_reader_with_config(
		reader: impl Read,
		config: BuildConfig,
	) -> Result<WeightedGraph, Error> {
		let data: GraphData = serde_json::from_reader(BufReader::new(reader))?;
		data.into_graph(config)
	}

	/// Loads a graph from a JSON file with the default [`BuildConfig`].
	pub fn from_path(path: impl AsRef<Path>) -> Result<WeightedGraph, Error> {
		WeightedGraph::from_path_with_config(path, BuildConfig::default())
	}

	/// Loads a graph from a JSON file.
	pub fn from_path_with_config(
		path: impl AsRef<Path>,
		config: BuildConfig,
	) -> Result<WeightedGraph, Error> {
		let path = path.as_ref();
		log::debug!("loading graph from {}", path.display());
		WeightedGraph::from_reader_with_config(File::open(path)?, config)
	}

	/// Exports the graph into its serialized form.
	///
	/// Only the original direction of every Edge is written, so building a graph from the
	/// result yields the same adjacency lists.
	pub fn to_graph_data(&self) -> GraphData {
		GraphData {
			nodes: self.nodes().map(|node| (node.id, *node)).collect(),
			edges: self.edges().to_vec(),
		}
	}
}
