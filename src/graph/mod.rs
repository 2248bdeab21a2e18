//! The road network the searches run on.

mod node;
pub use node::{Edge, Node};

mod build_config;
pub use build_config::BuildConfig;

mod weighted_graph;
pub use weighted_graph::WeightedGraph;

mod loading;
pub use loading::GraphData;
