/// Options for building a [`WeightedGraph`](crate::WeightedGraph)
///
/// Default options:
/// ```
/// # use road_search::BuildConfig;
/// assert_eq!(
/// 	BuildConfig {
/// 		skip_unknown_edges: false,
/// 		allow_self_loops: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildConfig {
	/// `false` (default): an Edge referencing an unknown Node fails the whole build with
	/// [`Error::MalformedInput`](crate::Error::MalformedInput).
	///
	/// `true`: such Edges are dropped and a warning is logged.
	///
	/// Extracted road networks are sometimes cut at a boundary, leaving dangling Edges.
	pub skip_unknown_edges: bool,
	/// `true` (default): Edges from a Node to itself are stored like any other Edge.
	///
	/// `false`: they are dropped and a warning is logged.
	///
	/// Self-loops never change the result of a search, they only cost time.
	pub allow_self_loops: bool,
}

impl BuildConfig {
	/// reject any questionable input
	///
	/// Values:
	/// ```
	/// # use road_search::BuildConfig;
	/// assert_eq!(
	/// 	BuildConfig {
	/// 		skip_unknown_edges: false,
	/// 		allow_self_loops: true,
	/// 	},
	/// 	BuildConfig::STRICT
	/// );
	/// ```
	pub const STRICT: BuildConfig = BuildConfig {
		skip_unknown_edges: false,
		allow_self_loops: true,
	};
	/// drop whatever cannot be used and keep going
	///
	/// Values:
	/// ```
	/// # use road_search::BuildConfig;
	/// assert_eq!(
	/// 	BuildConfig {
	/// 		skip_unknown_edges: true,
	/// 		allow_self_loops: false,
	/// 	},
	/// 	BuildConfig::TOLERANT
	/// );
	/// ```
	pub const TOLERANT: BuildConfig = BuildConfig {
		skip_unknown_edges: true,
		allow_self_loops: false,
	};
}

impl Default for BuildConfig {
	fn default() -> BuildConfig {
		BuildConfig::STRICT
	}
}
