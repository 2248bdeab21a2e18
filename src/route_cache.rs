use crate::{search::Algorithm, Error, NodeID, SearchResult, WeightedGraph};
use hashbrown::HashMap;

/// A cache of finished searches, keyed by Algorithm, start and end.
///
/// The cache does not hold on to the graph. It is the caller's responsibility to call
/// [`invalidate`](RouteCache::invalidate) whenever the searches should run against a
/// different graph, since the cache has no way of noticing that.
///
/// ## Examples
/// ```
/// # use road_search::{WeightedGraph, Node, Edge, RouteCache, search::Algorithm};
/// let graph = WeightedGraph::build(
/// 	(0..3).map(|id| Node::new(id, 0.0, 0.0)),
/// 	[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)],
/// )
/// .unwrap();
///
/// let mut cache = RouteCache::new();
/// let result = cache.get_or_search(&graph, Algorithm::Dijkstra, 0, 2).unwrap();
/// assert_eq!(result.path, vec![0, 1, 2]);
///
/// assert!(cache.get(Algorithm::Dijkstra, 0, 2).is_some());
/// assert!(cache.get(Algorithm::AStar, 0, 2).is_none());
///
/// cache.invalidate();
/// assert!(cache.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RouteCache {
	results: HashMap<(Algorithm, NodeID, NodeID), SearchResult>,
}

impl RouteCache {
	/// creates an empty cache
	pub fn new() -> RouteCache {
		RouteCache::default()
	}

	/// the cached result of `algorithm` from `start` to `end`, if there is one
	pub fn get(&self, algorithm: Algorithm, start: NodeID, end: NodeID) -> Option<&SearchResult> {
		self.results.get(&(algorithm, start, end))
	}

	/// Returns the cached result, or runs the search and caches its result.
	///
	/// Errors are returned as-is and not cached.
	pub fn get_or_search(
		&mut self,
		graph: &WeightedGraph,
		algorithm: Algorithm,
		start: NodeID,
		end: NodeID,
	) -> Result<SearchResult, Error> {
		let key = (algorithm, start, end);
		if let Some(result) = self.results.get(&key) {
			log::trace!("cache hit for {} {} -> {}", algorithm, start, end);
			return Ok(result.clone());
		}
		let result = algorithm.run(graph, start, end)?;
		self.results.insert(key, result.clone());
		Ok(result)
	}

	/// removes every cached result
	pub fn invalidate(&mut self) {
		self.results.clear();
	}

	/// removes the results of every Algorithm for the given start and end
	pub fn invalidate_endpoints(&mut self, start: NodeID, end: NodeID) {
		self.results
			.retain(|&(_, cached_start, cached_end), _| (cached_start, cached_end) != (start, end));
	}

	/// the number of cached results
	pub fn len(&self) -> usize {
		self.results.len()
	}

	/// `true` if nothing is cached
	pub fn is_empty(&self) -> bool {
		self.results.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Edge, Node};

	fn line() -> WeightedGraph {
		WeightedGraph::build(
			(0..4).map(|id| Node::new(id, 0.0, 0.0)),
			[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0)],
		)
		.unwrap()
	}

	#[test]
	fn caches_per_key() {
		let graph = line();
		let mut cache = RouteCache::new();
		for algorithm in Algorithm::ALL {
			cache.get_or_search(&graph, algorithm, 0, 3).unwrap();
		}
		cache.get_or_search(&graph, Algorithm::Dijkstra, 1, 3).unwrap();
		assert_eq!(cache.len(), 6);

		let cached = cache.get_or_search(&graph, Algorithm::Dijkstra, 0, 3).unwrap();
		assert_eq!(cache.len(), 6);
		assert_eq!(&cached, cache.get(Algorithm::Dijkstra, 0, 3).unwrap());

		cache.invalidate_endpoints(0, 3);
		assert_eq!(cache.len(), 1);
		assert!(cache.get(Algorithm::Dijkstra, 1, 3).is_some());
	}

	#[test]
	fn errors_are_not_cached() {
		let graph = line();
		let mut cache = RouteCache::new();
		assert!(cache
			.get_or_search(&graph, Algorithm::AStar, 0, 7)
			.is_err());
		assert!(cache.is_empty());
	}
}
