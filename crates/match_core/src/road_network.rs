//! Road network: an undirected graph over locations weighted by Euclidean distance.
//!
//! Locations are interned into dense node ids on first use, keyed by their exact
//! coordinates ([`Location::key`]). Shortest distances are computed per query with
//! Dijkstra's algorithm; nothing is cached between calls.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use pathfinding::directed::dijkstra::dijkstra;

use crate::location::{Location, LocationKey};

type NodeId = usize;

/// Adjacency-list graph. Always constructed with empty, ready-to-use storage.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    nodes: Vec<Location>,
    ids: HashMap<LocationKey, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.ids.contains_key(&location.key())
    }

    /// Locations adjacent to `location`, in insertion order. Empty if unknown.
    pub fn neighbors(&self, location: &Location) -> Vec<Location> {
        self.node_id(location)
            .map(|id| self.adjacency[id].iter().map(|&n| self.nodes[n]).collect())
            .unwrap_or_default()
    }

    /// Connect `a` and `b` in both directions, inserting either as a node if absent.
    ///
    /// Repeated edges are ignored, in either orientation. A self-edge only
    /// registers the node. Returns `true` if a new edge was added.
    pub fn add_edge(&mut self, a: Location, b: Location) -> bool {
        let a_id = self.intern(a);
        let b_id = self.intern(b);
        if a_id == b_id || self.adjacency[a_id].contains(&b_id) {
            return false;
        }
        self.adjacency[a_id].push(b_id);
        self.adjacency[b_id].push(a_id);
        self.edge_count += 1;
        true
    }

    /// Length of the shortest road path from `src` to `dest`.
    ///
    /// `None` means unreachable: either endpoint is not a node, or no path
    /// connects them. `src == dest` is `Some(0.0)` when it is a node.
    pub fn shortest_distance(&self, src: &Location, dest: &Location) -> Option<f64> {
        self.search(src, dest).map(|(_, cost)| cost)
    }

    /// Shortest path from `src` to `dest` as a node sequence, with its length.
    pub fn shortest_path(&self, src: &Location, dest: &Location) -> Option<(Vec<Location>, f64)> {
        self.search(src, dest).map(|(path, cost)| {
            (path.into_iter().map(|id| self.nodes[id]).collect(), cost)
        })
    }

    fn search(&self, src: &Location, dest: &Location) -> Option<(Vec<NodeId>, f64)> {
        let start = self.node_id(src)?;
        let goal = self.node_id(dest)?;
        let (path, cost) = dijkstra(
            &start,
            |&node| {
                let here = self.nodes[node];
                self.adjacency[node]
                    .iter()
                    .map(move |&next| (next, OrderedFloat(here.distance(&self.nodes[next]))))
            },
            |&node| node == goal,
        )?;
        Some((path, cost.into_inner()))
    }

    fn node_id(&self, location: &Location) -> Option<NodeId> {
        self.ids.get(&location.key()).copied()
    }

    fn intern(&mut self, location: Location) -> NodeId {
        if let Some(&id) = self.ids.get(&location.key()) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(location);
        self.adjacency.push(Vec::new());
        self.ids.insert(location.key(), id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (RoadNetwork, Location, Location, Location) {
        // Three points on a line joined as A-B and B-C, each edge of length 1.
        let a = Location::new(0.0, 0.0);
        let b = Location::new(1.0, 0.0);
        let c = Location::new(2.0, 0.0);
        let mut network = RoadNetwork::new();
        network.add_edge(a, b);
        network.add_edge(b, c);
        (network, a, b, c)
    }

    #[test]
    fn empty_network_is_usable() {
        let network = RoadNetwork::new();
        let here = Location::new(1.0, 1.0);
        assert_eq!(network.node_count(), 0);
        assert_eq!(network.shortest_distance(&here, &here), None);
        assert!(network.neighbors(&here).is_empty());
    }

    #[test]
    fn edges_are_symmetric() {
        let (network, a, b, _) = triangle();
        assert_eq!(network.neighbors(&a), vec![b]);
        assert!(network.neighbors(&b).contains(&a));
        assert_eq!(network.shortest_distance(&a, &b), network.shortest_distance(&b, &a));
    }

    #[test]
    fn duplicate_and_reversed_edges_are_ignored() {
        let (mut network, a, b, _) = triangle();
        assert!(!network.add_edge(a, b));
        assert!(!network.add_edge(b, a));
        assert_eq!(network.edge_count(), 2);
        assert_eq!(network.neighbors(&a).len(), 1);
    }

    #[test]
    fn self_edge_registers_node_only() {
        let mut network = RoadNetwork::new();
        let p = Location::new(4.0, 4.0);
        assert!(!network.add_edge(p, p));
        assert!(network.contains(&p));
        assert_eq!(network.edge_count(), 0);
        assert_eq!(network.shortest_distance(&p, &p), Some(0.0));
    }

    #[test]
    fn source_equal_to_destination() {
        let (network, a, _, _) = triangle();
        assert_eq!(network.shortest_distance(&a, &a), Some(0.0));
        let outside = Location::new(9.0, 9.0);
        assert_eq!(network.shortest_distance(&outside, &outside), None);
    }

    #[test]
    fn path_follows_edges() {
        let (network, a, b, c) = triangle();
        let (path, cost) = network.shortest_path(&a, &c).expect("reachable");
        assert_eq!(path, vec![a, b, c]);
        assert!((cost - 2.0).abs() < 1e-12);
    }

    #[test]
    fn missing_endpoint_is_unreachable() {
        let (network, a, _, _) = triangle();
        let outside = Location::new(-5.0, 3.0);
        assert_eq!(network.shortest_distance(&a, &outside), None);
        assert_eq!(network.shortest_distance(&outside, &a), None);
    }
}
