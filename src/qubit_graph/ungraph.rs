use std::collections::{HashMap, HashSet, VecDeque};

pub type Coord = (i32, i32);
pub type Edge = (Coord, Coord);

/// Undirected graph over a fixed set of integer coordinate nodes.
///
/// The node set never changes after construction; only edge membership
/// does. Edges toggle with XOR semantics, so toggling twice is a no-op.
#[derive(Debug)]
pub struct UnGraph {
    adjacency: HashMap<Coord, HashSet<Coord>>,
}

impl UnGraph {
    pub fn new(nodes: &[Coord]) -> Self {
        let adjacency = nodes.iter().map(|&n| (n, HashSet::new())).collect();

        Self { adjacency }
    }

    /// XOR an edge in or out of the graph
    pub fn toggle_edge(&mut self, u: Coord, v: Coord) {
        if self.has_edge(u, v) {
            self.remove_edge(u, v);
        } else {
            self.add_edge(u, v);
        }
    }

    /// add edge between existing nodes
    pub fn add_edge(&mut self, u: Coord, v: Coord) {
        self.adjacency
            .get_mut(&u)
            .unwrap_or_else(|| panic!("node does not exist: {:?}", u))
            .insert(v);
        self.adjacency
            .get_mut(&v)
            .unwrap_or_else(|| panic!("node does not exist: {:?}", v))
            .insert(u);
    }

    /// remove edge between existing nodes
    pub fn remove_edge(&mut self, u: Coord, v: Coord) {
        self.adjacency
            .get_mut(&u)
            .unwrap_or_else(|| panic!("node does not exist: {:?}", u))
            .remove(&v);
        self.adjacency
            .get_mut(&v)
            .unwrap_or_else(|| panic!("node does not exist: {:?}", v))
            .remove(&u);
    }

    pub fn has_edge(&self, u: Coord, v: Coord) -> bool {
        self.adjacency.get(&u).map_or(false, |a| a.contains(&v))
    }

    /// number of incident edges
    pub fn degree(&self, node: &Coord) -> usize {
        self.adjacency
            .get(node)
            .unwrap_or_else(|| panic!("node does not exist: {:?}", node))
            .len()
    }

    /// Iterates all nodes
    pub fn nodes(&self) -> std::collections::hash_map::Keys<Coord, HashSet<Coord>> {
        self.adjacency.keys()
    }

    /// Returns the number of nodes
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges
    pub fn size(&self) -> usize {
        let degree_sum: usize = self.adjacency.values().map(|a| a.len()).sum();
        degree_sum / 2
    }

    /// every current edge, reported once with endpoints in ascending order
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (&u, neighbor) in self.adjacency.iter() {
            for &v in neighbor.iter() {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    /// drop all edges, keeping the node set
    pub fn clear_edges(&mut self) {
        for neighbor in self.adjacency.values_mut() {
            neighbor.clear();
        }
    }

    /// connected components over the current edge set
    ///
    /// isolated nodes come back as singleton components
    pub fn connected_components(&self) -> Vec<Vec<Coord>> {
        let mut components = Vec::new();
        let mut visited: HashSet<Coord> = HashSet::new();

        for &start in self.adjacency.keys() {
            if visited.contains(&start) {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::from([start]);
            visited.insert(start);

            while let Some(node) = queue.pop_front() {
                component.push(node);
                for &next in self.adjacency.get(&node).unwrap().iter() {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }

            components.push(component);
        }

        components
    }
}
