use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use retworkx_core::max_weight_matching::max_weight_matching;
use retworkx_core::petgraph as rpet;
use retworkx_core::Result;

use hashbrown::{HashMap, HashSet};

use crate::qec_code::lattice::Lattice;
use crate::qubit_graph::ungraph::Coord;

/// Node of the auxiliary matching graph.
///
/// A defect and the boundary partner created for it are distinct
/// identities even when they share a column, so partners carry the
/// coordinates of the defect they belong to.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SyndromeNode {
    Defect(Coord),
    BoundaryPartner { defect: Coord, boundary: Coord },
}

impl SyndromeNode {
    /// real lattice coordinates this node stands for
    pub fn coord(&self) -> Coord {
        match *self {
            Self::Defect(coord) => coord,
            Self::BoundaryPartner { boundary, .. } => boundary,
        }
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::BoundaryPartner { .. })
    }
}

/// Build the per-round matching graph: defects pairwise weighted by
/// negative L1 distance, each defect linked to its own boundary partner
/// by negative nearest-boundary distance, and partners linked to each
/// other for free so surplus defects can be absorbed at the boundary.
fn build_syndrome_graph(lattice: &Lattice, syndrome: &[Coord]) -> UnGraphMap<SyndromeNode, i64> {
    let mut graph = UnGraphMap::new();

    for &defect in syndrome.iter() {
        graph.add_node(SyndromeNode::Defect(defect));
    }

    for (&u, &v) in syndrome.iter().tuple_combinations() {
        let weight = i64::from(-((u.0 - v.0).abs() + (u.1 - v.1).abs()));
        graph.add_edge(SyndromeNode::Defect(u), SyndromeNode::Defect(v), weight);
    }

    let mut partners = Vec::new();
    for &defect in syndrome.iter() {
        let (dist, boundary_row) = lattice.nearest_boundary(defect.0);
        let partner = SyndromeNode::BoundaryPartner {
            defect,
            boundary: (boundary_row, defect.1),
        };
        graph.add_edge(SyndromeNode::Defect(defect), partner, i64::from(-dist));
        partners.push(partner);
    }

    for (&u, &v) in partners.iter().tuple_combinations() {
        graph.add_edge(u, v, 0);
    }

    graph
}

/// full-cardinality maximum-weight matching over the syndrome graph
fn maximum_weight_matching(
    local_graph: &UnGraphMap<SyndromeNode, i64>,
) -> Vec<(SyndromeNode, SyndromeNode)> {
    let mut node_to_index = HashMap::new();
    let mut index_to_node = HashMap::new();

    for (i, node) in local_graph.nodes().enumerate() {
        node_to_index.insert(node, i);
        index_to_node.insert(i, node);
    }

    let mut edges = Vec::new();
    for (u, v, &w) in local_graph.all_edges() {
        let &start = node_to_index.get(&u).unwrap();
        let &end = node_to_index.get(&v).unwrap();
        edges.push((start as u32, end as u32, w as i128));
    }

    let g = rpet::graph::UnGraph::<u32, i128>::from_edges(&edges);

    let res: Result<HashSet<(usize, usize)>> =
        max_weight_matching(&g, true, |e| Ok(*e.weight()), true);
    let matching_index = res.unwrap();

    let mut matching = Vec::new();
    for (u, v) in matching_index {
        let &start = index_to_node.get(&u).unwrap();
        let &end = index_to_node.get(&v).unwrap();
        matching.push((start, end));
    }

    matching
}

/// Decode a syndrome into matched node pairs. Which of several
/// equal-weight matchings comes back is up to the solver; callers may
/// only rely on topological properties of the result.
pub fn decode(lattice: &Lattice, syndrome: &[Coord]) -> Vec<(SyndromeNode, SyndromeNode)> {
    if syndrome.is_empty() {
        return Vec::new();
    }

    let local_graph = build_syndrome_graph(lattice, syndrome);
    maximum_weight_matching(&local_graph)
}
