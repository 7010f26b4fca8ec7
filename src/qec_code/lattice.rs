use crate::error::SimError;
use crate::qubit_graph::ungraph::{Coord, Edge};

/// Fixed planar surface code lattice for one stabilizer type.
///
/// Check nodes sit at odd rows and even columns of a `2 * distance - 1`
/// grid; virtual boundary nodes sit one step above the top row and one
/// step below the bottom row. Error edges connect nodes two steps apart.
/// Construction is deterministic and nothing changes shape afterwards.
pub struct Lattice {
    grid_size: i32,
    check_nodes: Vec<Coord>,
    boundary_nodes: Vec<Coord>,
    data_edges: Vec<Edge>,
}

impl Lattice {
    pub fn new(distance: usize) -> Result<Self, SimError> {
        if distance < 2 {
            return Err(SimError::InvalidConfiguration(format!(
                "distance must be at least 2, got {}",
                distance
            )));
        }

        let grid_size = 2 * distance as i32 - 1;

        let mut check_nodes = Vec::new();
        for i in (1..grid_size).step_by(2) {
            for j in (0..grid_size).step_by(2) {
                check_nodes.push((i, j));
            }
        }

        let mut boundary_nodes = Vec::new();
        for i in [-1, grid_size] {
            for j in (0..grid_size).step_by(2) {
                boundary_nodes.push((i, j));
            }
        }

        // candidate error locations between nodes two steps apart
        let mut data_edges = Vec::new();
        for &(i, j) in check_nodes.iter().chain(boundary_nodes.iter()) {
            if 0 <= i && i < grid_size && j + 2 < grid_size {
                data_edges.push(((i, j), (i, j + 2)));
            }
        }
        for &(i, j) in check_nodes.iter().chain(boundary_nodes.iter()) {
            if i + 2 <= grid_size {
                data_edges.push(((i, j), (i + 2, j)));
            }
        }

        Ok(Self {
            grid_size,
            check_nodes,
            boundary_nodes,
            data_edges,
        })
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn check_nodes(&self) -> &[Coord] {
        &self.check_nodes
    }

    pub fn boundary_nodes(&self) -> &[Coord] {
        &self.boundary_nodes
    }

    pub fn data_edges(&self) -> &[Edge] {
        &self.data_edges
    }

    /// check nodes followed by boundary nodes
    pub fn nodes(&self) -> impl Iterator<Item = Coord> + '_ {
        self.check_nodes
            .iter()
            .chain(self.boundary_nodes.iter())
            .copied()
    }

    /// distance to the nearest boundary from the given row, and that
    /// boundary's row; ties resolve toward the `-1` side
    pub fn nearest_boundary(&self, row: i32) -> (i32, i32) {
        let to_top = (row + 1, -1);
        let to_bottom = (self.grid_size - row, self.grid_size);

        if to_top <= to_bottom {
            to_top
        } else {
            to_bottom
        }
    }
}
