use crate::decoder::mwpm::{self, SyndromeNode};
use crate::error::SimError;
use crate::noise::noise_model::{BitFlipNoise, NoiseModel};
use crate::qec_code::lattice::Lattice;
use crate::qubit_graph::ungraph::{Coord, Edge, UnGraph};

/// lifecycle of one Monte Carlo instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Failed,
}

/// One surface code simulation instance: a fixed lattice, a mutable
/// flipped-edge field over it, and an owned noise stream. Rounds advance
/// until a residual error chain spans the lattice boundary to boundary.
pub struct SurfaceCodeSim {
    lattice: Lattice,
    error_graph: UnGraph,
    noise: BitFlipNoise,
    status: Status,
    logical_error: bool,
    rounds: u64,
    display_mode: bool,
}

impl SurfaceCodeSim {
    pub fn new(
        distance: usize,
        physical_error_probability: f64,
        noise_model: &str,
        display_mode: bool,
        seed: u64,
    ) -> Result<Self, SimError> {
        let model = NoiseModel::from_name(noise_model)?;

        if !(0.0..=1.0).contains(&physical_error_probability) {
            return Err(SimError::InvalidConfiguration(format!(
                "physical error probability must be in [0, 1], got {}",
                physical_error_probability
            )));
        }

        let lattice = Lattice::new(distance)?;
        let nodes: Vec<Coord> = lattice.nodes().collect();
        let error_graph = UnGraph::new(&nodes);
        let noise = BitFlipNoise::new(model, physical_error_probability, seed);

        Ok(Self {
            lattice,
            error_graph,
            noise,
            status: Status::Idle,
            logical_error: false,
            rounds: 0,
            display_mode,
        })
    }

    /// check nodes with odd flipped degree, recomputed from scratch
    pub fn syndrome(&self) -> Vec<Coord> {
        self.lattice
            .check_nodes()
            .iter()
            .copied()
            .filter(|n| self.error_graph.degree(n) % 2 == 1)
            .collect()
    }

    /// Advance one round: fresh noise realization, syndrome extraction,
    /// decode, correction, logical error detection. Does nothing once the
    /// instance has failed.
    pub fn simulate_step(&mut self) {
        if self.status == Status::Failed {
            return;
        }
        self.status = Status::Running;

        self.error_graph.clear_edges();
        for (u, v) in self.noise.sample(self.lattice.data_edges()) {
            self.error_graph.toggle_edge(u, v);
        }

        let syndrome = self.syndrome();
        let matching = mwpm::decode(&self.lattice, &syndrome);

        if self.display_mode {
            println!("(1) pre correction");
            self.display_graph();
        }

        self.apply_correction(&matching);

        if self.display_mode {
            println!("(2) post correction");
            self.display_graph();
        }

        self.rounds += 1;
        if self.check_logical_errors() {
            self.logical_error = true;
            self.status = Status::Failed;
        }
    }

    /// Toggle the lattice edges along each matched pair's L-shaped path:
    /// column steps at the source row, then row steps at the target
    /// column. Two defects both routed to the boundary cancel in
    /// aggregate and need no toggling.
    pub fn apply_correction(&mut self, matching: &[(SyndromeNode, SyndromeNode)]) {
        for &(u, v) in matching.iter() {
            if u.is_boundary() && v.is_boundary() {
                continue;
            }

            let (i1, j1) = u.coord();
            let (i2, j2) = v.coord();

            if j1 != j2 {
                let step = 2 * (j2 - j1).signum();
                let mut col = j1;
                while col != j2 {
                    self.error_graph.toggle_edge((i1, col), (i1, col + step));
                    col += step;
                }
            }
            if i1 != i2 {
                let step = 2 * (i2 - i1).signum();
                let mut row = i1;
                while row != i2 {
                    self.error_graph.toggle_edge((row, j2), (row + step, j2));
                    row += step;
                }
            }
        }
    }

    /// a logical error occurred iff an odd number of residual components
    /// span the lattice from one boundary to the other
    pub fn check_logical_errors(&self) -> bool {
        let spanning = self
            .error_graph
            .connected_components()
            .into_iter()
            .filter(|c| c.len() > 1 && self.is_spanning_component(c))
            .count();

        spanning % 2 == 1
    }

    /// A component spans iff every member is a degree-2 pass-through
    /// point or lies on one of the two boundaries, and both boundaries
    /// are touched.
    fn is_spanning_component(&self, component: &[Coord]) -> bool {
        let (mut left, mut right) = (false, false);

        for node in component.iter() {
            if self.error_graph.degree(node) == 2 {
                continue;
            } else if node.0 == -1 {
                left = true;
            } else if node.0 == self.lattice.grid_size() {
                right = true;
            } else {
                return false;
            }
        }

        left && right
    }

    pub fn has_logical_error(&self) -> bool {
        self.logical_error
    }

    /// run rounds until a logical error occurs, returning rounds survived
    /// (the failing round counts)
    pub fn simulate(&mut self) -> u64 {
        while !self.has_logical_error() {
            self.simulate_step();
        }

        self.rounds
    }

    /// clear the error state, flag and counter; the lattice is preserved
    pub fn reset(&mut self) {
        self.error_graph.clear_edges();
        self.logical_error = false;
        self.rounds = 0;
        self.status = Status::Idle;
    }

    /// XOR a single edge of the error state, for diagnostics and tests
    pub fn flip_edge(&mut self, u: Coord, v: Coord) {
        self.error_graph.toggle_edge(u, v);
    }

    /// currently flipped edges, endpoints in ascending order
    pub fn flipped_edges(&self) -> Vec<Edge> {
        self.error_graph.edges()
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn rounds_survived(&self) -> u64 {
        self.rounds
    }

    /// render the current error graph, observational only
    pub fn display_graph(&self) {
        print!("flipped edges: ");
        for (u, v) in self.error_graph.edges() {
            print!("{:?}-{:?}, ", u, v);
        }
        println!();

        print!("defects: ");
        for coord in self.syndrome() {
            print!("{:?}, ", coord);
        }
        println!();
    }
}
