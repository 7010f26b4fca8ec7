pub mod decoder;
pub mod error;
pub mod noise;
pub mod qec_code;
pub mod qubit_graph;
