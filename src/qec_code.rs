pub mod lattice;
pub mod surface_code;
