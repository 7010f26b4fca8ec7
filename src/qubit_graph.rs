pub mod ungraph;
