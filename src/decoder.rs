pub mod mwpm;
