use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::error::SimError;
use crate::qubit_graph::ungraph::Edge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseModel {
    Uncorrelated,
    Depolarizing,
}

impl NoiseModel {
    /// look up a noise model by its configuration name
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name {
            "uncorrelated" => Ok(Self::Uncorrelated),
            "depolarizing" => Ok(Self::Depolarizing),
            _ => Err(SimError::UnsupportedNoiseModel(name.to_string())),
        }
    }

    /// effective bit flip probability for physical error probability p
    ///
    /// a depolarizing event is bit-flip-detectable with rate 2p/3
    pub fn flip_probability(&self, p: f64) -> f64 {
        match self {
            Self::Uncorrelated => p,
            Self::Depolarizing => 2.0 * p / 3.0,
        }
    }
}

/// Independent per-edge bit flip sampler, the only source of randomness
/// in a simulation instance. Each instance owns its own seeded stream.
pub struct BitFlipNoise {
    flip_probability: f64,
    rng: SmallRng,
}

impl BitFlipNoise {
    pub fn new(model: NoiseModel, p: f64, seed: u64) -> Self {
        Self {
            flip_probability: model.flip_probability(p),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// sample which edges flip this round
    pub fn sample(&mut self, edges: &[Edge]) -> Vec<Edge> {
        edges
            .iter()
            .copied()
            .filter(|_| self.rng.gen::<f64>() < self.flip_probability)
            .collect()
    }

    pub fn flip_probability(&self) -> f64 {
        self.flip_probability
    }
}
