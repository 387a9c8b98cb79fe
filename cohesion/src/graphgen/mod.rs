//! Provides functionality for generating graphs for testing and benchmarking.

use rand::{rngs::StdRng, SeedableRng};

pub mod erdos_renyi;
pub mod random_attachment;

pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
