use rand::prelude::{SeedableRng, StdRng};

pub fn create_rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
