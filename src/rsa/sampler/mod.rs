mod sampler;

pub use sampler::{PrimeSampler, generate_prime, generate_prime_with_rng};
