mod primality;

pub use primality::{is_prime, is_probable_prime};
