pub mod ciphertext;

pub use ciphertext::{Ciphertext, MAX_UNIT_DIGITS};
