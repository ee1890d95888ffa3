pub mod rsa_encrypt;

pub use rsa_encrypt::{rsa_encrypt, encrypt_symbol};
