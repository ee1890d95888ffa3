pub mod math;
pub mod primality;
pub mod sampler;
pub mod rsa_keygen;
pub mod rsa_encrypt;
pub mod rsa_decrypt;
pub mod ciphertext;
