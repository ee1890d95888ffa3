pub mod rsa_keygen;

pub use rsa_keygen::{
    PublicKey, PrivateKey, KeyPair,
    generate_keypair, rsa_keygen, rsa_keygen_with_rng, rsa_keygen_retrying,
    derive_keypair, select_public_exponent,
};
