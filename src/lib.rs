// Déclaration des modules
pub mod crypto_error;
pub mod config;
pub mod rsa;
pub mod session_report;

// Arithmétique modulaire et primalité
pub use crate::rsa::math::{gcd, mod_exp, mod_inverse};
pub use crate::rsa::primality::{is_prime, is_probable_prime};
pub use crate::rsa::sampler::{PrimeSampler, generate_prime, generate_prime_with_rng};

// Génération de clés et chiffrement
pub use crate::rsa::rsa_keygen::{PublicKey, PrivateKey, KeyPair, generate_keypair, rsa_keygen, rsa_keygen_with_rng, rsa_keygen_retrying, derive_keypair};
pub use crate::rsa::rsa_encrypt::rsa_encrypt;
pub use crate::rsa::rsa_decrypt::rsa_decrypt;
pub use crate::rsa::ciphertext::Ciphertext;

// Paramètres
pub use crate::config::{PrimeRange, ExponentPolicy, KeygenConfig, DEFAULT_MR_ROUNDS};

// Erreur centralisée
pub use crate::crypto_error::CryptoError;

// Rapport de session (--json)
pub use crate::session_report::SessionReport;
