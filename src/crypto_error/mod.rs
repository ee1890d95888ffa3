pub mod crypto_error;

pub use crypto_error::CryptoError;
