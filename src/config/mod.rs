// Réexporte les paramètres de génération de clés

mod config;

pub use config::{PrimeRange, ExponentPolicy, KeygenConfig, DEFAULT_MR_ROUNDS};
