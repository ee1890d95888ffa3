// ===========================================================================
// Gestion centralisée des erreurs du moteur RSA
//
// Aucune fonction du moteur ne panique sur une entrée invalide : l'appelant
// (la démonstration console, les tests) reçoit une Err(...) et décide.
// ===========================================================================

use std::fmt;
use num_bigint::BigUint;

#[derive(Debug, Clone, PartialEq)]
pub enum CryptoError {
    // --- Erreurs de l'échantillonneur de premiers ---
    /// Aucun premier trouvé dans [min, max] après `attempts` tirages.
    /// `proven_empty` : un balayage exhaustif a prouvé que l'intervalle
    /// ne contient aucun premier acceptable (sinon : budget de tirages épuisé).
    ExhaustedRange { min: BigUint, max: BigUint, attempts: u64, proven_empty: bool },
    /// Intervalle vide : min > max
    InvalidRange { min: BigUint, max: BigUint },

    // --- Erreurs mathématiques ---
    /// L'inverse modulaire n'existe pas (gcd != 1)
    NoModularInverse,
    /// Module nul passé à mod_exp ou mod_inverse
    ZeroModulus,
    /// Conversion BigInt -> BigUint échouée (résultat négatif — invariant interne)
    NegativeConversion,

    // --- Erreurs de génération de clés ---
    /// p == q passés à derive_keypair
    IdenticalPrimes,
    /// φ(n) trop petit : aucun e avec 1 < e < φ(n) et gcd(e, φ(n)) = 1
    NoPublicExponent,
    /// Exposant public imposé hors de ]1, φ(n)[
    UnsuitableExponent { e: BigUint },

    // --- Erreurs du chiffrement par caractère ---
    /// Le code du caractère est >= n : il serait réduit modulo n et perdu
    SymbolTooLarge { symbol: char, position: usize, modulus: BigUint },
    /// Unité chiffrée >= n (hors domaine)
    CiphertextOutOfRange { position: usize },
    /// La valeur déchiffrée n'est pas un caractère Unicode (mauvaise clé ?)
    UndecodableSymbol { position: usize },
    /// Jeton du chiffré textuel non convertible en entier décimal
    MalformedCiphertext { position: usize, token: String },

    InvalidInput(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::ExhaustedRange { min, max, attempts, proven_empty: true } =>
                write!(f, "Aucun nombre premier dans [{min}, {max}] (intervalle balayé, {attempts} tirages)"),
            CryptoError::ExhaustedRange { min, max, attempts, proven_empty: false } =>
                write!(f, "Aucun nombre premier trouvé dans [{min}, {max}] après {attempts} tirages"),
            CryptoError::InvalidRange { min, max } =>
                write!(f, "Intervalle invalide : min ({min}) > max ({max})"),
            CryptoError::NoModularInverse =>
                write!(f, "Impossible de calculer l'inverse modulaire (gcd != 1)"),
            CryptoError::ZeroModulus =>
                write!(f, "Le module doit être strictement positif"),
            CryptoError::NegativeConversion =>
                write!(f, "Conversion interne BigInt -> BigUint : résultat négatif inattendu"),
            CryptoError::IdenticalPrimes =>
                write!(f, "Les deux premiers p et q doivent être distincts"),
            CryptoError::NoPublicExponent =>
                write!(f, "φ(n) trop petit : aucun exposant public e avec 1 < e < φ(n)"),
            CryptoError::UnsuitableExponent { e } =>
                write!(f, "Exposant public e = {e} hors de l'intervalle ]1, φ(n)["),
            CryptoError::SymbolTooLarge { symbol, position, modulus } =>
                write!(
                    f,
                    "Caractère {symbol:?} (code {}) en position {position} non représentable modulo n = {modulus}",
                    u32::from(*symbol)
                ),
            CryptoError::CiphertextOutOfRange { position } =>
                write!(f, "Unité chiffrée en position {position} hors de [0, n)"),
            CryptoError::UndecodableSymbol { position } =>
                write!(f, "Valeur déchiffrée en position {position} : pas un caractère valide (clé incorrecte ?)"),
            CryptoError::MalformedCiphertext { position, token } =>
                write!(f, "Chiffré mal formé : jeton {token:?} en position {position} n'est pas un entier décimal"),
            CryptoError::InvalidInput(msg) =>
                write!(f, "Entrée invalide : {msg}"),
        }
    }
}

impl std::error::Error for CryptoError {}
