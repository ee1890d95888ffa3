use std::fmt;
use std::str::FromStr;
use num_bigint::BigUint;
use num_traits::One;
use crate::crypto_error::CryptoError;

// Nombre de rounds Miller-Rabin par défaut : probabilité de faux positif <= 4^-20
pub const DEFAULT_MR_ROUNDS: u32 = 20;

// Intervalles de la démonstration d'origine : p ∈ [50, 100], q ∈ [100, 150]
const DEMO_P_RANGE: (u32, u32) = (50, 100);
const DEMO_Q_RANGE: (u32, u32) = (100, 150);

// Taille minimale de module accepté par KeygenConfig::with_bits
const MIN_MODULUS_BITS: u64 = 4;

// ============================================================================
// Intervalle fermé [min, max] dans lequel tirer un premier
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeRange {
    min: BigUint,
    max: BigUint,
}

impl PrimeRange {
    /// Intervalle fermé [min, max]. Err(InvalidRange) si min > max.
    pub fn new(min: BigUint, max: BigUint) -> Result<Self, CryptoError> {
        if min > max {
            return Err(CryptoError::InvalidRange { min, max });
        }
        Ok(PrimeRange { min, max })
    }

    /// Tous les entiers d'exactement `bits` bits : [2^(bits-1), 2^bits - 1]
    pub fn with_bits(bits: u64) -> Result<Self, CryptoError> {
        if bits < 2 {
            return Err(CryptoError::InvalidInput(format!(
                "un premier demande au moins 2 bits, {bits} demandé(s)"
            )));
        }
        let min = BigUint::one() << (bits - 1);
        let max = (BigUint::one() << bits) - BigUint::one();
        Ok(PrimeRange { min, max })
    }

    pub fn min(&self) -> &BigUint {
        &self.min
    }

    pub fn max(&self) -> &BigUint {
        &self.max
    }

    /// Nombre d'entiers de l'intervalle (max - min + 1)
    pub fn width(&self) -> BigUint {
        &self.max - &self.min + BigUint::one()
    }

    pub fn contains(&self, value: &BigUint) -> bool {
        value >= &self.min && value <= &self.max
    }
}

impl fmt::Display for PrimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

// ============================================================================
// Politique de choix de l'exposant public
//
// SmallestCoprime : plus petit e >= 2 premier avec φ(n) (comportement de la
//                   démonstration d'origine).
// Fixed(e)        : valeur imposée, typiquement 65537.
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ExponentPolicy {
    #[default]
    SmallestCoprime,
    Fixed(BigUint),
}

impl FromStr for ExponentPolicy {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("smallest") {
            return Ok(ExponentPolicy::SmallestCoprime);
        }
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CryptoError::InvalidInput(format!(
                "exposant {s:?} : attendu \"smallest\" ou un entier décimal"
            )));
        }
        BigUint::from_str(s)
            .map(ExponentPolicy::Fixed)
            .map_err(|e| CryptoError::InvalidInput(e.to_string()))
    }
}

impl fmt::Display for ExponentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExponentPolicy::SmallestCoprime => write!(f, "smallest"),
            ExponentPolicy::Fixed(e) => write!(f, "{e}"),
        }
    }
}

// ============================================================================
// Paramètres complets d'une génération de clés
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeygenConfig {
    pub p_range:  PrimeRange,
    pub q_range:  PrimeRange,
    pub rounds:   u32,
    pub exponent: ExponentPolicy,
}

impl Default for KeygenConfig {
    fn default() -> Self {
        KeygenConfig {
            p_range: PrimeRange {
                min: BigUint::from(DEMO_P_RANGE.0),
                max: BigUint::from(DEMO_P_RANGE.1),
            },
            q_range: PrimeRange {
                min: BigUint::from(DEMO_Q_RANGE.0),
                max: BigUint::from(DEMO_Q_RANGE.1),
            },
            rounds:   DEFAULT_MR_ROUNDS,
            exponent: ExponentPolicy::default(),
        }
    }
}

impl KeygenConfig {
    /// Module d'environ `modulus_bits` bits : p et q ont chacun modulus_bits/2 bits.
    pub fn with_bits(modulus_bits: u64) -> Result<Self, CryptoError> {
        if modulus_bits < MIN_MODULUS_BITS {
            return Err(CryptoError::InvalidInput(format!(
                "taille de module {modulus_bits} bits insuffisante, minimum : {MIN_MODULUS_BITS} bits"
            )));
        }
        let half = PrimeRange::with_bits(modulus_bits / 2)?;
        Ok(KeygenConfig {
            p_range: half.clone(),
            q_range: half,
            ..KeygenConfig::default()
        })
    }
}
