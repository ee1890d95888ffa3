use std::fmt;
use std::str::FromStr;
use num_bigint::BigUint;
use crate::crypto_error::CryptoError;

// ============================================================================
// Protection DoS parsing : un jeton décimal plus long que cette limite est
// rejeté AVANT la conversion en BigUint (coût quadratique en longueur).
// 2048 chiffres couvrent un module de 6800 bits.
// ============================================================================
pub const MAX_UNIT_DIGITS: usize = 2_048;

// ============================================================================
// Chiffré : suite ordonnée d'unités c_i = code_i^e mod n
//
// Forme textuelle : entiers décimaux séparés par des espaces. Le parsing
// accepte tout blanc comme séparateur (espaces finaux compris), et
// to_string() suivi de parse() redonne exactement la même suite.
// ============================================================================
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ciphertext {
    units: Vec<BigUint>,
}

impl Ciphertext {
    pub fn new(units: Vec<BigUint>) -> Self {
        Ciphertext { units }
    }

    pub fn units(&self) -> &[BigUint] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl From<Vec<BigUint>> for Ciphertext {
    fn from(units: Vec<BigUint>) -> Self {
        Ciphertext { units }
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, unit) in self.units.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}

// Un jeton valide : 1 à MAX_UNIT_DIGITS chiffres ASCII, sans signe ni '_'
fn parse_unit(position: usize, token: &str) -> Result<BigUint, CryptoError> {
    let malformed = || CryptoError::MalformedCiphertext {
        position,
        token: token.chars().take(32).collect(),
    };

    if token.len() > MAX_UNIT_DIGITS || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    BigUint::parse_bytes(token.as_bytes(), 10).ok_or_else(malformed)
}

impl FromStr for Ciphertext {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .enumerate()
            .map(|(position, token)| parse_unit(position, token))
            .collect::<Result<Vec<_>, _>>()
            .map(Ciphertext::from)
    }
}
