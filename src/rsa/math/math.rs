use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use num_integer::Integer;
use crate::crypto_error::CryptoError;

// Calcule le pgcd de deux nombres (Euclide)
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

// ---------------------------------------------------------------------------
// Exponentiation modulaire : base^exp mod modulus
//
// Square-and-multiply de gauche à droite : un carré par bit de l'exposant,
// une multiplication par bit à 1. O(log exp) multiplications modulaires.
// exp = 0 donne 1 quel que soit base, y compris pour modulus = 1.
// ---------------------------------------------------------------------------
pub fn mod_exp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint, CryptoError> {
    if modulus.is_zero() {
        return Err(CryptoError::ZeroModulus);
    }
    if exp.is_zero() {
        return Ok(BigUint::one());
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let base       = base % modulus;
    let mut result = BigUint::one();

    for i in (0..exp.bits()).rev() {
        result = (&result * &result) % modulus;
        if exp.bit(i) {
            result = (&result * &base) % modulus;
        }
    }

    Ok(result)
}

// ---------------------------------------------------------------------------
// Calcule l'inverse modulaire de a mod m (Euclide étendu, O(log m) étapes).
// Retourne Err(CryptoError::NoModularInverse) si gcd(a, m) != 1.
// ---------------------------------------------------------------------------
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, CryptoError> {
    if m.is_zero() {
        return Err(CryptoError::ZeroModulus);
    }

    let (g, x) = extended_gcd(a, m);
    if !g.is_one() {
        return Err(CryptoError::NoModularInverse);
    }

    let m_big = BigInt::from(m.clone());
    let mut x_mod = x % &m_big;
    if x_mod < BigInt::zero() {
        x_mod += &m_big;
    }

    x_mod.to_biguint().ok_or(CryptoError::NegativeConversion)
}

// Retourne (gcd(a, b), x) avec a·x + b·y = gcd(a, b).
// Le coefficient y n'est pas suivi : mod_inverse n'en a pas besoin.
fn extended_gcd(a: &BigUint, b: &BigUint) -> (BigUint, BigInt) {
    let (mut old_r, mut r) = (BigInt::from(a.clone()), BigInt::from(b.clone()));
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    // old_r >= 0 : les deux entrées sont positives
    let gcd_val = old_r.to_biguint().unwrap_or_default();

    (gcd_val, old_s)
}
