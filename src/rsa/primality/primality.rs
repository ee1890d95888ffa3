use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use num_integer::Integer;
use rand_core::{OsRng, RngCore};
use crate::config::DEFAULT_MR_ROUNDS;

// ---------------------------------------------------------------------------
// Table de petits premiers (crible préliminaire, tous les premiers < 256)
// ---------------------------------------------------------------------------
const SMALL_PRIMES: &[u32] = &[
      2,   3,   5,   7,  11,  13,  17,  19,  23,  29,
     31,  37,  41,  43,  47,  53,  59,  61,  67,  71,
     73,  79,  83,  89,  97, 101, 103, 107, 109, 113,
    127, 131, 137, 139, 149, 151, 157, 163, 167, 173,
    179, 181, 191, 193, 197, 199, 211, 223, 227, 229,
    233, 239, 241, 251,
];

// Tout composé < 257² a un facteur <= 251 : sous cette borne, la division
// par la table suffit et le verdict est exact.
const TRIAL_DIVISION_LIMIT: u32 = 257 * 257;

// ---------------------------------------------------------------------------
// Test de primalité avec la source d'aléa système et DEFAULT_MR_ROUNDS rounds
// ---------------------------------------------------------------------------
pub fn is_prime(n: &BigUint) -> bool {
    is_probable_prime(n, DEFAULT_MR_ROUNDS, &mut OsRng)
}

// ---------------------------------------------------------------------------
// Test de primalité : division par petits premiers puis Miller-Rabin.
//
// Exact pour n < 257². Au-delà, un composé est déclaré premier avec une
// probabilité <= 4^-rounds (rounds est ramené à 1 au minimum).
// ---------------------------------------------------------------------------
pub fn is_probable_prime(n: &BigUint, rounds: u32, rng: &mut impl RngCore) -> bool {
    if n <= &BigUint::one() { return false; }
    if n == &BigUint::from(2u32) || n == &BigUint::from(3u32) { return true; }
    if n.is_even() { return false; }

    if let Some(verdict) = trial_division(n) {
        return verdict;
    }

    miller_rabin(n, rounds.max(1), rng)
}

// Some(verdict) si la table suffit à conclure, None sinon
fn trial_division(n: &BigUint) -> Option<bool> {
    for &sp in SMALL_PRIMES {
        let bp = BigUint::from(sp);
        if n == &bp {
            return Some(true);
        }
        if (n % &bp).is_zero() {
            return Some(false);
        }
    }
    if n < &BigUint::from(TRIAL_DIVISION_LIMIT) {
        return Some(true);
    }
    None
}

// n impair, n >= 257²
fn miller_rabin(n: &BigUint, rounds: u32, rng: &mut impl RngCore) -> bool {
    let n_minus_1 = n - BigUint::one();
    let mut d = n_minus_1.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    // Témoins tirés dans [2, n-2]
    let low  = BigUint::from(2u32);
    let high = n - BigUint::one();

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&low, &high);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_1 {
            continue 'witness;
        }
        for _ in 0..r.saturating_sub(1) {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
