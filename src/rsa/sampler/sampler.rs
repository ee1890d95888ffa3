use log::{debug, trace};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, ToPrimitive};
use rand::Rng;
use rand_core::{OsRng, RngCore};
use crate::config::{PrimeRange, DEFAULT_MR_ROUNDS};
use crate::crypto_error::CryptoError;
use crate::rsa::primality::is_probable_prime;

// Budget de tirages par défaut : BASE + PER_BIT · bits(max).
// La densité des premiers près de x est ~1/ln(x) ≈ 1/(0.69·bits), ce budget
// laisse une marge d'un facteur ~20 au-dessus de l'espérance.
const DEFAULT_BASE_DRAWS: u64 = 64;
const DEFAULT_DRAWS_PER_BIT: u64 = 16;

// Au-delà de cette largeur, l'intervalle n'est jamais balayé exhaustivement
const DEFAULT_SCAN_LIMIT: u64 = 1 << 16;

// ============================================================================
// Échantillonneur de premiers
//
// Tirage uniforme dans [min, max] jusqu'à acceptation par le test de
// primalité, avec un budget borné. Si le budget est épuisé et que
// l'intervalle est assez étroit, il est balayé : on tire alors uniformément
// parmi les premiers trouvés, ou on prouve qu'il n'y en a aucun.
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeSampler {
    rounds:     u32,
    max_draws:  Option<u64>,
    scan_limit: u64,
}

impl Default for PrimeSampler {
    fn default() -> Self {
        PrimeSampler::new(DEFAULT_MR_ROUNDS)
    }
}

impl PrimeSampler {
    pub fn new(rounds: u32) -> Self {
        PrimeSampler {
            rounds,
            max_draws:  None,
            scan_limit: DEFAULT_SCAN_LIMIT,
        }
    }

    /// Remplace le budget de tirages calculé à partir de la taille de max
    pub fn with_max_draws(mut self, max_draws: u64) -> Self {
        self.max_draws = Some(max_draws);
        self
    }

    /// Largeur maximale d'intervalle pour le balayage de repli (0 : jamais)
    pub fn with_scan_limit(mut self, scan_limit: u64) -> Self {
        self.scan_limit = scan_limit;
        self
    }

    fn draw_budget(&self, range: &PrimeRange) -> u64 {
        self.max_draws.unwrap_or_else(|| {
            DEFAULT_BASE_DRAWS + DEFAULT_DRAWS_PER_BIT * range.max().bits()
        })
    }

    /// Premier uniforme dans l'intervalle
    pub fn sample(&self, range: &PrimeRange, rng: &mut impl RngCore) -> Result<BigUint, CryptoError> {
        self.sample_excluding(range, None, rng)
    }

    /// Premier uniforme dans l'intervalle, différent de `excluded`
    pub fn sample_excluding(
        &self,
        range: &PrimeRange,
        excluded: Option<&BigUint>,
        rng: &mut impl RngCore,
    ) -> Result<BigUint, CryptoError> {
        let budget = self.draw_budget(range);
        let upper  = range.max() + BigUint::one(); // gen_biguint_range exclut la borne haute

        for attempt in 1..=budget {
            let candidate = rng.gen_biguint_range(range.min(), &upper);
            if excluded == Some(&candidate) {
                continue;
            }
            if is_probable_prime(&candidate, self.rounds, rng) {
                debug!("premier trouvé dans {range} après {attempt} tirage(s)");
                return Ok(candidate);
            }
        }

        let scannable = range.width().to_u64().is_some_and(|w| w <= self.scan_limit);
        if !scannable {
            return Err(CryptoError::ExhaustedRange {
                min:          range.min().clone(),
                max:          range.max().clone(),
                attempts:     budget,
                proven_empty: false,
            });
        }

        debug!("budget de {budget} tirages épuisé dans {range}, balayage de l'intervalle");
        let primes = self.scan(range, excluded, rng);
        if primes.is_empty() {
            return Err(CryptoError::ExhaustedRange {
                min:          range.min().clone(),
                max:          range.max().clone(),
                attempts:     budget,
                proven_empty: true,
            });
        }

        trace!("{} premier(s) acceptable(s) dans {range}", primes.len());
        let index = rng.gen_range(0..primes.len());
        Ok(primes[index].clone())
    }

    fn scan(&self, range: &PrimeRange, excluded: Option<&BigUint>, rng: &mut impl RngCore) -> Vec<BigUint> {
        let mut primes    = Vec::new();
        let mut candidate = range.min().clone();
        while &candidate <= range.max() {
            if excluded != Some(&candidate) && is_probable_prime(&candidate, self.rounds, rng) {
                primes.push(candidate.clone());
            }
            candidate += 1u32;
        }
        primes
    }
}

// ---------------------------------------------------------------------------
// Premier aléatoire dans [min, max] (OsRng, paramètres par défaut)
// ---------------------------------------------------------------------------
pub fn generate_prime(min: &BigUint, max: &BigUint) -> Result<BigUint, CryptoError> {
    generate_prime_with_rng(min, max, &mut OsRng)
}

pub fn generate_prime_with_rng(
    min: &BigUint,
    max: &BigUint,
    rng: &mut impl RngCore,
) -> Result<BigUint, CryptoError> {
    let range = PrimeRange::new(min.clone(), max.clone())?;
    PrimeSampler::default().sample(&range, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn range(min: u64, max: u64) -> PrimeRange {
        PrimeRange::new(big(min), big(max)).unwrap()
    }

    #[test]
    fn sampled_primes_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(10);
        let sampler = PrimeSampler::default();
        for _ in 0..200 {
            let p = sampler.sample(&range(50, 100), &mut rng).unwrap();
            assert!(p >= big(50) && p <= big(100));
            assert!(is_probable_prime(&p, 20, &mut rng));
        }
    }

    #[test]
    fn range_without_prime_is_proven_empty() {
        let mut rng = StdRng::seed_from_u64(11);
        let err = generate_prime_with_rng(&big(4), &big(4), &mut rng).unwrap_err();
        assert_eq!(
            err,
            CryptoError::ExhaustedRange { min: big(4), max: big(4), attempts: 64 + 16 * 3, proven_empty: true }
        );
        // Suite de composés 24..=28
        assert!(matches!(
            generate_prime_with_rng(&big(24), &big(28), &mut rng),
            Err(CryptoError::ExhaustedRange { proven_empty: true, .. })
        ));
    }

    #[test]
    fn single_prime_range_returns_it() {
        let mut rng = StdRng::seed_from_u64(12);
        assert_eq!(generate_prime_with_rng(&big(97), &big(97), &mut rng).unwrap(), big(97));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(13);
        assert!(matches!(
            generate_prime_with_rng(&big(100), &big(50), &mut rng),
            Err(CryptoError::InvalidRange { .. })
        ));
    }

    #[test]
    fn scan_fallback_finds_rare_prime() {
        // Budget nul : seul le balayage de [90, 97] trouve 97
        let mut rng = StdRng::seed_from_u64(14);
        let sampler = PrimeSampler::default().with_max_draws(0);
        assert_eq!(sampler.sample(&range(90, 97), &mut rng).unwrap(), big(97));
    }

    #[test]
    fn exhausted_budget_without_scan_is_not_proven_empty() {
        let mut rng = StdRng::seed_from_u64(15);
        let sampler = PrimeSampler::default().with_max_draws(3).with_scan_limit(0);
        let err = sampler.sample(&range(24, 28), &mut rng).unwrap_err();
        assert_eq!(
            err,
            CryptoError::ExhaustedRange { min: big(24), max: big(28), attempts: 3, proven_empty: false }
        );
    }

    #[test]
    fn exclusion_forces_other_prime() {
        let mut rng = StdRng::seed_from_u64(16);
        let sampler = PrimeSampler::default();
        for _ in 0..50 {
            let q = sampler.sample_excluding(&range(5, 7), Some(&big(5)), &mut rng).unwrap();
            assert_eq!(q, big(7));
        }
        assert!(matches!(
            sampler.sample_excluding(&range(7, 7), Some(&big(7)), &mut rng),
            Err(CryptoError::ExhaustedRange { proven_empty: true, .. })
        ));
    }

    #[test]
    fn same_seed_same_prime() {
        let sampler = PrimeSampler::default();
        let r = PrimeRange::with_bits(64).unwrap();
        let a = sampler.sample(&r, &mut StdRng::seed_from_u64(17)).unwrap();
        let b = sampler.sample(&r, &mut StdRng::seed_from_u64(17)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.bits(), 64);
    }

    #[test]
    fn os_rng_entry_point() {
        let p = generate_prime(&big(1_000), &big(2_000)).unwrap();
        assert!(p >= big(1_000) && p <= big(2_000));
    }
}
