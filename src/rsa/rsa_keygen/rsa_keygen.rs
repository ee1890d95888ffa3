use log::{debug, info, warn};
use num_bigint::BigUint;
use num_traits::One;
use rand_core::{OsRng, RngCore};
use zeroize::Zeroize;
use crate::config::{ExponentPolicy, KeygenConfig, PrimeRange};
use crate::crypto_error::CryptoError;
use crate::rsa::math::{gcd, mod_inverse};
use crate::rsa::sampler::PrimeSampler;

// ============================================================================
// Clé publique RSA (e, n) — pas de données secrètes
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub n: BigUint,
    pub e: BigUint,
}

// ============================================================================
// Helper : écrase un BigUint par un tampon nul de même taille, puis le vide
// ============================================================================
fn zeroize_biguint(n: &mut BigUint) {
    let bits = n.bits() as usize;
    if bits > 0 {
        *n = BigUint::from_bytes_be(&vec![0u8; (bits + 7) / 8]);
    }
    *n = BigUint::default();
}

// ============================================================================
// Clé privée RSA (d, n) — d ZEROISÉ À LA DESTRUCTION
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    pub n: BigUint,
    pub d: BigUint,
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        zeroize_biguint(&mut self.d);
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// ============================================================================
// Paire de clés
//
// Invariants : n = p·q (p != q premiers), 1 < e < φ(n), gcd(e, φ(n)) = 1,
// d·e ≡ 1 (mod φ(n)). p, q et φ(n) ne sont jamais conservés.
// ============================================================================
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key:  PublicKey,
    pub private_key: PrivateKey,
}

impl KeyPair {
    pub fn modulus(&self) -> &BigUint {
        &self.public_key.n
    }
}

// ============================================================================
// Choix de l'exposant public
//
// SmallestCoprime : on remonte depuis 2. φ(n) est pair dès que p, q > 2,
// donc e = 2 échoue et la boucle s'arrête bien avant φ(n).
// ============================================================================
pub fn select_public_exponent(phi: &BigUint, policy: &ExponentPolicy) -> Result<BigUint, CryptoError> {
    let one = BigUint::one();
    match policy {
        ExponentPolicy::SmallestCoprime => {
            let mut e = BigUint::from(2u32);
            while &e < phi {
                if gcd(&e, phi) == one {
                    return Ok(e);
                }
                e += 1u32;
            }
            Err(CryptoError::NoPublicExponent)
        }
        ExponentPolicy::Fixed(e) => {
            if e <= &one || e >= phi {
                return Err(CryptoError::UnsuitableExponent { e: e.clone() });
            }
            Ok(e.clone())
        }
    }
}

// ---------------------------------------------------------------------------
// Dérivation déterministe d'une paire de clés à partir de deux premiers.
// La primalité de p et q est à la charge de l'appelant.
// ---------------------------------------------------------------------------
pub fn derive_keypair(p: &BigUint, q: &BigUint, policy: &ExponentPolicy) -> Result<KeyPair, CryptoError> {
    if p == q {
        return Err(CryptoError::IdenticalPrimes);
    }

    let n   = p * q;
    let phi = (p - BigUint::one()) * (q - BigUint::one());

    let e = select_public_exponent(&phi, policy)?;

    // Garanti par select_public_exponent pour SmallestCoprime, pas pour Fixed
    let d = mod_inverse(&e, &phi)?;

    debug!("exposant public e = {e}, |n| = {} bits", n.bits());

    Ok(KeyPair {
        public_key:  PublicKey { n: n.clone(), e },
        private_key: PrivateKey { n, d },
    })
}

// ============================================================================
// Génération de clés RSA
// ============================================================================
pub fn rsa_keygen(config: &KeygenConfig) -> Result<KeyPair, CryptoError> {
    rsa_keygen_with_rng(config, &mut OsRng)
}

pub fn rsa_keygen_with_rng(config: &KeygenConfig, rng: &mut impl RngCore) -> Result<KeyPair, CryptoError> {
    let sampler = PrimeSampler::new(config.rounds);

    // Deux premiers distincts : q est retiré tant qu'il vaut p
    let p = sampler.sample(&config.p_range, rng)?;
    let q = sampler.sample_excluding(&config.q_range, Some(&p), rng)?;

    info!(
        "premiers tirés : |p| = {} bits dans {}, |q| = {} bits dans {}",
        p.bits(),
        config.p_range,
        q.bits(),
        config.q_range
    );

    derive_keypair(&p, &q, &config.exponent)
}

// ---------------------------------------------------------------------------
// Génération avec nouvelles tentatives sur NoModularInverse (exposant imposé
// non premier avec φ(n)) : chaque tentative tire de nouveaux p et q.
// Les autres erreurs se reproduiraient et sont remontées immédiatement.
// Retourne la paire et le numéro de la tentative réussie.
// ---------------------------------------------------------------------------
pub fn rsa_keygen_retrying(
    config: &KeygenConfig,
    max_attempts: u32,
    rng: &mut impl RngCore,
) -> Result<(KeyPair, u32), CryptoError> {
    let mut attempt = 1;
    loop {
        match rsa_keygen_with_rng(config, rng) {
            Ok(kp) => return Ok((kp, attempt)),
            Err(CryptoError::NoModularInverse) if attempt < max_attempts => {
                warn!("e = {} non inversible modulo φ(n), nouveaux premiers (tentative {attempt})", config.exponent);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// p dans p_range, q dans q_range, politique et rounds par défaut
// ---------------------------------------------------------------------------
pub fn generate_keypair(p_range: &PrimeRange, q_range: &PrimeRange) -> Result<KeyPair, CryptoError> {
    let config = KeygenConfig {
        p_range: p_range.clone(),
        q_range: q_range.clone(),
        ..KeygenConfig::default()
    };
    rsa_keygen(&config)
}
