use log::trace;
use num_bigint::BigUint;
use crate::crypto_error::CryptoError;
use crate::rsa::ciphertext::Ciphertext;
use crate::rsa::math::mod_exp;
use crate::rsa::rsa_keygen::PublicKey;

// ---------------------------------------------------------------------------
// Chiffrement d'un caractère : c = code^e mod n
//
// Retourne Err(CryptoError::SymbolTooLarge) si code >= n : la réduction
// modulo n rendrait le caractère irrécupérable au déchiffrement.
// ---------------------------------------------------------------------------
pub fn encrypt_symbol(symbol: char, position: usize, pk: &PublicKey) -> Result<BigUint, CryptoError> {
    let code = BigUint::from(u32::from(symbol));
    if code >= pk.n {
        return Err(CryptoError::SymbolTooLarge {
            symbol,
            position,
            modulus: pk.n.clone(),
        });
    }
    mod_exp(&code, &pk.e, &pk.n)
}

// ---------------------------------------------------------------------------
// Chiffrement RSA caractère par caractère, ordre conservé.
// Aucune unité n'est produite si un seul caractère est rejeté.
// ---------------------------------------------------------------------------
pub fn rsa_encrypt(text: &str, pk: &PublicKey) -> Result<Ciphertext, CryptoError> {
    let units = text
        .chars()
        .enumerate()
        .map(|(position, symbol)| encrypt_symbol(symbol, position, pk))
        .collect::<Result<Vec<_>, _>>()?;

    trace!("{} caractère(s) chiffré(s)", units.len());
    Ok(Ciphertext::from(units))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_pk() -> PublicKey {
        PublicKey { n: BigUint::from(3233u32), e: BigUint::from(17u32) }
    }

    #[test]
    fn textbook_symbol() {
        // 'A' = 65, 65^17 mod 3233 = 2790
        assert_eq!(encrypt_symbol('A', 0, &textbook_pk()).unwrap(), BigUint::from(2790u32));
    }

    #[test]
    fn order_is_preserved() {
        let ct = rsa_encrypt("AAB", &textbook_pk()).unwrap();
        assert_eq!(ct.len(), 3);
        assert_eq!(ct.units()[0], ct.units()[1]);
        assert_ne!(ct.units()[0], ct.units()[2]);
        assert_eq!(ct.units()[0], BigUint::from(2790u32));
    }

    #[test]
    fn empty_text_gives_empty_ciphertext() {
        assert!(rsa_encrypt("", &textbook_pk()).unwrap().is_empty());
    }

    #[test]
    fn symbol_at_or_above_modulus_is_rejected() {
        let pk = PublicKey { n: BigUint::from(100u32), e: BigUint::from(3u32) };
        // 'd' = 100 = n
        assert_eq!(
            rsa_encrypt("abcd", &pk),
            Err(CryptoError::SymbolTooLarge { symbol: 'd', position: 3, modulus: BigUint::from(100u32) })
        );
        // 'é' = 233 < 3233 : accepté
        assert!(rsa_encrypt("é", &textbook_pk()).is_ok());
        // '€' = 8364 > 3233
        assert!(matches!(
            rsa_encrypt("1€", &textbook_pk()),
            Err(CryptoError::SymbolTooLarge { symbol: '€', position: 1, .. })
        ));
    }
}
