use log::trace;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use crate::crypto_error::CryptoError;
use crate::rsa::ciphertext::Ciphertext;
use crate::rsa::math::mod_exp;
use crate::rsa::rsa_keygen::PrivateKey;

// ---------------------------------------------------------------------------
// Déchiffrement d'une unité : code = c^d mod n, puis conversion en caractère
// ---------------------------------------------------------------------------
pub fn decrypt_unit(unit: &BigUint, position: usize, sk: &PrivateKey) -> Result<char, CryptoError> {
    if unit >= &sk.n {
        return Err(CryptoError::CiphertextOutOfRange { position });
    }

    let code = mod_exp(unit, &sk.d, &sk.n)?;

    code.to_u32()
        .and_then(char::from_u32)
        .ok_or(CryptoError::UndecodableSymbol { position })
}

// ---------------------------------------------------------------------------
// Déchiffrement RSA : les unités sont traitées dans l'ordre du chiffré
// ---------------------------------------------------------------------------
pub fn rsa_decrypt(ciphertext: &Ciphertext, sk: &PrivateKey) -> Result<String, CryptoError> {
    let text = ciphertext
        .units()
        .iter()
        .enumerate()
        .map(|(position, unit)| decrypt_unit(unit, position, sk))
        .collect::<Result<String, _>>()?;

    trace!("{} unité(s) déchiffrée(s)", ciphertext.len());
    Ok(text)
}
