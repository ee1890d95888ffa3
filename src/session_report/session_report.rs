use serde::{Serialize, Deserialize};
use crate::rsa::ciphertext::Ciphertext;
use crate::rsa::rsa_keygen::{KeyPair, PublicKey, PrivateKey};

// ============================================================================
// Rapport d'une session de démonstration (sortie --json)
//
// Les entiers sont écrits en décimal dans des chaînes : JSON ne borne pas
// les nombres, mais la plupart des lecteurs les convertissent en f64.
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyJson {
    pub e: String,
    pub n: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrivateKeyJson {
    pub d: String,
    pub n: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub public_key:  PublicKeyJson,
    pub private_key: PrivateKeyJson,
    pub plaintext:   String,
    /// Forme textuelle du chiffré : entiers décimaux séparés par des espaces
    pub ciphertext:  String,
    pub decrypted:   String,
}

impl From<&PublicKey> for PublicKeyJson {
    fn from(pk: &PublicKey) -> Self {
        PublicKeyJson { e: pk.e.to_str_radix(10), n: pk.n.to_str_radix(10) }
    }
}

impl From<&PrivateKey> for PrivateKeyJson {
    fn from(sk: &PrivateKey) -> Self {
        PrivateKeyJson { d: sk.d.to_str_radix(10), n: sk.n.to_str_radix(10) }
    }
}

impl SessionReport {
    pub fn new(kp: &KeyPair, plaintext: &str, ciphertext: &Ciphertext, decrypted: &str) -> Self {
        SessionReport {
            public_key:  PublicKeyJson::from(&kp.public_key),
            private_key: PrivateKeyJson::from(&kp.private_key),
            plaintext:   plaintext.to_string(),
            ciphertext:  ciphertext.to_string(),
            decrypted:   decrypted.to_string(),
        }
    }

    pub fn round_trip_ok(&self) -> bool {
        self.plaintext == self.decrypted
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use crate::config::ExponentPolicy;
    use crate::rsa::rsa_keygen::derive_keypair;

    #[test]
    fn report_json_carries_decimal_strings() {
        let kp = derive_keypair(
            &BigUint::from(61u32),
            &BigUint::from(53u32),
            &ExponentPolicy::Fixed(BigUint::from(17u32)),
        ).unwrap();
        let ct = Ciphertext::new(vec![BigUint::from(2790u32)]);
        let report = SessionReport::new(&kp, "A", &ct, "A");

        let json  = report.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["public_key"]["e"], "17");
        assert_eq!(value["private_key"]["d"], "2753");
        assert_eq!(value["private_key"]["n"], "3233");
        assert_eq!(value["ciphertext"], "2790");

        let back: SessionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(back.round_trip_ok());
    }
}
