// =========================================================
// Démonstration RSA — génération de clés, chiffrement et
// déchiffrement d'une ligne de texte, caractère par caractère
// =========================================================

use clap::Parser;
use log::{info, warn};
use num_bigint::BigUint;
use std::io::{self, BufRead};
use std::process::ExitCode;

use rand_core::OsRng;

use rsa_crypto::{
    rsa_keygen_retrying, rsa_encrypt, rsa_decrypt,
    Ciphertext, CryptoError, ExponentPolicy, KeyPair, KeygenConfig, PrimeRange, SessionReport,
    DEFAULT_MR_ROUNDS,
};

// Tentatives de génération quand e et φ(n) ne sont pas premiers entre eux
// (possible uniquement avec un exposant imposé)
const KEYGEN_ATTEMPTS: u32 = 8;

// ─────────────────────────────────────────────────────────
// Arguments
// ─────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Démonstration RSA : clés, chiffrement et déchiffrement d'une ligne de texte")]
struct Cli {
    /// Borne basse de l'intervalle de p
    #[arg(long, default_value = "50", conflicts_with = "bits")]
    p_min: BigUint,

    /// Borne haute de l'intervalle de p
    #[arg(long, default_value = "100", conflicts_with = "bits")]
    p_max: BigUint,

    /// Borne basse de l'intervalle de q
    #[arg(long, default_value = "100", conflicts_with = "bits")]
    q_min: BigUint,

    /// Borne haute de l'intervalle de q
    #[arg(long, default_value = "150", conflicts_with = "bits")]
    q_max: BigUint,

    /// Taille du module en bits (p et q tirés sur bits/2 bits chacun)
    #[arg(long)]
    bits: Option<u64>,

    /// Rounds Miller-Rabin
    #[arg(long, default_value_t = DEFAULT_MR_ROUNDS)]
    rounds: u32,

    /// Exposant public : "smallest" ou une valeur imposée (ex. 65537)
    #[arg(long, default_value = "smallest")]
    exponent: ExponentPolicy,

    /// Texte à chiffrer (sinon une ligne lue sur l'entrée standard)
    #[arg(short, long)]
    message: Option<String>,

    /// Rapport JSON au lieu de la sortie texte
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn keygen_config(&self) -> Result<KeygenConfig, CryptoError> {
        let base = match self.bits {
            Some(bits) => KeygenConfig::with_bits(bits)?,
            None => KeygenConfig {
                p_range: PrimeRange::new(self.p_min.clone(), self.p_max.clone())?,
                q_range: PrimeRange::new(self.q_min.clone(), self.q_max.clone())?,
                ..KeygenConfig::default()
            },
        };
        Ok(KeygenConfig {
            rounds:   self.rounds,
            exponent: self.exponent.clone(),
            ..base
        })
    }
}

// ─────────────────────────────────────────────────────────
// Erreur applicative centrale
// ─────────────────────────────────────────────────────────

#[derive(Debug)]
enum AppError {
    Crypto(CryptoError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Crypto(e) => write!(f, "Erreur cryptographique : {}", e),
            AppError::Io(e)     => write!(f, "Erreur I/O : {}", e),
            AppError::Json(e)   => write!(f, "Erreur JSON : {}", e),
        }
    }
}

impl From<CryptoError> for AppError {
    fn from(e: CryptoError) -> Self { AppError::Crypto(e) }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self { AppError::Io(e) }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self { AppError::Json(e) }
}

// ─────────────────────────────────────────────────────────
// Point d'entrée
// ─────────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERREUR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config  = cli.keygen_config()?;
    let keypair = generer_cles(&config)?;

    let plaintext = match &cli.message {
        Some(message) => message.clone(),
        None => lire_ligne()?,
    };

    let ciphertext = rsa_encrypt(&plaintext, &keypair.public_key)?;

    // Passage par la forme textuelle, comme le ferait un destinataire
    let transmis  = ciphertext.to_string();
    let recu: Ciphertext = transmis.parse()?;
    let decrypted = rsa_decrypt(&recu, &keypair.private_key)?;

    let report = SessionReport::new(&keypair, &plaintext, &ciphertext, &decrypted);
    if !report.round_trip_ok() {
        warn!("le texte déchiffré diffère du texte d'origine");
    }

    if cli.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        afficher_rapport(&report);
    }
    Ok(())
}

fn generer_cles(config: &KeygenConfig) -> Result<KeyPair, CryptoError> {
    let (kp, attempt) = rsa_keygen_retrying(config, KEYGEN_ATTEMPTS, &mut OsRng)?;
    info!("paire de clés générée (tentative {attempt}), |n| = {} bits", kp.modulus().bits());
    Ok(kp)
}

// Une ligne de l'entrée standard, sans le saut de ligne final
fn lire_ligne() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

fn afficher_rapport(report: &SessionReport) {
    println!("Génération des clés RSA :");
    println!("Clé publique (e, n) : {}, {}", report.public_key.e, report.public_key.n);
    println!("Clé privée (d, n) : {}, {}", report.private_key.d, report.private_key.n);
    println!("Texte d'origine : {}", report.plaintext);
    println!("Texte chiffré : {}", report.ciphertext);
    println!("Texte déchiffré : {}", report.decrypted);
}
