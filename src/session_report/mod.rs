pub mod session_report;

pub use session_report::{PublicKeyJson, PrivateKeyJson, SessionReport};
