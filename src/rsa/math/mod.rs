// Réexporte l'arithmétique modulaire du moteur

mod math;

pub use math::{gcd, mod_exp, mod_inverse};
