//! Noyau : évaluateur d’expressions arithmétiques
//!
//! Organisation interne :
//! - erreur.rs     : ErrorKind (InvalidExpression / DivideByZero)
//! - validation.rs : filtre par classe de caractères
//! - jetons.rs     : tokenisation (signe collé au nombre, groupe vide)
//! - rpn.rs        : shunting-yard + évaluation de la RPN
//! - eval.rs       : pipeline complet + démarche

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod validation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErrorKind;
pub use eval::{evaluate, evaluate_traced, Demarche, Etape};
