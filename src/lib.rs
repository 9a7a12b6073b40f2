//! Calculatrice RPN — bibliothèque
//!
//! Le noyau (`noyau`) évalue une expression arithmétique (`+ - * /`, parenthèses,
//! nombres décimaux signés) et rend un `f64` ou une erreur classée.
//! Les interfaces (fenêtre, console, ligne de commande) vivent dans le binaire.

pub mod noyau;

pub use noyau::{evaluate, evaluate_traced, Demarche, ErrorKind};
