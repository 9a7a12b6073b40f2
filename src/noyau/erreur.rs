// src/noyau/erreur.rs

/// Les deux seules issues d’échec du noyau.
///
/// La première erreur rencontrée arrête le pipeline : pas de résultat partiel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// Problème de structure : caractère interdit, parenthèses, opérandes, entrée vide…
    #[error("expression invalide")]
    InvalidExpression,

    /// Division dont l’opérande de droite vaut exactement zéro.
    #[error("division par zéro")]
    DivideByZero,
}

pub type Result<T> = std::result::Result<T, ErrorKind>;
