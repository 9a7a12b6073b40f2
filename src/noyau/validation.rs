// src/noyau/validation.rs
//
// Filtre grossier par classe de caractères, AVANT la tokenisation.
// Aucune grammaire ici : ")(" ou "++" passent, le convertisseur/évaluateur les rejettera.

/// Vrai si chaque caractère est un chiffre ASCII, '.', ou l’un de `+-*/()`.
///
/// L’entrée doit déjà être privée de ses blancs. La chaîne vide passe
/// (elle est rejetée plus loin, faute d’opérande).
pub fn is_valid(expression: &str) -> bool {
    expression.chars().all(est_autorise)
}

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Retire tous les blancs (espaces, tabulations, retours à la ligne).
pub fn sans_blancs(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}
