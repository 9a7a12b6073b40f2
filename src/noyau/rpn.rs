// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN avec une pile d’opérandes
//
// Règles:
// - Associativité gauche partout : à précédence égale, l’opérateur déjà empilé sort d’abord.
// - Pas de moins unaire ici : le signe est déjà collé au nombre par jetons.rs.
// - Les piles sont des Vec (push/pop en queue).

use super::erreur::{ErrorKind, Result};
use super::jetons::{Operator, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Op(+), Num(2), Op(*), Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Op(*), Op(+)]
///
/// Échoue (sans sortie partielle) sur un groupe vide ou une parenthèse orpheline.
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::EmptyGroup => {
                tracing::debug!("groupe vide");
                return Err(ErrorKind::InvalidExpression);
            }

            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                // dépile tant que le sommet est un opérateur au moins aussi prioritaire
                while let Some(&Tok::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vidée sans la trouver => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => {
                            tracing::debug!("parenthèse fermante sans ouvrante");
                            return Err(ErrorKind::InvalidExpression);
                        }
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if top == Tok::LPar {
            tracing::debug!("parenthèse ouvrante non fermée");
            return Err(ErrorKind::InvalidExpression);
        }
        out.push(top);
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// L’opérande le plus récemment empilé est celui de DROITE.
/// À la fin, la pile doit contenir exactement une valeur.
pub fn eval_postfix(rpn: &[Tok]) -> Result<f64> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match *tok {
            Tok::Num(n) => st.push(n),

            Tok::Op(op) => {
                // b d’abord : c’est l’opérande de droite
                let (Some(b), Some(a)) = (st.pop(), st.pop()) else {
                    tracing::debug!(operateur = %op.symbole(), "opérandes manquants");
                    return Err(ErrorKind::InvalidExpression);
                };

                let v = applique(op, a, b)?;
                tracing::trace!(gauche = a, operateur = %op.symbole(), droite = b, resultat = v, "opération");
                st.push(v);
            }

            Tok::LPar | Tok::RPar | Tok::EmptyGroup => {
                tracing::debug!(jeton = ?tok, "jeton inattendu en RPN");
                return Err(ErrorKind::InvalidExpression);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => {
            tracing::debug!(pile = st.len(), "pile finale différente d’une valeur");
            Err(ErrorKind::InvalidExpression)
        }
    }
}

fn applique(op: Operator, a: f64, b: f64) -> Result<f64> {
    match op {
        Operator::Plus => Ok(a + b),
        Operator::Minus => Ok(a - b),
        Operator::Star => Ok(a * b),
        Operator::Slash => {
            if b == 0.0 {
                return Err(ErrorKind::DivideByZero);
            }
            Ok(a / b)
        }
    }
}
