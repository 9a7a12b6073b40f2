//! Noyau — évaluation (pipeline réel)
//!
//! blancs retirés -> validation -> jetons -> RPN -> valeur
//!
//! Chaque appel est autonome : aucune donnée ne survit entre deux appels,
//! on peut donc appeler `evaluate` depuis plusieurs threads sans coordination.

use std::fmt;

use super::erreur::{ErrorKind, Result};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_postfix, to_postfix};
use super::validation::{is_valid, sans_blancs};

/// Dernière étape franchie avec succès.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Etape {
    #[default]
    Depart,
    Validee,
    Tokenisee,
    Postfixee,
    Evaluee,
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Etape::Depart => "départ (rien de validé)",
            Etape::Validee => "caractères validés",
            Etape::Tokenisee => "jetons lus",
            Etape::Postfixee => "RPN construite",
            Etape::Evaluee => "évaluée",
        };
        f.write_str(s)
    }
}

/// Démarche : sorties intermédiaires d’un appel, pour le débogage et l’affichage.
///
/// Ne fait pas partie du contrat : le résultat ne dépend jamais de son contenu.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub entree: String,
    pub jetons: String,
    pub rpn: String,
    pub etape: Etape,
    pub echec: Option<ErrorKind>,
}

/// API publique : évalue une expression arithmétique.
pub fn evaluate(expression: &str) -> Result<f64> {
    let _span = tracing::debug_span!("evaluate", expression = %expression).entered();

    let res = pipeline(expression, None);
    match res {
        Ok(v) => tracing::debug!(resultat = v, "évaluation terminée"),
        Err(e) => tracing::debug!(erreur = %e, "évaluation refusée"),
    }
    res
}

/// Comme `evaluate`, mais remplit `demarche` étape par étape
/// (y compris quand une étape échoue, on voit jusqu’où on est allé).
pub fn evaluate_traced(expression: &str, demarche: &mut Demarche) -> Result<f64> {
    let _span = tracing::debug_span!("evaluate", expression = %expression).entered();

    *demarche = Demarche::default();
    let res = pipeline(expression, Some(&mut *demarche));

    match res {
        Ok(v) => tracing::debug!(resultat = v, "évaluation terminée"),
        Err(e) => {
            demarche.echec = Some(e);
            tracing::debug!(erreur = %e, etape = %demarche.etape, "évaluation refusée");
        }
    }

    res
}

/// Sans démarche (`None`), aucun texte intermédiaire n’est construit.
fn pipeline(expression: &str, mut d: Option<&mut Demarche>) -> Result<f64> {
    // 0) Blancs
    let s = sans_blancs(expression);
    if let Some(d) = d.as_deref_mut() {
        d.entree.clone_from(&s);
    }

    // 1) Validation (classe de caractères)
    if !is_valid(&s) {
        return Err(ErrorKind::InvalidExpression);
    }
    if let Some(d) = d.as_deref_mut() {
        d.etape = Etape::Validee;
    }

    // 2) Jetons
    let jetons = tokenize(&s)?;
    tracing::trace!(jetons = %format_tokens(&jetons), "jetons");
    if let Some(d) = d.as_deref_mut() {
        d.jetons = format_tokens(&jetons);
        d.etape = Etape::Tokenisee;
    }

    // 3) RPN
    let rpn = to_postfix(&jetons)?;
    tracing::trace!(rpn = %format_tokens(&rpn), "postfix");
    if let Some(d) = d.as_deref_mut() {
        d.rpn = format_tokens(&rpn);
        d.etape = Etape::Postfixee;
    }

    // 4) Valeur
    let v = eval_postfix(&rpn)?;
    if let Some(d) = d {
        d.etape = Etape::Evaluee;
    }

    Ok(v)
}
