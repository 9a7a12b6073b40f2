// src/console.rs
//
// Modes texte : un calcul unique (`--expr`) ou une boucle ligne par ligne (`--console`).
// Tout passe par noyau::evaluate_traced ; ici on ne fait que lire, écrire, traduire.

use std::io::{self, BufRead, Write};

use calculatrice_rpn::{evaluate_traced, Demarche};

const INVITE: &str = "Expression : ";
pub const COMMANDE_SORTIE: &str = "exit";

fn ecrire_demarche<W: Write>(sortie: &mut W, d: &Demarche) -> io::Result<()> {
    writeln!(sortie, "  entrée : {}", d.entree)?;
    writeln!(sortie, "  jetons : {}", d.jetons)?;
    writeln!(sortie, "  RPN    : {}", d.rpn)?;
    writeln!(sortie, "  étape  : {}", d.etape)
}

/// Un seul calcul. Rend `Ok(true)` si l’expression a donné une valeur.
pub fn une_fois<W: Write, E: Write>(
    expression: &str,
    demarche: bool,
    sortie: &mut W,
    erreurs: &mut E,
) -> io::Result<bool> {
    let mut d = Demarche::default();
    let res = evaluate_traced(expression, &mut d);

    if demarche {
        ecrire_demarche(erreurs, &d)?;
    }

    match res {
        Ok(v) => {
            writeln!(sortie, "{v}")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(erreurs, "erreur: {e}")?;
            Ok(false)
        }
    }
}

/// Boucle console : une expression par ligne, "exit" ou fin de flux pour quitter.
/// Les lignes vides sont ignorées.
pub fn boucle<R: BufRead, W: Write>(entree: R, sortie: &mut W, demarche: bool) -> io::Result<()> {
    let mut lignes = entree.lines();

    loop {
        write!(sortie, "{INVITE}")?;
        sortie.flush()?;

        let Some(ligne) = lignes.next() else {
            writeln!(sortie)?;
            tracing::info!("fin de l’entrée standard");
            return Ok(());
        };
        let ligne = ligne?;
        let ligne = ligne.trim();

        if ligne == COMMANDE_SORTIE {
            tracing::info!("commande de sortie reçue");
            return Ok(());
        }
        if ligne.is_empty() {
            continue;
        }

        let mut d = Demarche::default();
        match evaluate_traced(ligne, &mut d) {
            Ok(v) => writeln!(sortie, "= {v}")?,
            Err(e) => writeln!(sortie, "erreur: {e}")?,
        }
        if demarche {
            ecrire_demarche(sortie, &d)?;
        }
    }
}
