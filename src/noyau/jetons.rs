// src/noyau/jetons.rs

use super::erreur::{ErrorKind, Result};

/// Les quatre opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
        }
    }

    /// `*` et `/` lient plus fort que `+` et `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::Star | Operator::Slash => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operator),

    LPar,
    RPar,

    // "()" : groupe vide, toujours refusé par le convertisseur
    EmptyGroup,
}

/// Tokenize une chaîne SANS blancs en jetons.
/// Supporte:
/// - nombres `123` et `12.5` (chiffres obligatoires des deux côtés du point)
/// - signe `-` collé au nombre, seulement en position de signe :
///   début d’expression, juste après '(' ou juste après un opérateur
/// - opérateurs + - * /
/// - parenthèses ( ), et le groupe vide "()"
///
/// Tout caractère qui ne commence pas un jeton valide arrête la lecture
/// avec `InvalidExpression` (rien n’est ignoré en silence).
pub fn tokenize(s: &str) -> Result<Vec<Tok>> {
    let chars: Vec<char> = s.chars().collect();
    let mut out: Vec<Tok> = Vec::with_capacity(chars.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Parenthèses (et groupe vide)
        if c == '(' {
            if chars.get(i + 1) == Some(&')') {
                out.push(Tok::EmptyGroup);
                i += 2;
            } else {
                out.push(Tok::LPar);
                i += 1;
            }
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Nombre signé : "-3" au début, après '(' ou après un opérateur
        if c == '-'
            && position_de_signe(out.last())
            && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit())
        {
            let fin = fin_de_nombre(&chars, i + 1)?;
            out.push(Tok::Num(lire_nombre(&chars[i..fin])?));
            i = fin;
            continue;
        }

        // Opérateurs
        if let Some(op) = Operator::from_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Nombre
        if c.is_ascii_digit() {
            let fin = fin_de_nombre(&chars, i)?;
            out.push(Tok::Num(lire_nombre(&chars[i..fin])?));
            i = fin;
            continue;
        }

        tracing::debug!(position = i, caractere = %c, "caractère sans jeton");
        return Err(ErrorKind::InvalidExpression);
    }

    Ok(out)
}

/// Un '-' ne peut être un signe qu’en tête, après '(' ou après un opérateur.
fn position_de_signe(precedent: Option<&Tok>) -> bool {
    matches!(precedent, None | Some(Tok::LPar) | Some(Tok::Op(_)))
}

/// Avance sur `chiffres ( '.' chiffres )?` à partir de `debut` (qui est un chiffre).
/// Un point sans chiffre derrière ("1.", "1.+2") est une erreur.
fn fin_de_nombre(chars: &[char], debut: usize) -> Result<usize> {
    let mut i = debut;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let debut_frac = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == debut_frac {
            tracing::debug!(position = i, "point décimal sans chiffres");
            return Err(ErrorKind::InvalidExpression);
        }
    }

    Ok(i)
}

fn lire_nombre(texte: &[char]) -> Result<f64> {
    let s: String = texte.iter().collect();
    s.parse::<f64>().map_err(|_| ErrorKind::InvalidExpression)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::EmptyGroup => "()".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
