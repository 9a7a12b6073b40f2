//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : pour un arbre valide, `evaluate(rendu(arbre)) == reference(arbre)`,
//!   au bit près (mêmes opérations f64, même ordre)

use std::time::{Duration, Instant};

use super::{evaluate, ErrorKind};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arbre de référence ------------------------ */

// (texte, valeur) : le texte se relit exactement en cette valeur f64
const LITTERAUX: &[(&str, f64)] = &[
    ("0", 0.0),
    ("1", 1.0),
    ("2", 2.0),
    ("3", 3.0),
    ("7", 7.0),
    ("10", 10.0),
    ("0.5", 0.5),
    ("0.1", 0.1),
    ("2.25", 2.25),
    ("12.75", 12.75),
    ("-1", -1.0),
    ("-4", -4.0),
    ("-0.5", -0.5),
    ("-3.3", -3.3),
];

#[derive(Clone, Copy, Debug)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }
}

#[derive(Debug)]
enum Arbre {
    Lit(usize),
    Bin(Op, Box<Arbre>, Box<Arbre>),
}

fn gen_arbre(rng: &mut Rng, profondeur: u32) -> Arbre {
    if profondeur == 0 || rng.pick(3) == 0 {
        return Arbre::Lit(rng.pick(LITTERAUX.len() as u32) as usize);
    }
    let op = match rng.pick(4) {
        0 => Op::Add,
        1 => Op::Sub,
        2 => Op::Mul,
        _ => Op::Div,
    };
    let a = gen_arbre(rng, profondeur - 1);
    let b = gen_arbre(rng, profondeur - 1);
    Arbre::Bin(op, Box::new(a), Box::new(b))
}

/// Évaluateur de référence (récursif, sur l’arbre).
fn reference(arbre: &Arbre) -> Result<f64, ErrorKind> {
    match arbre {
        Arbre::Lit(i) => Ok(LITTERAUX[*i].1),
        Arbre::Bin(op, a, b) => {
            let va = reference(a)?;
            let vb = reference(b)?;
            match op {
                Op::Add => Ok(va + vb),
                Op::Sub => Ok(va - vb),
                Op::Mul => Ok(va * vb),
                Op::Div => {
                    if vb == 0.0 {
                        Err(ErrorKind::DivideByZero)
                    } else {
                        Ok(va / vb)
                    }
                }
            }
        }
    }
}

fn precedence_noeud(arbre: &Arbre) -> u8 {
    match arbre {
        Arbre::Lit(_) => u8::MAX,
        Arbre::Bin(op, _, _) => op.precedence(),
    }
}

/// Rendu infixe avec le MINIMUM de parenthèses (exerce vraiment les priorités).
/// `parentheses_en_plus` en ajoute parfois là où elles sont inutiles.
fn rendu(arbre: &Arbre, rng: &mut Rng, parentheses_en_plus: bool, out: &mut String) {
    match arbre {
        Arbre::Lit(i) => out.push_str(LITTERAUX[*i].0),
        Arbre::Bin(op, a, b) => {
            let p = op.precedence();

            let par_a = precedence_noeud(a) < p || (parentheses_en_plus && rng.coin());
            // à droite, priorité égale => parenthèses obligatoires (associativité gauche)
            let par_b = precedence_noeud(b) <= p || (parentheses_en_plus && rng.coin());

            rendu_groupe(a, rng, parentheses_en_plus, par_a, out);
            out.push(op.symbole());
            rendu_groupe(b, rng, parentheses_en_plus, par_b, out);
        }
    }
}

fn rendu_groupe(arbre: &Arbre, rng: &mut Rng, plus: bool, parentheses: bool, out: &mut String) {
    if parentheses {
        out.push('(');
        rendu(arbre, rng, plus, out);
        out.push(')');
    } else {
        rendu(arbre, rng, plus, out);
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_compare_a_la_reference() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0x00C0_FFEE);

    let mut divisions_par_zero = 0usize;

    for _ in 0..2000 {
        budget(start, max);

        let arbre = gen_arbre(&mut rng, 5);
        let plus = rng.coin();
        let mut texte = String::new();
        rendu(&arbre, &mut rng, plus, &mut texte);

        let attendu = reference(&arbre);
        let obtenu = evaluate(&texte);

        match (attendu, obtenu) {
            (Ok(a), Ok(o)) => assert!(
                a.to_bits() == o.to_bits() || (a.is_nan() && o.is_nan()),
                "texte={texte:?} attendu={a} obtenu={o}"
            ),
            (Err(ErrorKind::DivideByZero), Err(ErrorKind::DivideByZero)) => {
                divisions_par_zero += 1;
            }
            (a, o) => panic!("texte={texte:?} attendu={a:?} obtenu={o:?}"),
        }
    }

    // le corpus doit aussi exercer le chemin DivideByZero
    assert!(divisions_par_zero > 0);
}

#[test]
fn fuzz_blancs_neutres() {
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        let arbre = gen_arbre(&mut rng, 4);
        let mut texte = String::new();
        rendu(&arbre, &mut rng, false, &mut texte);

        // blancs insérés entre tous les caractères
        let espace: String = texte
            .chars()
            .flat_map(|c| [c, if rng.coin() { ' ' } else { '\t' }])
            .collect();

        assert_eq!(evaluate(&texte), evaluate(&espace), "texte={texte:?}");
    }
}

#[test]
fn fuzz_soupe_de_caracteres_sans_panique() {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', 'é', '^',
    ];

    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..5000 {
        budget(start, max);

        let longueur = rng.pick(16);
        let s: String = (0..longueur)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        // aucune panique, issue classée, et déterministe
        let r1 = evaluate(&s);
        let r2 = evaluate(&s);
        match (r1, r2) {
            (Ok(a), Ok(b)) => assert!(a.to_bits() == b.to_bits(), "s={s:?}"),
            (a, b) => assert_eq!(a, b, "s={s:?}"),
        }
    }
}

#[test]
fn fuzz_imbrication_profonde() {
    // linéaire, pas de récursion : une imbrication profonde passe sans risque de pile
    let n = 10_000;
    let s = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&s), Ok(1.0));

    let s = format!("{}1{}", "(".repeat(n), ")".repeat(n - 1));
    assert_eq!(evaluate(&s), Err(ErrorKind::InvalidExpression));

    let longue = vec!["1"; 20_000].join("+");
    assert_eq!(evaluate(&longue), Ok(20_000.0));
}
