//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - Pas de moins unaire : "-3" est malformée, "0-3" ne l’est pas.
//! - '^' est associatif à gauche : 2^3^2 = (2^3)^2.
//! - Résultats arrondis à 8 décimales, sans exposant.

use std::time::{Duration, Instant};

use super::calculer;
use super::erreur::ErreurCalcul;

fn eval_ok(expr: &str) -> String {
    calculer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_eq_calc(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_malformee(expr: &str) {
    assert!(
        matches!(calculer(expr), Err(ErreurCalcul::ExpressionMalformee(_))),
        "attendu ExpressionMalformee pour expr={expr:?}, obtenu {:?}",
        calculer(expr)
    );
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Propriétés de référence ------------------------ */

#[test]
fn sci_proprietes_de_reference() {
    assert_eq_calc("2+3*4", "14");
    assert_eq_calc("(2+3)*4", "20");
    assert_eq_calc("2^3^2", "64");
    assert_eq_calc("10-3", "7");
    assert_eq_calc("10/4", "2.5");
    assert_eq_calc("6×7", "42");
    assert_eq_calc("8÷2", "4");
    assert_eq_calc(".5+.5", "1");
    assert_eq_calc("1/3", "0.33333333");

    assert_malformee("1.2.3");
    assert_malformee("+5");
    assert_malformee("5+");
    assert_malformee("");
}

/* ------------------------ Invariants algébriques ------------------------ */

#[test]
fn sci_glyphes_equivalents_ascii() {
    for (ascii, local) in [
        ("12*3/4", "12×3÷4"),
        ("(1+2)*(3-4)/5", "(1+2)×(3-4)÷5"),
        ("2^10/1024", "2^10÷1024"),
    ] {
        assert_eq!(calculer(ascii), calculer(local), "{ascii} vs {local}");
    }
}

#[test]
fn sci_espaces_indifferents() {
    assert_eq!(calculer("1+2*3"), calculer(" 1 + 2 * 3 "));
    assert_eq!(calculer("(4-1)^2"), calculer("( 4 - 1 ) ^ 2"));
}

#[test]
fn sci_parentheses_neutres() {
    assert_eq_calc("((2))", "2");
    assert_eq_calc("(((1+2)))*3", "9");
    assert_eq_calc("2*(3)+4", "10");
    assert_eq_calc("2+(3)*4", "14");
}

#[test]
fn sci_zero_flottant() {
    // bruit flottant absorbé par l’arrondi
    assert_eq_calc("0.1+0.2-0.3", "0");
    assert_eq_calc("1/3*3", "1");
    assert_eq_calc("(1/3+1/3+1/3)-1", "0");
}

#[test]
fn sci_arrondi_idempotent() {
    // relire un résultat positif redonne le même texte
    for expr in ["1/3", "2/3", "22/7", "10/4", "2^0.5", "1/8"] {
        let r = eval_ok(expr);
        assert_eq!(eval_ok(&r), r, "expr={expr:?}");
    }
}

#[test]
fn sci_pas_de_moins_unaire() {
    assert_malformee("-3");
    assert_malformee("2*-3");
    assert_eq_calc("0-3", "-3");
    assert_eq_calc("2*(0-3)", "-6");
}

#[test]
fn sci_puissances() {
    assert_eq_calc("2^10", "1024");
    assert_eq_calc("4^0.5", "2");
    assert_eq_calc("2^0", "1");
    assert_eq_calc("2^(0-1)", "0.5");
    // base négative, exposant fractionnaire : NaN (pas d’erreur)
    assert_eq_calc("(0-8)^(1/3)", "NaN");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..2_000 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    // 2000*0.5 = 1000
    assert_eq_calc(&expr, "1000");
}

#[test]
fn sci_stress_grands_nombres_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 400 chiffres : au-delà de f64::MAX => inf, sans gel
    let big = "9".repeat(400);
    budget(t0, max);
    assert_eq_calc(&big, "inf");

    let expr = format!("{}/{}", "9".repeat(30), "9".repeat(30));
    assert_eq_calc(&expr, "1");
}
