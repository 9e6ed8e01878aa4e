// src/noyau/format.rs

/// Nombre de décimales gardées dans le résultat affiché.
pub const DECIMALES: usize = 8;

/// Arrondi à 8 décimales de la valeur binaire exacte (un seul arrondi).
///
/// Passe par l’écriture décimale `{:.8}` puis la relit. `-0` devient `0`.
pub fn arrondir_8(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let r = format!("{:.*}", DECIMALES, x).parse::<f64>().unwrap_or(x);

    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Forme décimale canonique du résultat arrondi.
///
/// - entier : sans point ("14")
/// - sinon : plus courte écriture exacte, jamais d’exposant ("0.33333333")
/// - non fini : "inf", "-inf", "NaN"
pub fn format_resultat(x: f64) -> String {
    format!("{}", arrondir_8(x))
}
