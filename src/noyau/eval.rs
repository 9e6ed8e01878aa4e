//! Noyau — évaluation (pipeline réel)
//!
//! symboles -> jetons -> RPN -> pile de valeurs -> arrondi 8 décimales
//!
//! Chaque étape rend une valeur ou un `Result` : aucune panique, aucun journal.

use super::erreur::ErreurCalcul;
use super::format::format_resultat;
use super::jetons::{tokenize, Jeton, Operateur};
use super::rpn::to_rpn;
use super::symboles::normaliser_symboles;

/// API publique : évalue une expression et retourne le résultat
/// arrondi à 8 décimales, sous forme décimale canonique.
///
/// Accepte `×` et `÷` en plus des opérateurs ASCII.
pub fn calculer(expr_str: &str) -> Result<String, ErreurCalcul> {
    // 1) Glyphes
    let texte = normaliser_symboles(expr_str);

    // 2) Jetons
    let jetons = tokenize(&texte);

    // 3) RPN
    let rpn = to_rpn(&jetons);

    // 4) Pile de valeurs
    let valeur = evaluer_postfixe(&rpn)?;

    // 5) Arrondi + texte
    Ok(format_resultat(valeur))
}

/// Réduit une suite postfixe à une seule valeur.
///
/// Pour un opérateur : b = dépile, a = dépile, empile `a OP b`.
/// La division suit IEEE-754 (1/0 = inf, 0/0 = NaN).
pub fn evaluer_postfixe(rpn: &[Jeton]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Jeton::Nombre(txt) => {
                let v = txt
                    .parse::<f64>()
                    .map_err(|_| ErreurCalcul::NombreInvalide(txt.clone()))?;
                pile.push(v);
            }

            Jeton::Op(op) => {
                let b = pile.pop().ok_or_else(|| operande_manquant(*op))?;
                let a = pile.pop().ok_or_else(|| operande_manquant(*op))?;
                pile.push(appliquer(*op, a, b)?);
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        [] => Err(ErreurCalcul::malformee("aucune valeur")),
        _ => Err(ErreurCalcul::malformee(format!(
            "{} valeurs sans opérateur pour les combiner",
            pile.len()
        ))),
    }
}

fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    let v = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => a / b,
        Operateur::Puissance => a.powf(b),
        Operateur::ParOuvrante | Operateur::ParFermante => {
            return Err(ErreurCalcul::malformee("parenthèse inattendue en RPN"))
        }
    };
    Ok(v)
}

fn operande_manquant(op: Operateur) -> ErreurCalcul {
    ErreurCalcul::malformee(format!("opérande manquant pour '{}'", op.symbole()))
}
