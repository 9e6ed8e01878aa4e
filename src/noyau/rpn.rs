// src/noyau/rpn.rs
//
// Infixe -> RPN (postfixe) par paires de précédences ICP/ISP.
//
// Règle unique :
// - pile vide ou ISP[sommet] < ICP[entrant] => on empile
// - sinon on dépile le sommet vers la sortie et on recommence
//
// Les parenthèses ne sont jamais évaluées : elles perturbent seulement
// la comparaison, puis disparaissent de la sortie.

use super::jetons::{Jeton, Operateur};

/// Précédence d’un opérateur ENTRANT (input comparison precedence).
pub const fn icp(op: Operateur) -> u8 {
    match op {
        Operateur::ParOuvrante => 7,
        Operateur::Puissance => 6,
        Operateur::Fois | Operateur::Divise => 4,
        Operateur::Plus | Operateur::Moins => 2,
        Operateur::ParFermante => 1,
    }
}

/// Précédence d’un opérateur déjà SUR LA PILE (in-stack precedence).
///
/// ISP >= ICP pour un même palier => associativité à gauche,
/// y compris pour '^' : 2^3^2 = (2^3)^2.
pub const fn isp(op: Operateur) -> u8 {
    match op {
        Operateur::Puissance => 6,
        Operateur::Fois | Operateur::Divise => 5,
        Operateur::Plus | Operateur::Moins => 3,
        Operateur::ParOuvrante | Operateur::ParFermante => 1,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
///
/// N’échoue jamais : une suite mal formée est détectée à l’évaluation.
pub fn to_rpn(tokens: &[Jeton]) -> Vec<Jeton> {
    let mut sortie: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut pile: Vec<Operateur> = Vec::new();

    for tok in tokens {
        let entrant = match tok {
            Jeton::Nombre(_) => {
                sortie.push(tok.clone());
                continue;
            }
            Jeton::Op(op) => *op,
        };

        let mut fermee = false;
        while let Some(&sommet) = pile.last() {
            if isp(sommet) < icp(entrant) {
                break;
            }
            pile.pop();

            // ')' qui rencontre sa '(' : la paire s’annule, le vidage s’arrête là
            if entrant == Operateur::ParFermante && sommet == Operateur::ParOuvrante {
                fermee = true;
                break;
            }
            sortie.push(Jeton::Op(sommet));
        }

        // ')' sans '(' correspondante : ignorée (les parenthèses sortent de toute façon)
        if !fermee && entrant != Operateur::ParFermante {
            pile.push(entrant);
        }
    }

    // vide la pile (dernier empilé en premier)
    while let Some(op) = pile.pop() {
        sortie.push(Jeton::Op(op));
    }

    // aucune parenthèse en sortie
    sortie.retain(|t| !matches!(t, Jeton::Op(op) if op.est_parenthese()));
    sortie
}
