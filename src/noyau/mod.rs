//! Noyau d’évaluation arithmétique (flottant, sans état)
//!
//! Organisation interne :
//! - symboles.rs : glyphes localisés (÷ ×) -> ASCII
//! - jetons.rs   : tokenisation
//! - rpn.rs      : infixe -> postfixe (précédences ICP/ISP)
//! - eval.rs     : pile de valeurs + pipeline complet
//! - format.rs   : arrondi 8 décimales + texte
//! - erreur.rs   : erreurs du noyau

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod symboles;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::calculer;
