//! Calculatrice basique : noyau d’évaluation réutilisable.
//!
//! L’interface (eframe) vit dans le binaire et n’appelle que `noyau::calculer`.

pub mod noyau;
