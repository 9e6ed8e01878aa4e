// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau (énumération fermée).
///
/// Le noyau ne journalise rien : il rend l’erreur, l’appelant l’affiche.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Pile de valeurs incohérente : opérande manquant, parenthèse égarée,
    /// ou profondeur finale ≠ 1.
    #[error("expression malformée : {0}")]
    ExpressionMalformee(String),

    /// Texte d’un jeton nombre non convertible en flottant.
    #[error("nombre invalide : '{0}'")]
    NombreInvalide(String),
}

impl ErreurCalcul {
    pub(crate) fn malformee(raison: impl Into<String>) -> Self {
        Self::ExpressionMalformee(raison.into())
    }
}
