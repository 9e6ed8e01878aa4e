//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, erreur, historique, réglages)
//! et offrir des opérations simples (C, saisie, bascules) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : historique borné.

use serde::{Deserialize, Serialize};

/// Garde-fou : au-delà, les plus anciennes entrées sont oubliées.
pub const HISTORIQUE_MAX: usize = 500;

/// Séparateur entre deux entrées du panneau historique.
pub const SEPARATEUR_HISTORIQUE: &str = "─────────────";

/// Réglages persistés entre deux lancements (stockage eframe).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub mode_sombre: bool,
    pub historique_visible: bool,
}

/// Une évaluation réussie : `expression=` puis `resultat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage (entrée + résultat) ---
    pub entree: String,

    // --- sorties ---
    pub erreur: String, // message d’erreur (vide si aucune)
    pub historique: Vec<EntreeHistorique>,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’affichage après un clic sur un bouton.
    pub focus_entree: bool,
    // Thème effectivement posé sur le contexte egui (None = pas encore).
    pub theme_applique: Option<bool>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            erreur: String::new(),
            historique: Vec::new(),
            reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            theme_applique: None,
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// C : effacer l’affichage (et l’erreur affichée dessous).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Chiffres, point, opérateurs, parenthèses : ajout en fin d’affichage.
    pub fn ajouter_texte(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE l’affichage pour que l’utilisateur corrige sa saisie.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat (affichage := résultat) + l’ajouter à l’historique.
    pub fn set_resultat(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        let resultat = resultat.into();

        self.erreur.clear();
        self.entree = resultat.clone();
        self.historique.push(EntreeHistorique {
            expression: expression.into(),
            resultat,
        });

        if self.historique.len() > HISTORIQUE_MAX {
            let surplus = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..surplus);
        }

        self.focus_entree = true;
    }

    pub fn vider_historique(&mut self) {
        self.historique.clear();
    }

    pub fn basculer_mode_sombre(&mut self) {
        self.reglages.mode_sombre = !self.reglages.mode_sombre;
    }

    pub fn basculer_historique(&mut self) {
        self.reglages.historique_visible = !self.reglages.historique_visible;
    }

    /// Texte du panneau historique (une entrée = `expr=`, `résultat`, séparateur).
    pub fn historique_texte(&self) -> String {
        let mut out = String::new();
        for e in &self.historique {
            out.push_str(&e.expression);
            out.push_str("=\n");
            out.push_str(&e.resultat);
            out.push('\n');
            out.push_str(SEPARATEUR_HISTORIQUE);
            out.push('\n');
        }
        out
    }
}
