// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB) + persistance des réglages

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Reglages;

/// Géométrie de la fenêtre (px logiques).
pub const LARGEUR_BASE: f32 = 350.0;
pub const LARGEUR_ETENDUE: f32 = 550.0;
pub const HAUTEUR: f32 = 620.0;

/// Largeur du panneau historique.
const LARGEUR_HISTORIQUE: f32 = 200.0;

impl AppCalc {
    /// Construit l’état en relisant les réglages sauvegardés (s’il y en a).
    pub fn depuis_stockage(storage: Option<&dyn eframe::Storage>) -> Self {
        let reglages: Reglages = storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();
        tracing::info!(?reglages, "réglages chargés");
        Self::avec_reglages(reglages)
    }

    /// Pose le thème sur le contexte seulement quand il change.
    fn appliquer_theme(&mut self, ctx: &egui::Context) {
        let sombre = self.reglages.mode_sombre;
        if self.theme_applique == Some(sombre) {
            return;
        }
        ctx.set_visuals(if sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.theme_applique = Some(sombre);
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer l’affichage (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        self.appliquer_theme(ctx);

        // Panneau latéral AVANT le panneau central.
        if self.reglages.historique_visible {
            egui::SidePanel::right("panneau_historique")
                .resizable(false)
                .exact_width(LARGEUR_HISTORIQUE)
                .show(ctx, |ui| {
                    self.ui_historique(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.reglages);
    }
}
