// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (comme "=")
// - Pavé 5×4 : C ( ) ^ / 7 8 9 ÷ / 4 5 6 × / 1 2 3 - / 0 . = +
// - Panneau historique à droite (fenêtre élargie quand il est visible)

use eframe::egui;

use calculatrice_basique::noyau::{self, jetons, symboles};

use super::etat::AppCalc;
use super::{HAUTEUR, LARGEUR_BASE, LARGEUR_ETENDUE};

/// Pavé, ligne par ligne (4 colonnes).
pub const PAVE: [&str; 20] = [
    "C", "(", ")", "^", //
    "7", "8", "9", "÷", //
    "4", "5", "6", "×", //
    "1", "2", "3", "-", //
    "0", ".", "=", "+",
];

const COULEUR_CONTROLE: egui::Color32 = egui::Color32::from_rgb(0x55, 0x55, 0x55);
const COULEUR_OPERATEUR: egui::Color32 = egui::Color32::from_rgb(0xff, 0x95, 0x00);
const COULEUR_CHIFFRE: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);

fn couleur_touche(touche: &str) -> egui::Color32 {
    match touche {
        "C" | "(" | ")" | "^" => COULEUR_CONTROLE,
        "÷" | "×" | "-" | "+" | "=" => COULEUR_OPERATEUR,
        _ => COULEUR_CHIFFRE,
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...), dans le panneau central.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);

        self.ui_affichage(ui);
        self.ui_barre(ui);
        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Panneau historique (lecture seule, défile vers le bas).
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Historique");
            if ui.small_button("Copier").clicked() {
                ui.ctx().copy_text(self.historique_texte());
            }
            if ui.small_button("Vider").clicked() {
                self.vider_historique();
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for e in &self.historique {
                    ui.monospace(format!("{}=", e.expression));
                    ui.monospace(&e.resultat);
                    ui.separator();
                }
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add_sized(
            [ui.available_width(), 80.0],
            egui::TextEdit::singleline(&mut self.entree)
                .font(egui::FontId::proportional(24.0))
                .horizontal_align(egui::Align::RIGHT)
                .id_salt("affichage"),
        );

        // Si on a cliqué un bouton, on redonne le focus à l’affichage
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (le champ perd le focus sur Enter) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.evaluer();
        }
    }

    fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let largeur = ui.available_width() - 60.0;
            if ui
                .add_sized([largeur, 50.0], egui::Button::new("Basculer le mode sombre"))
                .clicked()
            {
                self.basculer_mode_sombre();
                tracing::info!(mode_sombre = self.reglages.mode_sombre, "thème basculé");
            }

            let icone = if self.reglages.historique_visible { "⏴" } else { "🕘" };
            let resp = ui
                .add_sized([50.0, 50.0], egui::Button::new(icone))
                .on_hover_text("Historique");
            if resp.clicked() {
                self.basculer_historique();
                let largeur = if self.reglages.historique_visible {
                    LARGEUR_ETENDUE
                } else {
                    LARGEUR_BASE
                };
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(largeur, HAUTEUR)));
                tracing::info!(
                    visible = self.reglages.historique_visible,
                    "panneau historique basculé"
                );
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, touche) in PAVE.iter().enumerate() {
                    self.bouton_touche(ui, touche);
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, touche: &str) {
        let texte = egui::RichText::new(touche)
            .size(18.0)
            .color(egui::Color32::WHITE);
        let resp = ui.add_sized(
            [70.0, 70.0],
            egui::Button::new(texte).fill(couleur_touche(touche)),
        );
        if resp.clicked() {
            self.appuyer_touche(touche);
        }
    }

    /// Effet d’une touche du pavé : "=" évalue, "C" efface, le reste s’ajoute.
    pub fn appuyer_touche(&mut self, touche: &str) {
        match touche {
            "=" => self.evaluer(),
            "C" => self.clear_entree(),
            _ => self.ajouter_texte(touche),
        }
    }

    /// Évalue l’affichage via le noyau, puis dépose résultat ou erreur dans l’état UI.
    pub fn evaluer(&mut self) {
        let expression = self.entree.clone();

        match noyau::calculer(&expression) {
            Ok(resultat) => {
                tracing::debug!(
                    %expression,
                    jetons = %jetons::format_tokens(&jetons::tokenize(
                        &symboles::normaliser_symboles(&expression)
                    )),
                    %resultat,
                    "évaluation"
                );
                self.set_resultat(expression, resultat);
            }
            Err(e) => {
                tracing::warn!(%expression, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }
}
