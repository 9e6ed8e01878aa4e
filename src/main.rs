// src/main.rs
//
// Calculatrice basique — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions + journal tracing
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : l’index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Le noyau (lib) ne dépend de rien ici : l’UI n’appelle que noyau::calculer.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::{AppCalc, HAUTEUR, LARGEUR_BASE, LARGEUR_ETENDUE};

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice basique";

/// Création de l’app (natif + web) : réglages relus + fenêtre élargie si l’historique était ouvert.
fn creer_app(cc: &eframe::CreationContext<'_>) -> AppCalc {
    let app = AppCalc::depuis_stockage(cc.storage);
    if app.reglages.historique_visible {
        cc.egui_ctx
            .send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                LARGEUR_ETENDUE,
                HAUTEUR,
            )));
    }
    app
}

/* ------------------------ Journal (natif) ------------------------ */

/// RUST_LOG pilote le filtre (défaut : info).
#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filtre).init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([LARGEUR_BASE, HAUTEUR])
            .with_min_inner_size([LARGEUR_BASE, HAUTEUR])
            .with_max_inner_size([LARGEUR_ETENDUE, HAUTEUR]),
        ..Default::default()
    };

    tracing::info!("démarrage de {TITRE_APP}");

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| Ok(Box::new(creer_app(cc)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{creer_app, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(creer_app(cc)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
