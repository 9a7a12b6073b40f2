// src/main.rs
//
// Calculatrice RPN — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------
// NATIF : ligne de commande (clap) puis
//   - `--expr`    : un calcul, résultat sur stdout
//   - `--console` : boucle ligne par ligne sur stdin
//   - `--serveur` : service HTTP (axum sur un runtime tokio)
//   - sinon       : fenêtre eframe::run_native
// WEB (wasm32) : eframe::WebRunner sur <canvas id="the_canvas_id">
//
// Le journal (tracing) écrit sur stderr : stdout reste propre pour `--expr`.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod config;
#[cfg(not(target_arch = "wasm32"))]
mod console;
#[cfg(not(target_arch = "wasm32"))]
mod serveur;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice RPN";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::io;

    use clap::Parser;
    use eframe::egui;

    use config::Config;

    let config = Config::parse();
    installer_journal(&config);

    if let Some(expr) = config.expr.as_deref() {
        let ok = console::une_fois(expr, config.demarche, &mut io::stdout(), &mut io::stderr())?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    if config.console {
        tracing::info!("mode console");
        console::boucle(io::stdin().lock(), &mut io::stdout(), config.demarche)?;
        return Ok(());
    }

    if config.serveur {
        tracing::info!(port = config.port, "mode serveur");
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(serveur::servir(config.port));
    }

    tracing::info!("mode fenêtre");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 620.0])
            .with_min_inner_size([360.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
    .map_err(|e| anyhow::anyhow!("démarrage de la fenêtre impossible: {e}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(config: &config::Config) {
    use tracing_subscriber::EnvFilter;

    let rust_log = std::env::var("RUST_LOG").ok();
    let filtre = config.filtre_journal(rust_log.as_deref());
    let filter = EnvFilter::try_new(&filtre).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(filtre = %filtre, "journal installé");
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

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
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
