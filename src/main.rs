//! Bezier-Draw Replay.
//!
//! Spielt ein JSON-Skript aus Draw-Intents gegen einen aufzeichnenden Host ab
//! und gibt die erzeugten Formen als JSON aus.
//!
//! Aufruf: `bezier-draw-replay <skript.json> [optionen.toml]`

use std::path::{Path, PathBuf};

use anyhow::Context;
use bezier_draw::{
    DrawController, DrawIntent, DrawOptions, DrawSession, LatLng, PlanarView, ViewControl,
    WebMercatorView,
};
use glam::DVec2;
use serde::Deserialize;

/// Ansicht, gegen die das Skript abgespielt wird.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplayView {
    /// Ebene Ansicht, 1 Einheit = 1 Pixel bei Zoom 1
    Planar { width: f64, height: f64 },
    /// Web-Mercator-Karte
    Mercator {
        lat: f64,
        lng: f64,
        zoom: f64,
        width: f64,
        height: f64,
    },
}

impl Default for ReplayView {
    fn default() -> Self {
        Self::Planar {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Inhalt einer Skript-Datei.
#[derive(Debug, Deserialize)]
struct ReplayScript {
    #[serde(default)]
    view: ReplayView,
    intents: Vec<DrawIntent>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Bezier-Draw Replay v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: bezier-draw-replay <skript.json> [optionen.toml]")?;
    let options_path = args.next().map(PathBuf::from).unwrap_or_else(DrawOptions::config_path);

    let options = DrawOptions::load_from_file(&options_path);
    let script = load_script(&script_path)?;

    let output = match script.view {
        ReplayView::Planar { width, height } => {
            let view = PlanarView::new(DVec2::new(width, height));
            replay(options, view, script.intents)?
        }
        ReplayView::Mercator {
            lat,
            lng,
            zoom,
            width,
            height,
        } => {
            let view = WebMercatorView::new(LatLng::new(lat, lng), zoom, DVec2::new(width, height));
            replay(options, view, script.intents)?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_script(path: &Path) -> anyhow::Result<ReplayScript> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Skript konnte nicht gelesen werden: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Skript ist kein gültiges JSON: {}", path.display()))
}

/// Spielt alle Intents ab und liefert die erzeugten Formen als JSON.
fn replay<V: ViewControl>(
    options: DrawOptions,
    view: V,
    intents: Vec<DrawIntent>,
) -> anyhow::Result<String> {
    let mut session = DrawSession::new(options, view);
    let mut controller = DrawController::new();

    let total = intents.len();
    for (index, intent) in intents.into_iter().enumerate() {
        controller
            .handle_intent(&mut session, intent)
            .with_context(|| format!("Intent {} von {} fehlgeschlagen", index + 1, total))?;
    }

    let shapes = session.created_shapes();
    log::info!("{} Intents abgespielt, {} Formen erstellt", total, shapes.len());
    serde_json::to_string_pretty(&shapes).context("Formen konnten nicht serialisiert werden")
}
