//! Zentrale Konfiguration für das Bezier-Zeichen-Tool.
//!
//! `DrawOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::bezier_geometry::CurveParams;
use super::locale::DrawLocale;
use crate::core::{DistancePrecision, DistanceUnits};

// ── Guide ───────────────────────────────────────────────────────────

/// Abstand der Guide-Striche in Screen-Pixeln.
pub const GUIDELINE_DISTANCE_PX: f64 = 20.0;
/// Maximal gezeichnete Guide-Länge in Screen-Pixeln.
pub const MAX_GUIDE_LINE_LENGTH_PX: f64 = 4000.0;

// ── Fehler-Feedback ─────────────────────────────────────────────────

/// Farbe für Pfad und Guide während eines Fehlers.
pub const DRAW_ERROR_COLOR: &str = "#b00b00";
/// Anzeigedauer eines Fehlers in Millisekunden.
pub const DRAW_ERROR_TIMEOUT_MS: u64 = 2500;

// ── Form-Stil ───────────────────────────────────────────────────────

/// Standard-Strichfarbe.
pub const SHAPE_COLOR: &str = "#3388ff";
/// Standard-Strichstärke in Pixeln.
pub const SHAPE_WEIGHT: f64 = 4.0;
/// Standard-Deckkraft des Strichs.
pub const SHAPE_OPACITY: f64 = 0.5;

// ── Eingabe ─────────────────────────────────────────────────────────

/// Maximale Maus-Bewegung zwischen Drücken und Loslassen, die noch als Klick gilt.
pub const DRAG_TOLERANCE_PX: f64 = 9.0;
/// Touch-Abstand zum letzten Vertex, ab dem ein Tap die Form abschließt.
pub const TOUCH_FINISH_TOLERANCE_PX: f64 = 10.0;
/// Sperrzeit für neue Vertices nach einem Loslassen.
pub const MARKER_REENABLE_DELAY_MS: u64 = 50;

/// Stil der gezeichneten Form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    /// Strich zeichnen
    pub stroke: bool,
    /// Strichfarbe (CSS-Hex)
    pub color: String,
    /// Strichstärke in Pixeln
    pub weight: f64,
    /// Deckkraft des Strichs
    pub opacity: f64,
    /// Fläche füllen
    pub fill: bool,
    /// Form ist anklickbar
    pub clickable: bool,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: true,
            color: SHAPE_COLOR.to_string(),
            weight: SHAPE_WEIGHT,
            opacity: SHAPE_OPACITY,
            fill: false,
            clickable: true,
        }
    }
}

/// Darstellung und Dauer des Fehler-Feedbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawErrorOptions {
    /// Fehlerfarbe (CSS-Hex)
    pub color: String,
    /// Anzeigedauer in Millisekunden
    pub timeout_ms: u64,
}

impl Default for DrawErrorOptions {
    fn default() -> Self {
        Self {
            color: DRAW_ERROR_COLOR.to_string(),
            timeout_ms: DRAW_ERROR_TIMEOUT_MS,
        }
    }
}

impl DrawErrorOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen des Zeichen-Tools.
/// Wird als `bezier_draw.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    // ── Validierung ─────────────────────────────────────────────
    /// Selbstschnitte erlauben
    pub allow_intersection: bool,

    // ── Ablauf ──────────────────────────────────────────────────
    /// Nach Abschluss sofort eine neue Session starten
    pub repeat_mode: bool,
    /// Form automatisch abschließen, sobald so viele Vertices gesetzt sind (0 = aus)
    #[serde(default)]
    pub max_points: usize,

    // ── Guide ───────────────────────────────────────────────────
    /// Abstand der Guide-Striche in Screen-Pixeln
    pub guideline_distance: f64,
    /// Maximal gezeichnete Guide-Länge in Screen-Pixeln
    pub max_guide_line_length: f64,

    // ── Messung ─────────────────────────────────────────────────
    /// Metrische Einheiten
    pub metric: bool,
    /// Fuß statt Yards (nur nicht-metrisch)
    pub feet: bool,
    /// Seemeilen (nur nicht-metrisch, ohne Fuß)
    #[serde(default)]
    pub nautic: bool,
    /// Messung im Tooltip anzeigen
    pub show_length: bool,
    /// Multiplikator für alle Distanzen
    #[serde(default = "default_factor")]
    pub factor: f64,

    // ── Eingabe ─────────────────────────────────────────────────
    /// Klick/Drag-Schwelle in Screen-Pixeln (wird mit `device_pixel_ratio` skaliert)
    #[serde(default = "default_drag_tolerance_px")]
    pub drag_tolerance_px: f64,
    /// Touch-Abschluss-Radius in Screen-Pixeln
    #[serde(default = "default_touch_finish_tolerance_px")]
    pub touch_finish_tolerance_px: f64,
    /// Pixel-Dichte des Geräts
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
    /// Sperrzeit für neue Vertices nach dem Loslassen (Millisekunden)
    #[serde(default = "default_marker_reenable_delay_ms")]
    pub marker_reenable_delay_ms: u64,

    // ── Unter-Tabellen ──────────────────────────────────────────
    /// Fehler-Feedback
    #[serde(default)]
    pub draw_error: DrawErrorOptions,
    /// Stil der Form
    #[serde(default)]
    pub shape: ShapeStyle,
    /// Nachkommastellen je Einheit
    #[serde(default)]
    pub precision: DistancePrecision,
    /// Glättungs-Parameter
    #[serde(default)]
    pub curve: CurveParams,

    /// Tooltip-Texte
    #[serde(default)]
    pub locale: DrawLocale,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            allow_intersection: true,
            draw_error: DrawErrorOptions::default(),

            repeat_mode: false,
            max_points: 0,

            guideline_distance: GUIDELINE_DISTANCE_PX,
            max_guide_line_length: MAX_GUIDE_LINE_LENGTH_PX,

            shape: ShapeStyle::default(),

            metric: true,
            feet: true,
            nautic: false,
            precision: DistancePrecision::default(),
            show_length: true,
            factor: 1.0,

            drag_tolerance_px: DRAG_TOLERANCE_PX,
            touch_finish_tolerance_px: TOUCH_FINISH_TOLERANCE_PX,
            device_pixel_ratio: 1.0,
            marker_reenable_delay_ms: MARKER_REENABLE_DELAY_MS,

            curve: CurveParams::default(),
            locale: DrawLocale::default(),
        }
    }
}

/// Serde-Default für `factor`: Distanzen unverändert übernehmen.
fn default_factor() -> f64 {
    1.0
}

fn default_drag_tolerance_px() -> f64 {
    DRAG_TOLERANCE_PX
}

fn default_touch_finish_tolerance_px() -> f64 {
    TOUCH_FINISH_TOLERANCE_PX
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

fn default_marker_reenable_delay_ms() -> u64 {
    MARKER_REENABLE_DELAY_MS
}

impl DrawOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier-draw-replay"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_draw.toml")
    }

    /// Einheiten-Präferenzen für die Distanz-Formatierung.
    pub fn distance_units(&self) -> DistanceUnits {
        DistanceUnits {
            metric: self.metric,
            feet: self.feet,
            nautic: self.nautic,
            precision: self.precision,
        }
    }

    /// Klick/Drag-Schwelle inklusive Pixel-Dichte.
    pub fn scaled_drag_tolerance(&self) -> f64 {
        self.drag_tolerance_px * self.device_pixel_ratio
    }

    pub fn marker_reenable_delay(&self) -> Duration {
        Duration::from_millis(self.marker_reenable_delay_ms)
    }
}
