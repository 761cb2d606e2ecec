use serde::{Deserialize, Serialize};

use super::PointerKind;

/// Draw-Intents sind Eingaben aus Host oder Replay-Skript ohne Mutationslogik.
///
/// Zeiten sind Millisekunden seit Beginn des Skripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum DrawIntent {
    /// Zeichen-Tool aktivieren
    Start,
    /// Zeichen-Tool deaktivieren (verwirft angefangene Form)
    Stop,
    /// Taste/Finger gedrückt
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        kind: PointerKind,
        at_ms: u64,
    },
    /// Pointer bewegt
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        kind: PointerKind,
        at_ms: u64,
    },
    /// Taste/Finger losgelassen
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        kind: PointerKind,
        at_ms: u64,
    },
    /// Klick ohne Bewegung (Drücken + Loslassen an derselben Stelle)
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        kind: PointerKind,
        at_ms: u64,
    },
    /// Laufende Eingabe abbrechen (Pointer-Capture verloren)
    Cancel,
    /// Pointer hat die Zeichenfläche verlassen
    PointerOut,
    /// Vertex-Marker angeklickt
    VertexClicked { index: usize, at_ms: u64 },
    /// Letzten Vertex löschen
    DeleteLastVertexRequested,
    /// "Fertig"-Button des Hosts
    FinishRequested,
    /// Ansicht um Screen-Pixel verschieben
    PanView { dx: f64, dy: f64 },
    /// Ansicht zoomen
    ZoomView { factor: f64 },
    /// Zeit fortschreiben (Timer auslösen)
    Tick { at_ms: u64 },
}
