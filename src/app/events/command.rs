use std::time::Duration;

use glam::DVec2;

use super::PointerEvent;

/// Commands sind mutierende Schritte, die zentral auf Tool und Ansicht
/// ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Session starten
    StartSession,
    /// Session beenden
    StopSession,
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    /// Eingabe-Debounce zurücksetzen
    CancelInput,
    /// Pointer-Out an den Tooltip weiterreichen
    PointerOut,
    /// Klick auf einen Vertex-Marker
    VertexClick { index: usize, now: Duration },
    DeleteLastVertex,
    /// Form über den Host-Button abschließen
    CompleteShape,
    /// Ansicht verschieben (Screen-Pixel)
    PanView { delta: DVec2 },
    /// Ansicht zoomen
    ZoomView { factor: f64 },
    /// Ansicht hat sich geändert → Guide neu berechnen
    ViewChanged,
    /// Fällige Timer auslösen
    Tick { now: Duration },
}
