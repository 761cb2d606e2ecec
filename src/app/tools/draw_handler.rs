//! DrawHandler-Trait: Lebenszyklus-Schnittstelle für Zeichen-Tools.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::events::PointerEvent;
use crate::app::host::HostContext;
use crate::core::LatLng;
use crate::shared::ShapeStyle;

/// Fertige, unveränderliche Form für den Host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnShape {
    /// Art der Form (z.B. "bezier")
    pub kind: String,
    /// Anker in Klick-Reihenfolge
    pub anchors: Vec<LatLng>,
    /// Geglättete Kurve durch alle Anker
    pub curve: Vec<LatLng>,
    pub style: ShapeStyle,
    /// Gemessene Länge über die Anker (inkl. `factor`)
    pub length: f64,
}

/// Zusätzliche Prüfung beim Abschließen einer Form.
///
/// `false` lehnt die Form ab; das Tool zeigt dann das Fehler-Feedback.
pub type ShapeValidator = Box<dyn Fn(&[LatLng]) -> bool>;

/// Schnittstelle für Zeichen-Tools.
///
/// Alle Aufrufe sind synchron und laufen auf einem Thread; jeder Aufruf ist
/// abgeschlossen (Zustand, Kurve, Render-Aufrufe), bevor er zurückkehrt.
pub trait DrawHandler {
    /// Typ-Kennung der erzeugten Form
    fn kind(&self) -> &str;

    /// Läuft gerade eine Session?
    fn is_enabled(&self) -> bool;

    /// Session starten. Eine laufende Session wird vorher beendet.
    fn start(&mut self, ctx: &mut HostContext<'_>);

    /// Session beenden und alle Host-Objekte entfernen.
    fn stop(&mut self, ctx: &mut HostContext<'_>);

    fn on_pointer_down(&mut self, ctx: &mut HostContext<'_>, event: &PointerEvent);

    fn on_pointer_move(&mut self, ctx: &mut HostContext<'_>, event: &PointerEvent);

    fn on_pointer_up(&mut self, ctx: &mut HostContext<'_>, event: &PointerEvent);

    /// Laufende Eingabe verwerfen (Pointer-Capture verloren).
    fn on_cancel(&mut self, ctx: &mut HostContext<'_>);

    /// Klick auf einen Vertex-Marker.
    fn on_vertex_click(&mut self, _ctx: &mut HostContext<'_>, _index: usize, _now: Duration) {}

    /// Ansicht hat sich geändert (Zoom-Ende).
    fn on_view_changed(&mut self, _ctx: &mut HostContext<'_>) {}

    /// Pointer hat die Zeichenfläche verlassen.
    fn on_pointer_out(&mut self, _ctx: &mut HostContext<'_>) {}

    /// Fällige Timer auslösen.
    fn on_tick(&mut self, _ctx: &mut HostContext<'_>, _now: Duration) {}

    /// Letzten Vertex entfernen.
    fn delete_last_vertex(&mut self, _ctx: &mut HostContext<'_>) {}

    /// Form über den Host-Button abschließen.
    fn complete_shape(&mut self, _ctx: &mut HostContext<'_>) {}
}
