//! Schnittstellen zum Host (Karte/Canvas, Tooltip, Texte, Event-Bus).
//!
//! Das Tool ruft ausschließlich diese Traits auf; pro Aufruf werden alle
//! Kollaborateure in einem `HostContext` gebündelt.

mod locale;
pub mod recording;

pub use recording::{DrawEvent, GuideSnapshot, RecordingHost};

use glam::DVec2;

use super::state::VertexId;
use super::tools::DrawnShape;
use crate::core::{LatLng, Projection};

/// Darstellung von Markern, Pfad und Guide.
pub trait RenderSurface {
    /// Vertex-Marker hinzufügen
    fn add_vertex_marker(&mut self, id: VertexId, position: LatLng);
    /// Vertex-Marker entfernen
    fn remove_vertex_marker(&mut self, id: VertexId);
    /// Marker als Abschluss-Ziel markieren (Klick schließt die Form ab)
    fn arm_finish_target(&mut self, id: VertexId);
    /// Abschluss-Markierung entfernen
    fn disarm_finish_target(&mut self, id: VertexId);

    /// Pfad (geglättete Kurve) anzeigen bzw. aktualisieren
    fn show_path(&mut self, curve: &[LatLng]);
    /// Pfad entfernen
    fn remove_path(&mut self);
    /// Strichfarbe des Pfads setzen
    fn set_path_color(&mut self, color: &str);

    /// Gestrichelte Guide-Linie zeichnen (Strich-Positionen in Screen-Pixeln)
    fn draw_guide_dashes(&mut self, dashes: &[DVec2], color: &str);
    /// Vorschau-Kurve als Guide zeichnen
    fn draw_guide_curve(&mut self, curve: &[LatLng], color: &str);
    /// Guide vollständig entfernen
    fn clear_guide(&mut self);
    /// Farbe eines bestehenden Guides ändern
    fn set_guide_color(&mut self, color: &str);
}

/// Tooltip am Pointer.
pub trait Tooltip {
    fn update_content(&mut self, text: &str, subtext: Option<&str>);
    fn update_position(&mut self, position: LatLng);
    /// Tooltip in Fehler-Darstellung schalten
    fn show_as_error(&mut self);
    /// Fehler-Darstellung entfernen
    fn remove_error(&mut self);
    /// Pointer hat die Zeichenfläche verlassen
    fn pointer_out(&mut self);
    /// Tooltip entfernen (Session-Ende)
    fn dispose(&mut self);
}

/// Schlüssel der Tooltip-Texte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Start,
    Continue,
    End,
    Error,
}

/// Liefert lokalisierte Texte.
pub trait TextProvider {
    fn text(&self, key: TextKey) -> &str;
}

/// Empfänger der Zeichen-Ereignisse.
pub trait DrawEventSink {
    fn draw_start(&mut self);
    /// Vertex-Liste hat sich geändert
    fn draw_vertex(&mut self, vertices: &[LatLng]);
    /// Fertige Form, gehört ab jetzt dem Host
    fn shape_created(&mut self, shape: DrawnShape);
    fn draw_stop(&mut self);
}

/// Alle Host-Kollaborateure für einen Aufruf.
pub struct HostContext<'a> {
    pub projection: &'a dyn Projection,
    pub surface: &'a mut dyn RenderSurface,
    pub tooltip: &'a mut dyn Tooltip,
    pub texts: &'a dyn TextProvider,
    pub events: &'a mut dyn DrawEventSink,
}
