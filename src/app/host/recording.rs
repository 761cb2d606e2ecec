//! In-Memory-Host: zeichnet alle Aufrufe als Zustand auf.
//!
//! Wird vom Replay-Binary und den Tests verwendet.

use glam::DVec2;

use super::{DrawEventSink, HostContext, RenderSurface, TextProvider, Tooltip};
use crate::app::state::VertexId;
use crate::app::tools::DrawnShape;
use crate::core::{LatLng, Projection};

/// Aktuell sichtbarer Guide.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GuideSnapshot {
    #[default]
    None,
    Dashes { points: Vec<DVec2>, color: String },
    Curve { points: Vec<LatLng>, color: String },
}

impl GuideSnapshot {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Dashes { color, .. } | Self::Curve { color, .. } => Some(color),
        }
    }
}

/// Aufgezeichneter Zustand der Zeichenfläche.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Sichtbare Vertex-Marker in Einfüge-Reihenfolge
    pub markers: Vec<(VertexId, LatLng)>,
    /// Als Abschluss-Ziel markierte Vertices
    pub finish_targets: Vec<VertexId>,
    /// Sichtbarer Pfad
    pub path: Option<Vec<LatLng>>,
    pub path_color: Option<String>,
    pub guide: GuideSnapshot,
    /// Anzahl der `clear_guide`-Aufrufe
    pub guide_clears: usize,
}

impl RenderSurface for RecordingSurface {
    fn add_vertex_marker(&mut self, id: VertexId, position: LatLng) {
        self.markers.push((id, position));
    }

    fn remove_vertex_marker(&mut self, id: VertexId) {
        self.markers.retain(|(marker, _)| *marker != id);
    }

    fn arm_finish_target(&mut self, id: VertexId) {
        if !self.finish_targets.contains(&id) {
            self.finish_targets.push(id);
        }
    }

    fn disarm_finish_target(&mut self, id: VertexId) {
        self.finish_targets.retain(|target| *target != id);
    }

    fn show_path(&mut self, curve: &[LatLng]) {
        self.path = Some(curve.to_vec());
    }

    fn remove_path(&mut self) {
        self.path = None;
    }

    fn set_path_color(&mut self, color: &str) {
        self.path_color = Some(color.to_string());
    }

    fn draw_guide_dashes(&mut self, dashes: &[DVec2], color: &str) {
        self.guide = GuideSnapshot::Dashes {
            points: dashes.to_vec(),
            color: color.to_string(),
        };
    }

    fn draw_guide_curve(&mut self, curve: &[LatLng], color: &str) {
        self.guide = GuideSnapshot::Curve {
            points: curve.to_vec(),
            color: color.to_string(),
        };
    }

    fn clear_guide(&mut self) {
        self.guide = GuideSnapshot::None;
        self.guide_clears += 1;
    }

    fn set_guide_color(&mut self, color: &str) {
        match &mut self.guide {
            GuideSnapshot::None => {}
            GuideSnapshot::Dashes { color: c, .. } | GuideSnapshot::Curve { color: c, .. } => {
                *c = color.to_string();
            }
        }
    }
}

/// Aufgezeichneter Tooltip-Zustand.
#[derive(Debug, Clone, Default)]
pub struct RecordingTooltip {
    pub text: String,
    pub subtext: Option<String>,
    pub position: Option<LatLng>,
    pub is_error: bool,
    pub pointer_outs: usize,
    pub disposed: bool,
}

impl Tooltip for RecordingTooltip {
    fn update_content(&mut self, text: &str, subtext: Option<&str>) {
        self.text = text.to_string();
        self.subtext = subtext.map(str::to_string);
        self.disposed = false;
    }

    fn update_position(&mut self, position: LatLng) {
        self.position = Some(position);
    }

    fn show_as_error(&mut self) {
        self.is_error = true;
    }

    fn remove_error(&mut self) {
        self.is_error = false;
    }

    fn pointer_out(&mut self) {
        self.pointer_outs += 1;
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.is_error = false;
        self.position = None;
    }
}

/// Aufgezeichnetes Zeichen-Ereignis.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    Start,
    Vertex(Vec<LatLng>),
    Created(DrawnShape),
    Stop,
}

/// Aufgezeichnete Ereignisse in Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct RecordingEvents {
    pub events: Vec<DrawEvent>,
}

impl RecordingEvents {
    /// Alle bisher erzeugten Formen.
    pub fn created_shapes(&self) -> Vec<&DrawnShape> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DrawEvent::Created(shape) => Some(shape),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl DrawEventSink for RecordingEvents {
    fn draw_start(&mut self) {
        self.events.push(DrawEvent::Start);
    }

    fn draw_vertex(&mut self, vertices: &[LatLng]) {
        self.events.push(DrawEvent::Vertex(vertices.to_vec()));
    }

    fn shape_created(&mut self, shape: DrawnShape) {
        self.events.push(DrawEvent::Created(shape));
    }

    fn draw_stop(&mut self) {
        self.events.push(DrawEvent::Stop);
    }
}

/// Host, der alle Aufrufe im Speicher aufzeichnet.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub surface: RecordingSurface,
    pub tooltip: RecordingTooltip,
    pub events: RecordingEvents,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bündelt den Host mit Projektion und Texten für einen Tool-Aufruf.
    pub fn context<'a>(
        &'a mut self,
        projection: &'a dyn Projection,
        texts: &'a dyn TextProvider,
    ) -> HostContext<'a> {
        HostContext {
            projection,
            surface: &mut self.surface,
            tooltip: &mut self.tooltip,
            texts,
            events: &mut self.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_add_remove() {
        let mut surface = RecordingSurface::default();
        surface.add_vertex_marker(VertexId(1), LatLng::new(1.0, 2.0));
        surface.add_vertex_marker(VertexId(2), LatLng::new(3.0, 4.0));
        surface.remove_vertex_marker(VertexId(1));
        assert_eq!(surface.markers, vec![(VertexId(2), LatLng::new(3.0, 4.0))]);
    }

    #[test]
    fn test_guide_color_change_keeps_points() {
        let mut surface = RecordingSurface::default();
        surface.draw_guide_dashes(&[DVec2::new(1.0, 1.0)], "#3388ff");
        surface.set_guide_color("#b00b00");
        assert_eq!(surface.guide.color(), Some("#b00b00"));
        surface.clear_guide();
        assert!(surface.guide.is_none());
        assert_eq!(surface.guide_clears, 1);
    }

    #[test]
    fn test_finish_target_is_set_like() {
        let mut surface = RecordingSurface::default();
        surface.arm_finish_target(VertexId(3));
        surface.arm_finish_target(VertexId(3));
        assert_eq!(surface.finish_targets.len(), 1);
        surface.disarm_finish_target(VertexId(3));
        assert!(surface.finish_targets.is_empty());
    }
}
