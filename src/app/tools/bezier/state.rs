//! State-Definitionen, Konstruktor und Hilfsmethoden für das Bezier-Zeichen-Tool.

use glam::DVec2;

use super::super::common::{ErrorFeedback, FeatureLifecycle, GuideRenderer};
use super::super::ShapeValidator;
use crate::app::host::{HostContext, TextKey};
use crate::app::state::{InputDebounce, SessionState, Vertex, VertexId};
use crate::app::timers::{ScopedTimer, SessionEpoch};
use crate::core::{DistanceFormatter, LatLng, MeasurementTracker, ReadableDistance};
use crate::shared::{CurveFitter, DrawOptions};

/// Typ-Kennung der erzeugten Formen.
pub const BEZIER_KIND: &str = "bezier";

/// Bezier-Zeichen-Tool: sammelt Vertices per Klick/Tap und zeigt die
/// geglättete Kurve live an.
pub struct BezierDrawTool {
    pub(crate) options: DrawOptions,
    pub(crate) fitter: CurveFitter,
    pub(crate) formatter: Box<dyn DistanceFormatter>,
    /// Zusätzliche Form-Prüfung beim Abschließen
    pub(crate) validator: Option<ShapeValidator>,
    /// Start/Stop, Created-Event, Repeat-Modus
    pub(crate) feature: FeatureLifecycle,
    pub(crate) state: SessionState,
    pub(crate) debounce: InputDebounce,
    /// Bestätigte Vertices in Klick-Reihenfolge
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) next_vertex_id: u64,
    pub(crate) measurement: MeasurementTracker,
    /// Geglättete Kurve der bestätigten Anker
    pub(crate) curve: Vec<LatLng>,
    pub(crate) path_visible: bool,
    /// Vertex, dessen Klick die Form abschließt (höchstens einer)
    pub(crate) armed_vertex: Option<VertexId>,
    pub(crate) guide: GuideRenderer,
    pub(crate) error: ErrorFeedback,
    /// Sperrzeit nach dem Loslassen
    pub(crate) reenable_timer: ScopedTimer,
    pub(crate) epoch: SessionEpoch,
    /// Letzte bekannte Pointer-Position
    pub(crate) pointer: Option<LatLng>,
}

impl BezierDrawTool {
    /// Erstellt ein neues (inaktives) Tool.
    pub fn new(options: DrawOptions) -> Self {
        Self {
            fitter: CurveFitter::new(options.curve),
            formatter: Box::new(ReadableDistance),
            validator: None,
            feature: FeatureLifecycle::new(BEZIER_KIND, options.repeat_mode),
            state: SessionState::Idle,
            debounce: InputDebounce::Armed,
            vertices: Vec::new(),
            next_vertex_id: 1,
            measurement: MeasurementTracker::new(),
            curve: Vec::new(),
            path_visible: false,
            armed_vertex: None,
            guide: GuideRenderer::new(options.guideline_distance, options.max_guide_line_length),
            error: ErrorFeedback::new(&options.draw_error),
            reenable_timer: ScopedTimer::default(),
            epoch: SessionEpoch::default(),
            pointer: None,
            options,
        }
    }

    /// Ersetzt die Distanz-Formatierung des Tooltips.
    pub fn with_formatter(mut self, formatter: Box<dyn DistanceFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Setzt eine zusätzliche Form-Prüfung für das Abschließen.
    pub fn with_validator(mut self, validator: impl Fn(&[LatLng]) -> bool + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn debounce(&self) -> InputDebounce {
        self.debounce
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Anker-Positionen in Klick-Reihenfolge.
    pub fn anchors(&self) -> Vec<LatLng> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Aktuell gerenderte Kurve (ohne Pointer-Vorschau).
    pub fn curve(&self) -> &[LatLng] {
        &self.curve
    }

    /// Gemessene Länge über die bestätigten Anker.
    pub fn measured_length(&self) -> f64 {
        self.measurement.current_total()
    }

    pub fn armed_vertex(&self) -> Option<VertexId> {
        self.armed_vertex
    }

    pub fn is_error_shown(&self) -> bool {
        self.error.is_shown()
    }

    /// Anker in Screen-Pixeln.
    pub(crate) fn projected_anchors(&self, ctx: &HostContext<'_>) -> Vec<DVec2> {
        self.vertices
            .iter()
            .map(|v| ctx.projection.project(v.position))
            .collect()
    }

    /// Screen-Abstand von `candidate` zum letzten Vertex.
    ///
    /// Ohne Vertex: unendlich.
    pub(crate) fn finish_distance(&self, ctx: &HostContext<'_>, candidate: LatLng) -> f64 {
        match self.vertices.last() {
            Some(last) => ctx.projection.screen_distance(last.position, candidate),
            None => f64::INFINITY,
        }
    }

    /// Laufende Länge plus Strecke vom letzten Vertex zum Pointer, formatiert.
    pub(crate) fn measurement_text(&self, ctx: &HostContext<'_>) -> String {
        let mut distance = self.measurement.current_total();
        if let (Some(pointer), Some(last)) = (self.pointer, self.vertices.last()) {
            distance += ctx.projection.distance(pointer, last.position) * self.options.factor;
        }
        self.formatter
            .format(distance, &self.options.distance_units())
    }

    /// Tooltip-Text und -Subtext für den aktuellen Stand.
    pub(crate) fn tooltip_text(&self, ctx: &HostContext<'_>) -> (String, Option<String>) {
        if self.vertices.is_empty() {
            return (ctx.texts.text(TextKey::Start).to_string(), None);
        }

        let subtext = self
            .options
            .show_length
            .then(|| self.measurement_text(ctx));
        let key = if self.vertices.len() == 1 {
            TextKey::Continue
        } else {
            TextKey::End
        };
        (ctx.texts.text(key).to_string(), subtext)
    }

    /// Aktualisiert Position und (ohne aktiven Fehler) Inhalt des Tooltips.
    pub(crate) fn update_tooltip(&self, ctx: &mut HostContext<'_>, position: Option<LatLng>) {
        if let Some(position) = position {
            ctx.tooltip.update_position(position);
        }
        if !self.error.is_shown() {
            let (text, subtext) = self.tooltip_text(ctx);
            ctx.tooltip.update_content(&text, subtext.as_deref());
        }
    }

    /// Aktuelle Farbe für Pfad und Guide.
    pub(crate) fn draw_color(&self) -> &str {
        if self.error.is_shown() {
            self.error.color()
        } else {
            &self.options.shape.color
        }
    }

    /// Zeichnet den Guide für die letzte Pointer-Position neu.
    pub(crate) fn update_guide(&self, ctx: &mut HostContext<'_>) {
        let Some(pointer) = self.pointer else {
            return;
        };
        if self.vertices.is_empty() {
            return;
        }
        let anchors = self.anchors();
        self.guide
            .update(ctx, &anchors, pointer, &self.fitter, self.draw_color());
    }

    /// Setzt alle Session-Daten zurück (ohne Host-Aufrufe).
    pub(crate) fn reset_session(&mut self) {
        self.vertices.clear();
        self.curve.clear();
        self.measurement.reset();
        self.path_visible = false;
        self.armed_vertex = None;
        self.debounce = InputDebounce::Armed;
        self.reenable_timer.cancel();
        self.error.reset();
        self.pointer = None;
    }
}

impl Default for BezierDrawTool {
    fn default() -> Self {
        Self::new(DrawOptions::default())
    }
}
