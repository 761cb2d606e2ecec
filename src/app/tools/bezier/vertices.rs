//! Vertex-Verwaltung: Setzen, Löschen, Abschließen.

use std::time::Duration;

use super::super::{DrawHandler, DrawnShape};
use super::state::BezierDrawTool;
use crate::app::error::DrawError;
use crate::app::host::{HostContext, TextKey};
use crate::app::state::{SessionState, Vertex, VertexId};
use crate::core::{first_crossed_segment, LatLng};

impl BezierDrawTool {
    /// Setzt einen neuen Vertex am Ende der Folge.
    ///
    /// Bei erkanntem Selbstschnitt wird Fehler-Feedback gezeigt und die
    /// Anker-Folge bleibt unverändert.
    pub fn add_vertex(
        &mut self,
        ctx: &mut HostContext<'_>,
        position: LatLng,
        now: Duration,
    ) -> Result<VertexId, DrawError> {
        if !self.feature.is_enabled() {
            return Err(DrawError::Inactive);
        }
        if let Err(err) = self.check_intersection(ctx, position) {
            log::debug!("Vertex bei {:?} abgelehnt: {}", position, err);
            self.show_error(ctx, now);
            return Err(err);
        }
        if self.error.is_shown() {
            self.hide_error(ctx);
        }

        let id = VertexId(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.push(Vertex { id, position });
        ctx.surface.add_vertex_marker(id, position);

        self.refit_path(ctx);
        self.state = SessionState::Collecting;
        log::debug!("Vertex {} gesetzt ({} gesamt)", id, self.vertices.len());

        self.vertex_changed(ctx, position, true);
        Ok(id)
    }

    /// Entfernt den letzten Vertex. Ab einem verbleibenden Vertex: no-op.
    pub fn remove_last_vertex(&mut self, ctx: &mut HostContext<'_>) {
        if self.vertices.len() <= 1 {
            log::trace!("Letzten Vertex löschen ignoriert ({} Vertices)", self.vertices.len());
            return;
        }
        let Some(removed) = self.vertices.pop() else {
            return;
        };
        ctx.surface.remove_vertex_marker(removed.id);

        self.refit_path(ctx);
        log::debug!("Vertex {} gelöscht ({} verbleibend)", removed.id, self.vertices.len());

        self.vertex_changed(ctx, removed.position, false);
    }

    /// Abschluss per Geste (Klick auf den letzten Vertex, Touch-Nähe, Maximalzahl).
    ///
    /// Prüft den Validator; bei Fehler wird das Fehler-Feedback gezeigt.
    /// Schnitte sind bereits beim Setzen jedes Vertex ausgeschlossen.
    pub fn finish_shape(
        &mut self,
        ctx: &mut HostContext<'_>,
        now: Duration,
    ) -> Result<(), DrawError> {
        if self.vertices.len() < 2 {
            log::trace!("Abschluss ignoriert ({} Vertices)", self.vertices.len());
            return Ok(());
        }

        if let Err(err) = self.validate_shape() {
            log::debug!("Abschluss abgelehnt: {}", err);
            self.show_error(ctx, now);
            return Err(err);
        }

        self.emit_and_teardown(ctx);
        Ok(())
    }

    /// Abschluss über den Host-Button: ohne gültige Form stiller no-op.
    pub(crate) fn complete(&mut self, ctx: &mut HostContext<'_>) {
        if self.vertices.len() <= 1 || self.validate_shape().is_err() {
            log::trace!("Host-Abschluss ignoriert");
            return;
        }
        self.emit_and_teardown(ctx);
    }

    fn check_intersection(&self, ctx: &HostContext<'_>, candidate: LatLng) -> Result<(), DrawError> {
        if self.vertices.len() < 2 || self.options.allow_intersection {
            return Ok(());
        }
        let projected = self.projected_anchors(ctx);
        let candidate = ctx.projection.project(candidate);
        match first_crossed_segment(&projected, candidate) {
            Some(segment) => Err(DrawError::SelfIntersection { segment }),
            None => Ok(()),
        }
    }

    fn validate_shape(&self) -> Result<(), DrawError> {
        let Some(validator) = &self.validator else {
            return Ok(());
        };
        if validator(&self.anchors()) {
            Ok(())
        } else {
            Err(DrawError::InvalidShape(
                "Validator hat die Form abgelehnt".to_string(),
            ))
        }
    }

    /// Kurve neu berechnen und Pfad-Sichtbarkeit anpassen.
    fn refit_path(&mut self, ctx: &mut HostContext<'_>) {
        self.curve = self.fitter.fit(&self.anchors());
        if self.vertices.len() >= 2 {
            ctx.surface.show_path(&self.curve);
            if !self.path_visible {
                ctx.surface.set_path_color(self.draw_color());
            }
            self.path_visible = true;
        } else if self.path_visible {
            ctx.surface.remove_path();
            self.path_visible = false;
        }
    }

    /// Gemeinsamer Abschluss jeder Vertex-Änderung.
    fn vertex_changed(&mut self, ctx: &mut HostContext<'_>, position: LatLng, added: bool) {
        ctx.events.draw_vertex(&self.anchors());
        self.update_finish_target(ctx);
        self.update_running_measure(ctx, position, added);
        self.guide.clear(ctx);
        self.update_tooltip(ctx, None);
    }

    /// Nur der letzte Vertex (ab zwei Vertices) schließt die Form per Klick ab.
    fn update_finish_target(&mut self, ctx: &mut HostContext<'_>) {
        let desired = if self.vertices.len() > 1 {
            self.vertices.last().map(|v| v.id)
        } else {
            None
        };
        if desired == self.armed_vertex {
            return;
        }
        if let Some(old) = self.armed_vertex.take() {
            ctx.surface.disarm_finish_target(old);
        }
        if let Some(new) = desired {
            ctx.surface.arm_finish_target(new);
        }
        self.armed_vertex = desired;
    }

    fn update_running_measure(&mut self, ctx: &HostContext<'_>, position: LatLng, added: bool) {
        if self.vertices.len() == 1 {
            self.measurement.reset();
            return;
        }
        let previous_index = self.vertices.len() - if added { 2 } else { 1 };
        let Some(previous) = self.vertices.get(previous_index) else {
            return;
        };
        let distance = ctx.projection.distance(position, previous.position) * self.options.factor;
        if added {
            self.measurement.on_commit(distance);
        } else {
            self.measurement.on_remove(distance);
        }
    }

    pub(crate) fn show_error(&mut self, ctx: &mut HostContext<'_>, now: Duration) {
        let texts = ctx.texts;
        let message = texts.text(TextKey::Error);
        self.error.show(ctx, message, now, self.epoch);
        self.state = SessionState::ErrorShown;
    }

    pub(crate) fn hide_error(&mut self, ctx: &mut HostContext<'_>) {
        self.error.hide(ctx, &self.options.shape.color);
        self.state = if self.vertices.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Collecting
        };
        self.update_tooltip(ctx, None);
    }

    /// Form ausliefern, Session beenden, ggf. neu starten.
    fn emit_and_teardown(&mut self, ctx: &mut HostContext<'_>) {
        let shape = DrawnShape {
            kind: self.feature.kind().to_string(),
            anchors: self.anchors(),
            curve: self.curve.clone(),
            style: self.options.shape.clone(),
            length: self.measurement.current_total(),
        };
        self.feature.fire_created(ctx, shape);
        self.state = SessionState::Finished;
        self.stop(ctx);

        if self.feature.repeat_mode() {
            self.start(ctx);
        }
    }
}
