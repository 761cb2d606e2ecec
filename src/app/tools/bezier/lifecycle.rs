//! Lifecycle-Methoden des BezierDrawTool (start, stop, Pointer, Timer).

use std::time::Duration;

use glam::DVec2;

use super::super::DrawHandler;
use super::state::BezierDrawTool;
use crate::app::events::PointerEvent;
use crate::app::host::HostContext;
use crate::app::state::{InputDebounce, SessionState};

impl DrawHandler for BezierDrawTool {
    fn kind(&self) -> &str {
        self.feature.kind()
    }

    fn is_enabled(&self) -> bool {
        self.feature.is_enabled()
    }

    fn start(&mut self, ctx: &mut HostContext<'_>) {
        if self.feature.is_enabled() {
            log::debug!("Laufende Session wird vor dem Neustart beendet");
            self.stop(ctx);
        }

        self.reset_session();
        self.state = SessionState::Idle;
        self.feature.enable(ctx);
        self.update_tooltip(ctx, None);
    }

    fn stop(&mut self, ctx: &mut HostContext<'_>) {
        if !self.feature.is_enabled() {
            return;
        }

        // Timer der alten Session sind ab hier wirkungslos
        self.epoch.bump();

        if let Some(id) = self.armed_vertex.take() {
            ctx.surface.disarm_finish_target(id);
        }
        for vertex in &self.vertices {
            ctx.surface.remove_vertex_marker(vertex.id);
        }
        if self.path_visible {
            ctx.surface.remove_path();
        }
        self.guide.clear(ctx);

        self.reset_session();
        self.feature.disable(ctx);

        if self.state != SessionState::Finished {
            self.state = SessionState::Idle;
        }
    }

    fn on_pointer_down(&mut self, ctx: &mut HostContext<'_>, event: &PointerEvent) {
        self.fire_due_timers(ctx, event.timestamp);
        if !self.feature.is_enabled() {
            return;
        }
        if !self.debounce.is_armed() {
            log::trace!("Pointer-Down ignoriert ({:?})", self.debounce);
            return;
        }

        self.pointer_moved(ctx, event.screen);

        if event.is_touch() {
            // Touch: Drücken und Loslassen in einem Schritt
            self.end_point(ctx, event.screen, event);
        } else {
            self.debounce = InputDebounce::Pressed {
                origin: event.screen,
                kind: event.kind,
            };
        }
    }

    fn on_pointer_move(&mut self, ctx: &mut HostContext<'_>, event: &PointerEvent) {
        self.fire_due_timers(ctx, event.timestamp);
        if !self.feature.is_enabled() {
            return;
        }
        self.pointer_moved(ctx, event.screen);
    }

    fn on_pointer_up(&mut self, ctx: &mut HostContext<'_>, event: &PointerEvent) {
        self.fire_due_timers(ctx, event.timestamp);
        if !self.feature.is_enabled() {
            return;
        }
        let Some(origin) = self.debounce.press_origin() else {
            log::trace!("Pointer-Up ohne Pointer-Down ignoriert");
            return;
        };
        self.end_point(ctx, origin, event);
    }

    fn on_cancel(&mut self, _ctx: &mut HostContext<'_>) {
        if !self.debounce.is_armed() {
            log::debug!("Eingabe abgebrochen ({:?})", self.debounce);
        }
        self.debounce = InputDebounce::Armed;
        self.reenable_timer.cancel();
    }

    fn on_vertex_click(&mut self, ctx: &mut HostContext<'_>, index: usize, now: Duration) {
        self.fire_due_timers(ctx, now);
        if !self.feature.is_enabled() {
            return;
        }
        let clicked = self.vertices.get(index).map(|v| v.id);
        if clicked.is_none() || clicked != self.armed_vertex {
            log::trace!("Klick auf Vertex {} schließt nicht ab", index);
            return;
        }
        // Fehlschlag wird als Fehler-Feedback angezeigt
        self.finish_shape(ctx, now).ok();
    }

    fn on_view_changed(&mut self, ctx: &mut HostContext<'_>) {
        if self.feature.is_enabled() {
            self.update_guide(ctx);
        }
    }

    fn on_pointer_out(&mut self, ctx: &mut HostContext<'_>) {
        if self.feature.is_enabled() {
            ctx.tooltip.pointer_out();
        }
    }

    fn on_tick(&mut self, ctx: &mut HostContext<'_>, now: Duration) {
        self.fire_due_timers(ctx, now);
    }

    fn delete_last_vertex(&mut self, ctx: &mut HostContext<'_>) {
        if self.feature.is_enabled() {
            self.remove_last_vertex(ctx);
        }
    }

    fn complete_shape(&mut self, ctx: &mut HostContext<'_>) {
        if self.feature.is_enabled() {
            self.complete(ctx);
        }
    }
}

impl BezierDrawTool {
    /// Pointer-Position übernehmen: Tooltip folgt, Guide wird neu gezeichnet.
    fn pointer_moved(&mut self, ctx: &mut HostContext<'_>, screen: DVec2) {
        let position = ctx.projection.unproject(screen);
        self.pointer = Some(position);
        self.update_tooltip(ctx, Some(position));
        self.update_guide(ctx);
    }

    /// Loslassen auswerten.
    ///
    /// Reihenfolge: Maximalzahl erreicht, Touch nahe am letzten Vertex,
    /// Klick ohne Drag. Alles andere gilt als Drag der Karte.
    fn end_point(&mut self, ctx: &mut HostContext<'_>, origin: DVec2, event: &PointerEvent) {
        let now = event.timestamp;
        let candidate = ctx.projection.unproject(event.screen);
        let travel = origin.distance(event.screen);
        let max_points = self.options.max_points;

        if max_points > 1 && self.vertices.len() + 1 >= max_points {
            // Am Limit wird nur noch abgeschlossen, nie mehr gesetzt
            if self.vertices.len() >= max_points {
                self.finish_shape(ctx, now).ok();
            } else if self.add_vertex(ctx, candidate, now).is_ok() {
                self.finish_shape(ctx, now).ok();
            }
        } else if event.is_touch()
            && self.finish_distance(ctx, candidate) < self.options.touch_finish_tolerance_px
        {
            self.finish_shape(ctx, now).ok();
        } else if travel < self.options.scaled_drag_tolerance() {
            self.add_vertex(ctx, candidate, now).ok();
        } else {
            log::trace!("Drag über {:.1} px, kein Vertex", travel);
        }

        self.cool_down(now);
    }

    /// Kurze Sperre für neue Vertices nach jeder Eingabe.
    fn cool_down(&mut self, now: Duration) {
        if !self.feature.is_enabled() {
            self.debounce = InputDebounce::Armed;
            return;
        }
        self.debounce = InputDebounce::Cooling;
        self.reenable_timer
            .arm(now, self.options.marker_reenable_delay(), self.epoch);
    }

    /// Löst fällige Timer der laufenden Session aus.
    pub(crate) fn fire_due_timers(&mut self, ctx: &mut HostContext<'_>, now: Duration) {
        if self.error.poll(now, self.epoch) {
            log::debug!("Fehler-Anzeige abgelaufen");
            self.hide_error(ctx);
        }
        if self.reenable_timer.fire_if_due(now, self.epoch)
            && self.debounce == InputDebounce::Cooling
        {
            self.debounce = InputDebounce::Armed;
        }
    }
}
