use std::time::Duration;

use approx::assert_relative_eq;
use glam::DVec2;

use super::super::DrawHandler;
use super::state::BezierDrawTool;
use crate::app::error::DrawError;
use crate::app::events::PointerEvent;
use crate::app::host::{DrawEvent, GuideSnapshot, RecordingHost};
use crate::app::state::{InputDebounce, SessionState};
use crate::app::tools::common::test_support::planar_view;
use crate::core::{LatLng, PlanarView};
use crate::shared::{DrawLocale, DrawOptions};

const SHAPE_COLOR: &str = "#3388ff";
const ERROR_COLOR: &str = "#b00b00";

/// Screen-Position einer Koordinate in der 800×600-Testansicht.
fn screen(lat: f64, lng: f64) -> DVec2 {
    DVec2::new(400.0 + lng, 300.0 - lat)
}

fn assert_latlng_eq(actual: LatLng, lat: f64, lng: f64) {
    assert_relative_eq!(actual.lat, lat, epsilon = 1e-9);
    assert_relative_eq!(actual.lng, lng, epsilon = 1e-9);
}

fn strict() -> DrawOptions {
    DrawOptions {
        allow_intersection: false,
        ..DrawOptions::default()
    }
}

struct Harness {
    view: PlanarView,
    locale: DrawLocale,
    host: RecordingHost,
    tool: BezierDrawTool,
    now: Duration,
}

impl Harness {
    fn new(options: DrawOptions) -> Self {
        Self::with_tool(BezierDrawTool::new(options))
    }

    fn with_tool(tool: BezierDrawTool) -> Self {
        let mut harness = Self {
            view: planar_view(),
            locale: DrawLocale::default(),
            host: RecordingHost::new(),
            tool,
            now: Duration::from_millis(1000),
        };
        harness.start();
        harness
    }

    fn start(&mut self) {
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.start(&mut ctx);
    }

    fn stop(&mut self) {
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.stop(&mut ctx);
    }

    fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
    }

    fn down(&mut self, event: PointerEvent) {
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.on_pointer_down(&mut ctx, &event);
    }

    fn up(&mut self, event: PointerEvent) {
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.on_pointer_up(&mut ctx, &event);
    }

    /// Maus-Klick ohne Bewegung, 100 ms nach dem letzten Ereignis.
    fn click(&mut self, lat: f64, lng: f64) {
        self.advance(100);
        let event = PointerEvent::mouse(screen(lat, lng), self.now);
        self.down(event);
        self.up(event);
    }

    /// Drücken bei `from`, Loslassen bei `to` (Screen-Pixel).
    fn press_release(&mut self, from: DVec2, to: DVec2) {
        self.advance(100);
        self.down(PointerEvent::mouse(from, self.now));
        self.up(PointerEvent::mouse(to, self.now));
    }

    fn tap_after(&mut self, ms: u64, lat: f64, lng: f64) {
        self.advance(ms);
        let event = PointerEvent::touch(screen(lat, lng), self.now);
        self.down(event);
    }

    fn tap(&mut self, lat: f64, lng: f64) {
        self.tap_after(100, lat, lng);
    }

    fn move_to(&mut self, lat: f64, lng: f64) {
        self.advance(10);
        let event = PointerEvent::mouse(screen(lat, lng), self.now);
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.on_pointer_move(&mut ctx, &event);
    }

    fn tick(&mut self, ms: u64) {
        self.advance(ms);
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.on_tick(&mut ctx, self.now);
    }

    fn vertex_click(&mut self, index: usize) {
        self.advance(100);
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.on_vertex_click(&mut ctx, index, self.now);
    }

    fn delete_last(&mut self) {
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.delete_last_vertex(&mut ctx);
    }

    fn complete(&mut self) {
        let mut ctx = self.host.context(&self.view, &self.locale);
        self.tool.complete_shape(&mut ctx);
    }

    fn anchor_count(&self) -> usize {
        self.tool.vertices().len()
    }

    fn created(&self) -> usize {
        self.host.events.created_shapes().len()
    }
}

// ── Start / Stop ──

#[test]
fn test_start_shows_start_text_and_fires_draw_start() {
    let h = Harness::new(DrawOptions::default());

    assert!(h.tool.is_enabled());
    assert_eq!(h.tool.kind(), "bezier");
    assert_eq!(h.tool.state(), SessionState::Idle);
    assert_eq!(h.host.events.events, vec![DrawEvent::Start]);
    assert_eq!(h.host.tooltip.text, h.locale.start);
    assert_eq!(h.host.tooltip.subtext, None);
}

#[test]
fn test_disabled_tool_ignores_input() {
    let mut h = Harness::new(DrawOptions::default());
    h.stop();
    h.click(0.0, 0.0);

    assert_eq!(h.anchor_count(), 0);
    let mut ctx = h.host.context(&h.view, &h.locale);
    assert_eq!(
        h.tool.add_vertex(&mut ctx, LatLng::new(0.0, 0.0), h.now),
        Err(DrawError::Inactive)
    );
}

#[test]
fn test_stop_removes_all_host_objects() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.move_to(50.0, 150.0);
    h.stop();

    assert!(!h.tool.is_enabled());
    assert_eq!(h.tool.state(), SessionState::Idle);
    assert!(h.host.surface.markers.is_empty());
    assert!(h.host.surface.finish_targets.is_empty());
    assert!(h.host.surface.path.is_none());
    assert!(h.host.surface.guide.is_none());
    assert!(h.host.tooltip.disposed);
    assert_eq!(h.host.events.events.last(), Some(&DrawEvent::Stop));
    assert_eq!(h.created(), 0);
}

#[test]
fn test_start_on_running_tool_restarts_session() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.start();

    assert_eq!(h.anchor_count(), 0);
    assert!(h.host.surface.markers.is_empty());
    assert_eq!(h.host.events.count(|e| *e == DrawEvent::Start), 2);
    assert_eq!(h.host.events.count(|e| *e == DrawEvent::Stop), 1);
}

#[test]
fn test_error_timer_is_stale_after_restart() {
    let mut h = Harness::new(strict());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);
    h.click(-50.0, 50.0);
    assert!(h.tool.is_error_shown());

    h.start();
    assert!(!h.tool.is_error_shown());
    h.tick(5000);

    assert_eq!(h.tool.state(), SessionState::Idle);
    assert_eq!(h.host.tooltip.text, h.locale.start);
}

// ── Vertices setzen ──

#[test]
fn test_first_click_commits_vertex() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(10.0, 20.0);

    assert_eq!(h.tool.state(), SessionState::Collecting);
    assert_eq!(h.anchor_count(), 1);
    assert_latlng_eq(h.tool.anchors()[0], 10.0, 20.0);
    assert_eq!(h.host.surface.markers.len(), 1);
    assert!(h.host.surface.path.is_none());
    assert!(h.host.surface.finish_targets.is_empty());
    assert_eq!(h.host.tooltip.text, h.locale.cont);
    assert_eq!(h.host.tooltip.subtext.as_deref(), Some("0 m"));
    assert!(matches!(h.host.events.events.last(), Some(DrawEvent::Vertex(v)) if v.len() == 1));
}

#[test]
fn test_second_click_shows_path_and_end_text() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);

    assert_eq!(h.host.surface.path.as_deref(), Some(h.tool.curve()));
    assert_eq!(h.host.surface.path_color.as_deref(), Some(SHAPE_COLOR));
    assert_eq!(h.host.tooltip.text, h.locale.end);
    assert_eq!(h.tool.curve().len(), 2);
}

#[test]
fn test_only_last_vertex_is_finish_target() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);

    let last = h.tool.vertices()[2].id;
    assert_eq!(h.host.surface.finish_targets, vec![last]);
    assert_eq!(h.tool.armed_vertex(), Some(last));
}

#[test]
fn test_three_anchors_give_smoothed_curve() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(100.0, 100.0);
    h.click(0.0, 200.0);

    let curve = h.tool.curve();
    assert_eq!(curve.len(), 65);
    assert_latlng_eq(curve[0], 0.0, 0.0);
    assert_latlng_eq(curve[32], 100.0, 100.0);
    assert_latlng_eq(curve[64], 0.0, 200.0);
}

#[test]
fn test_click_and_drag_classification() {
    let mut h = Harness::new(DrawOptions::default());

    // Drag über die Schwelle: kein Vertex
    h.press_release(screen(0.0, 0.0), screen(0.0, 20.0));
    assert_eq!(h.anchor_count(), 0);

    // Zittern unter der Schwelle: Vertex an der Loslass-Position
    h.press_release(screen(0.0, 0.0), screen(0.0, 5.0));
    assert_eq!(h.anchor_count(), 1);
    assert_latlng_eq(h.tool.anchors()[0], 0.0, 5.0);
}

#[test]
fn test_drag_tolerance_scales_with_pixel_ratio() {
    let mut h = Harness::new(DrawOptions {
        device_pixel_ratio: 2.0,
        ..DrawOptions::default()
    });
    h.press_release(screen(0.0, 0.0), screen(0.0, 15.0));
    assert_eq!(h.anchor_count(), 1);
}

#[test]
fn test_cancel_drops_pending_press() {
    let mut h = Harness::new(DrawOptions::default());
    h.advance(100);
    h.down(PointerEvent::mouse(screen(0.0, 0.0), h.now));
    assert!(matches!(h.tool.debounce(), InputDebounce::Pressed { .. }));

    {
        let mut ctx = h.host.context(&h.view, &h.locale);
        h.tool.on_cancel(&mut ctx);
    }
    assert!(h.tool.debounce().is_armed());

    h.up(PointerEvent::mouse(screen(0.0, 0.0), h.now));
    assert_eq!(h.anchor_count(), 0);
}

// ── Touch und Entprellung ──

#[test]
fn test_tap_commits_and_cools_down() {
    let mut h = Harness::new(DrawOptions::default());
    h.tap(0.0, 0.0);
    assert_eq!(h.anchor_count(), 1);
    assert_eq!(h.tool.debounce(), InputDebounce::Cooling);

    // doppeltes Ereignis innerhalb der Sperrzeit
    h.tap_after(10, 0.0, 100.0);
    assert_eq!(h.anchor_count(), 1);

    h.tick(40);
    assert!(h.tool.debounce().is_armed());
    h.tap_after(10, 0.0, 100.0);
    assert_eq!(h.anchor_count(), 2);
}

#[test]
fn test_mouse_click_cools_down_until_timer() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    assert_eq!(h.tool.debounce(), InputDebounce::Cooling);

    h.advance(49);
    let event = PointerEvent::mouse(screen(0.0, 100.0), h.now);
    h.down(event);
    h.up(event);
    assert_eq!(h.anchor_count(), 1);

    h.click(0.0, 100.0);
    assert_eq!(h.anchor_count(), 2);
}

#[test]
fn test_tap_near_last_vertex_finishes() {
    let mut h = Harness::new(DrawOptions::default());
    h.tap(0.0, 0.0);
    h.tap(0.0, 100.0);
    h.tap(3.0, 100.0);

    assert_eq!(h.created(), 1);
    let shape = h.host.events.created_shapes()[0].clone();
    assert_eq!(shape.anchors.len(), 2);
    assert_eq!(h.tool.state(), SessionState::Finished);
    assert!(!h.tool.is_enabled());
}

#[test]
fn test_tap_near_single_vertex_is_noop() {
    let mut h = Harness::new(DrawOptions::default());
    h.tap(0.0, 0.0);
    h.tap(2.0, 2.0);

    assert_eq!(h.created(), 0);
    assert_eq!(h.anchor_count(), 1);
    assert!(h.tool.is_enabled());
}

#[test]
fn test_mouse_near_last_vertex_commits() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(3.0, 100.0);

    assert_eq!(h.created(), 0);
    assert_eq!(h.anchor_count(), 3);
}

// ── Selbstschnitt und Fehler-Feedback ──

#[test]
fn test_self_intersection_rejected_without_mutation() {
    let mut h = Harness::new(strict());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);
    let before = h.tool.anchors();
    let curve_before = h.tool.curve().to_vec();

    h.click(-50.0, 50.0);

    assert_eq!(h.tool.anchors(), before);
    assert_eq!(h.tool.curve(), curve_before.as_slice());
    assert_eq!(h.host.surface.markers.len(), 3);
    assert_eq!(h.tool.state(), SessionState::ErrorShown);
    assert!(h.host.tooltip.is_error);
    assert_eq!(h.host.tooltip.text, h.locale.error);
    assert_eq!(h.host.surface.path_color.as_deref(), Some(ERROR_COLOR));
}

#[test]
fn test_intersections_allowed_by_default() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);
    h.click(-50.0, 50.0);

    assert_eq!(h.anchor_count(), 4);
    assert!(!h.tool.is_error_shown());
}

#[test]
fn test_error_hides_after_timeout() {
    let mut h = Harness::new(strict());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);
    h.click(-50.0, 50.0);

    h.tick(2499);
    assert!(h.tool.is_error_shown());

    h.tick(1);
    assert!(!h.tool.is_error_shown());
    assert_eq!(h.tool.state(), SessionState::Collecting);
    assert!(!h.host.tooltip.is_error);
    assert_eq!(h.host.tooltip.text, h.locale.end);
    assert_eq!(h.host.surface.path_color.as_deref(), Some(SHAPE_COLOR));
}

#[test]
fn test_valid_commit_hides_error_immediately() {
    let mut h = Harness::new(strict());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);
    h.click(-50.0, 50.0);
    h.click(200.0, 100.0);

    assert_eq!(h.anchor_count(), 4);
    assert!(!h.tool.is_error_shown());
    assert_eq!(h.tool.state(), SessionState::Collecting);
    assert!(!h.host.tooltip.is_error);
}

#[test]
fn test_tooltip_content_frozen_while_error_shown() {
    let mut h = Harness::new(strict());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);
    h.click(-50.0, 50.0);
    h.move_to(150.0, 150.0);

    assert_eq!(h.host.tooltip.text, h.locale.error);
    assert_latlng_eq(h.host.tooltip.position.unwrap_or_default(), 150.0, 150.0);
    assert_eq!(h.host.surface.guide.color(), Some(ERROR_COLOR));
}

// ── Löschen ──

#[test]
fn test_delete_last_vertex() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 30.0);
    h.click(40.0, 30.0);
    assert_relative_eq!(h.tool.measured_length(), 70.0, epsilon = 1e-9);

    h.delete_last();
    assert_eq!(h.anchor_count(), 2);
    assert_relative_eq!(h.tool.measured_length(), 30.0, epsilon = 1e-9);
    assert!(h.host.surface.path.is_some());
    assert_eq!(h.host.surface.finish_targets, vec![h.tool.vertices()[1].id]);

    h.delete_last();
    assert_eq!(h.anchor_count(), 1);
    assert!(h.host.surface.path.is_none());
    assert!(h.host.surface.finish_targets.is_empty());
    assert_relative_eq!(h.tool.measured_length(), 0.0);
    assert_eq!(h.host.tooltip.text, h.locale.cont);
}

#[test]
fn test_delete_last_with_single_vertex_is_noop() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    let events_before = h.host.events.events.len();

    h.delete_last();

    assert_eq!(h.anchor_count(), 1);
    assert_eq!(h.host.surface.markers.len(), 1);
    assert_eq!(h.host.events.events.len(), events_before);
}

// ── Messung und Tooltip ──

#[test]
fn test_measurement_subtext_includes_pointer() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 30.0);
    h.move_to(40.0, 30.0);

    assert_eq!(h.host.tooltip.text, h.locale.end);
    assert_eq!(h.host.tooltip.subtext.as_deref(), Some("70 m"));
}

#[test]
fn test_measurement_factor_and_hidden_length() {
    let mut h = Harness::new(DrawOptions {
        factor: 2.0,
        ..DrawOptions::default()
    });
    h.click(0.0, 0.0);
    h.click(0.0, 30.0);
    assert_relative_eq!(h.tool.measured_length(), 60.0, epsilon = 1e-9);

    let mut h = Harness::new(DrawOptions {
        show_length: false,
        ..DrawOptions::default()
    });
    h.click(0.0, 0.0);
    assert_eq!(h.host.tooltip.subtext, None);
}

#[test]
fn test_pointer_out_forwarded_to_tooltip() {
    let mut h = Harness::new(DrawOptions::default());
    let mut ctx = h.host.context(&h.view, &h.locale);
    h.tool.on_pointer_out(&mut ctx);
    assert_eq!(h.host.tooltip.pointer_outs, 1);
}

// ── Guide ──

#[test]
fn test_guide_follows_pointer() {
    let mut h = Harness::new(DrawOptions::default());
    h.move_to(0.0, 50.0);
    assert!(h.host.surface.guide.is_none());

    h.click(0.0, 0.0);
    h.move_to(0.0, 100.0);
    assert!(matches!(
        &h.host.surface.guide,
        GuideSnapshot::Dashes { points, .. } if points.len() == 4
    ));

    h.click(0.0, 100.0);
    assert!(h.host.surface.guide.is_none());

    h.move_to(100.0, 150.0);
    match &h.host.surface.guide {
        GuideSnapshot::Curve { points, color } => {
            assert_eq!(color, SHAPE_COLOR);
            assert_eq!(points.len(), 65);
        }
        other => panic!("Erwartet Vorschau-Kurve, war {other:?}"),
    }
}

#[test]
fn test_view_change_redraws_guide() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.move_to(0.0, 100.0);

    h.view.zoom_by(2.0);
    {
        let mut ctx = h.host.context(&h.view, &h.locale);
        h.tool.on_view_changed(&mut ctx);
    }

    match &h.host.surface.guide {
        GuideSnapshot::Dashes { points, .. } => assert_eq!(points.len(), 9),
        other => panic!("Erwartet Striche, war {other:?}"),
    }
}

// ── Abschließen ──

#[test]
fn test_click_on_last_vertex_finishes() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 30.0);
    h.click(40.0, 30.0);
    h.vertex_click(2);

    assert_eq!(h.created(), 1);
    let shape = h.host.events.created_shapes()[0].clone();
    assert_eq!(shape.kind, "bezier");
    assert_eq!(shape.anchors.len(), 3);
    assert_eq!(shape.curve.len(), 65);
    assert_relative_eq!(shape.length, 70.0, epsilon = 1e-9);
    assert_eq!(shape.style.color, SHAPE_COLOR);

    assert_eq!(h.tool.state(), SessionState::Finished);
    assert!(!h.tool.is_enabled());
    assert!(h.host.surface.markers.is_empty());
    assert!(h.host.surface.path.is_none());

    let tail: Vec<_> = h.host.events.events.iter().rev().take(2).collect();
    assert_eq!(tail[0], &DrawEvent::Stop);
    assert!(matches!(tail[1], DrawEvent::Created(_)));
}

#[test]
fn test_click_on_other_vertex_does_not_finish() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.vertex_click(0);
    h.vertex_click(7);

    assert_eq!(h.created(), 0);
    assert!(h.tool.is_enabled());
}

#[test]
fn test_finish_with_single_vertex_is_noop() {
    let mut h = Harness::new(DrawOptions::default());
    h.click(0.0, 0.0);
    let mut ctx = h.host.context(&h.view, &h.locale);
    assert_eq!(h.tool.finish_shape(&mut ctx, h.now), Ok(()));

    assert_eq!(h.created(), 0);
    assert!(h.tool.is_enabled());
}

#[test]
fn test_max_points_finishes_automatically() {
    let mut h = Harness::new(DrawOptions {
        max_points: 3,
        ..DrawOptions::default()
    });
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    assert_eq!(h.created(), 0);

    h.click(100.0, 100.0);
    assert_eq!(h.created(), 1);
    assert_eq!(h.host.events.created_shapes()[0].anchors.len(), 3);
}

#[test]
fn test_max_points_rejected_commit_does_not_finish() {
    let mut h = Harness::new(DrawOptions {
        max_points: 4,
        ..strict()
    });
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);
    h.click(-50.0, 50.0);

    assert_eq!(h.created(), 0);
    assert_eq!(h.anchor_count(), 3);
    assert!(h.tool.is_error_shown());
}

#[test]
fn test_finish_after_rejected_commit_uses_committed_anchors() {
    let mut h = Harness::new(strict());
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(100.0, 100.0);
    h.click(-50.0, 50.0);
    assert!(h.tool.is_error_shown());

    h.vertex_click(2);
    assert_eq!(h.created(), 1);
    assert_eq!(h.host.events.created_shapes()[0].anchors.len(), 3);
}

#[test]
fn test_max_points_never_exceeded_after_rejected_finish() {
    let options = DrawOptions {
        max_points: 3,
        ..DrawOptions::default()
    };
    let tool = BezierDrawTool::new(options).with_validator(|a| a.iter().all(|p| p.lat >= 0.0));
    let mut h = Harness::with_tool(tool);
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.click(-50.0, 100.0);
    assert_eq!(h.created(), 0);
    assert_eq!(h.anchor_count(), 3);
    assert!(h.tool.is_error_shown());

    // Weitere Klicks am Limit setzen keinen Vertex mehr
    h.tick(3000);
    h.click(50.0, 50.0);
    h.tick(100);
    h.click(80.0, 20.0);
    assert_eq!(h.anchor_count(), 3);
    assert_eq!(h.created(), 0);

    h.delete_last();
    h.tick(3000);
    h.click(100.0, 100.0);
    assert_eq!(h.created(), 1);
    assert_eq!(h.host.events.created_shapes()[0].anchors.len(), 3);
}

#[test]
fn test_repeat_mode_restarts_session() {
    let mut h = Harness::new(DrawOptions {
        repeat_mode: true,
        ..DrawOptions::default()
    });
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);
    h.vertex_click(1);

    assert_eq!(h.created(), 1);
    assert!(h.tool.is_enabled());
    assert_eq!(h.tool.state(), SessionState::Idle);
    assert_eq!(h.anchor_count(), 0);
    assert_eq!(h.host.events.events.last(), Some(&DrawEvent::Start));
    assert_eq!(h.host.tooltip.text, h.locale.start);

    h.click(50.0, 50.0);
    assert_eq!(h.anchor_count(), 1);
}

#[test]
fn test_complete_shape_needs_two_vertices() {
    let mut h = Harness::new(DrawOptions::default());
    h.complete();
    h.click(0.0, 0.0);
    h.complete();
    assert_eq!(h.created(), 0);

    h.click(0.0, 100.0);
    h.complete();
    assert_eq!(h.created(), 1);
}

#[test]
fn test_validator_rejection_shows_error() {
    let tool = BezierDrawTool::new(DrawOptions::default()).with_validator(|a| a.len() >= 3);
    let mut h = Harness::with_tool(tool);
    h.click(0.0, 0.0);
    h.click(0.0, 100.0);

    h.vertex_click(1);
    assert_eq!(h.created(), 0);
    assert!(h.tool.is_error_shown());

    // Host-Button: stiller no-op
    h.tick(3000);
    h.complete();
    assert_eq!(h.created(), 0);
    assert!(!h.tool.is_error_shown());

    h.click(100.0, 100.0);
    h.vertex_click(2);
    assert_eq!(h.created(), 1);
}
