//! Projektions-Dienst: Screen-Pixel ↔ Koordinate und Distanzberechnung.
//!
//! Der Zeichen-Kern kennt nur den `Projection`-Trait. `PlanarView` ist eine
//! einfache 2D-Kamera mit Pan und Zoom für ebene Koordinaten (Tests, Replays).

use glam::DVec2;

use super::LatLng;

/// Schnittstelle zum Koordinatensystem des Hosts.
pub trait Projection {
    /// Koordinate → Screen-Position (Pixel, y nach unten).
    fn project(&self, point: LatLng) -> DVec2;

    /// Screen-Position (Pixel) → Koordinate.
    fn unproject(&self, screen: DVec2) -> LatLng;

    /// Distanz zwischen zwei Koordinaten in Metern (bzw. Welteinheiten).
    fn distance(&self, a: LatLng, b: LatLng) -> f64;

    /// Screen-Distanz zwischen zwei Koordinaten in Pixeln.
    fn screen_distance(&self, a: LatLng, b: LatLng) -> f64 {
        self.project(a).distance(self.project(b))
    }
}

/// Ansicht, die der Host per Pan und Zoom verändern kann.
pub trait ViewControl: Projection {
    /// Verschiebt die Viewport-Mitte um `delta` Screen-Pixel.
    fn pan_pixels(&mut self, delta: DVec2);

    /// Zoomt um den Faktor `factor` (> 1 = hinein).
    fn zoom_view(&mut self, factor: f64);
}

/// Ebene 2D-Ansicht mit Pan und Zoom.
///
/// `lng` wird auf die x-, `lat` auf die y-Achse gelegt; Norden ist oben.
#[derive(Debug, Clone)]
pub struct PlanarView {
    /// Welt-Position in der Viewport-Mitte
    pub position: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
    /// Viewport-Größe in Pixeln
    pub viewport_size: DVec2,
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0
    pub base_world_extent: f64,
}

impl PlanarView {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 100.0;

    /// Erstellt eine Ansicht, bei der eine Welteinheit bei Zoom 1.0 genau
    /// einem Pixel entspricht.
    pub fn new(viewport_size: DVec2) -> Self {
        Self {
            position: DVec2::ZERO,
            zoom: 1.0,
            viewport_size,
            base_world_extent: viewport_size.y.max(1.0) / 2.0,
        }
    }

    /// Verschiebt die Ansicht (Pan, Welteinheiten).
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Welteinheiten.
    pub fn world_per_pixel(&self) -> f64 {
        2.0 * self.base_world_extent / (self.zoom * self.viewport_size.y.max(1.0))
    }

    fn aspect(&self) -> f64 {
        self.viewport_size.x / self.viewport_size.y.max(1.0)
    }
}

impl Projection for PlanarView {
    fn project(&self, point: LatLng) -> DVec2 {
        let rel = point.to_vec() - self.position;
        let ndc = DVec2::new(
            rel.x * self.zoom / (self.base_world_extent * self.aspect()),
            -rel.y * self.zoom / self.base_world_extent,
        );
        (ndc + DVec2::ONE) * 0.5 * self.viewport_size
    }

    fn unproject(&self, screen: DVec2) -> LatLng {
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen / self.viewport_size.max(DVec2::ONE)) * 2.0 - DVec2::ONE;
        let world = DVec2::new(
            ndc.x * self.base_world_extent * self.aspect() / self.zoom,
            -ndc.y * self.base_world_extent / self.zoom,
        ) + self.position;
        LatLng::from_vec(world)
    }

    fn distance(&self, a: LatLng, b: LatLng) -> f64 {
        a.to_vec().distance(b.to_vec())
    }
}

impl ViewControl for PlanarView {
    fn pan_pixels(&mut self, delta: DVec2) {
        let wpp = self.world_per_pixel();
        self.pan(DVec2::new(delta.x * wpp, -delta.y * wpp));
    }

    fn zoom_view(&mut self, factor: f64) {
        self.zoom_by(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_maps_to_origin() {
        let view = PlanarView::new(DVec2::new(800.0, 600.0));
        let world = view.unproject(DVec2::new(400.0, 300.0));
        assert_relative_eq!(world.lat, 0.0, epsilon = 1e-9);
        assert_relative_eq!(world.lng, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_one_unit_is_one_pixel_at_zoom_one() {
        let view = PlanarView::new(DVec2::new(800.0, 600.0));
        let a = view.project(LatLng::new(0.0, 0.0));
        let b = view.project(LatLng::new(0.0, 10.0));
        assert_relative_eq!(a.distance(b), 10.0, epsilon = 1e-9);
        assert_relative_eq!(view.world_per_pixel(), 1.0);
    }

    #[test]
    fn test_pan_pixels_moves_center() {
        let mut view = PlanarView::new(DVec2::new(200.0, 200.0));
        view.zoom_view(2.0);
        view.pan_pixels(DVec2::new(20.0, -10.0));
        let center = view.unproject(DVec2::new(100.0, 100.0));
        assert_relative_eq!(center.lng, 10.0, epsilon = 1e-9);
        assert_relative_eq!(center.lat, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_north_is_up() {
        let view = PlanarView::new(DVec2::new(200.0, 200.0));
        let north = view.project(LatLng::new(10.0, 0.0));
        assert!(north.y < 100.0, "Norden muss oberhalb der Mitte liegen: {north:?}");
    }

    #[test]
    fn test_project_unproject_inverse_with_pan_and_zoom() {
        let mut view = PlanarView::new(DVec2::new(640.0, 480.0));
        view.pan(DVec2::new(30.0, -12.0));
        view.zoom_by(2.5);
        let p = LatLng::new(7.25, -3.5);
        let back = view.unproject(view.project(p));
        assert_relative_eq!(back.lat, p.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, p.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_scales_screen_distance() {
        let mut view = PlanarView::new(DVec2::new(400.0, 400.0));
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(0.0, 5.0);
        let d1 = view.screen_distance(a, b);
        view.zoom_by(2.0);
        let d2 = view.screen_distance(a, b);
        assert_relative_eq!(d2, d1 * 2.0, epsilon = 1e-9);
        // Weltdistanz bleibt unverändert
        assert_relative_eq!(view.distance(a, b), 5.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = PlanarView::new(DVec2::new(100.0, 100.0));
        view.zoom_by(1e6);
        assert_relative_eq!(view.zoom, PlanarView::ZOOM_MAX);
        view.zoom_by(1e-9);
        assert_relative_eq!(view.zoom, PlanarView::ZOOM_MIN);
    }
}
