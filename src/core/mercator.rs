//! Sphärische Web-Mercator-Ansicht (256-px-Kacheln) mit Haversine-Distanz.

use glam::DVec2;

use super::{LatLng, Projection, ViewControl};

/// Erdradius für die Distanzberechnung (Meter).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Radius der sphärischen Mercator-Projektion (Meter).
const MERCATOR_RADIUS_M: f64 = 6_378_137.0;
/// Maximaler darstellbarer Breitengrad.
const MAX_LATITUDE: f64 = 85.051_128_779_8;
/// Kachelgröße in Pixeln bei Zoom 0.
const TILE_SIZE: f64 = 256.0;

/// Kartenansicht im Web-Mercator-System.
#[derive(Debug, Clone)]
pub struct WebMercatorView {
    /// Koordinate in der Viewport-Mitte
    pub center: LatLng,
    /// Zoomstufe (darf gebrochen sein)
    pub zoom: f64,
    /// Viewport-Größe in Pixeln
    pub viewport_size: DVec2,
}

impl WebMercatorView {
    /// Erstellt eine neue Ansicht.
    pub fn new(center: LatLng, zoom: f64, viewport_size: DVec2) -> Self {
        Self {
            center,
            zoom,
            viewport_size,
        }
    }

    fn scale(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Koordinate → absolute Pixel-Position auf der Weltkarte.
    fn world_pixel(&self, point: LatLng) -> DVec2 {
        let d = std::f64::consts::PI / 180.0;
        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let sin = (lat * d).sin();
        let x = MERCATOR_RADIUS_M * point.lng * d;
        let y = MERCATOR_RADIUS_M * ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
        let k = 0.5 / (std::f64::consts::PI * MERCATOR_RADIUS_M);
        DVec2::new(k * x + 0.5, -k * y + 0.5) * self.scale()
    }

    fn world_pixel_to_lat_lng(&self, pixel: DVec2) -> LatLng {
        let d = 180.0 / std::f64::consts::PI;
        let k = 0.5 / (std::f64::consts::PI * MERCATOR_RADIUS_M);
        let unit = pixel / self.scale();
        let x = (unit.x - 0.5) / k;
        let y = (unit.y - 0.5) / -k;
        LatLng::new(
            (2.0 * (y / MERCATOR_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2) * d,
            x * d / MERCATOR_RADIUS_M,
        )
    }
}

/// Großkreis-Distanz (Haversine) in Metern.
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let rad = std::f64::consts::PI / 180.0;
    let lat1 = a.lat * rad;
    let lat2 = b.lat * rad;
    let sin_d_lat = ((b.lat - a.lat) * rad / 2.0).sin();
    let sin_d_lon = ((b.lng - a.lng) * rad / 2.0).sin();
    let h = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lon * sin_d_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

impl Projection for WebMercatorView {
    fn project(&self, point: LatLng) -> DVec2 {
        self.world_pixel(point) - self.world_pixel(self.center) + self.viewport_size / 2.0
    }

    fn unproject(&self, screen: DVec2) -> LatLng {
        let pixel = screen - self.viewport_size / 2.0 + self.world_pixel(self.center);
        self.world_pixel_to_lat_lng(pixel)
    }

    fn distance(&self, a: LatLng, b: LatLng) -> f64 {
        haversine_distance(a, b)
    }
}

impl ViewControl for WebMercatorView {
    fn pan_pixels(&mut self, delta: DVec2) {
        let pixel = self.world_pixel(self.center) + delta;
        self.center = self.world_pixel_to_lat_lng(pixel);
    }

    fn zoom_view(&mut self, factor: f64) {
        if factor > 0.0 {
            self.zoom += factor.log2();
        }
    }
}
