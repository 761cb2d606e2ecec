//! Geographische Koordinate (Anker-Punkt) und Umrechnung in die Geometrie-Ebene.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geographische Koordinate in Grad.
///
/// Für die Geometrie-Berechnungen wird `lng` als x- und `lat` als y-Achse
/// interpretiert (siehe [`LatLng::to_vec`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine neue Koordinate.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Geometrie-Vektor mit `x = lng`, `y = lat`.
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Umkehrung von [`LatLng::to_vec`].
    pub fn from_vec(v: DVec2) -> Self {
        Self { lat: v.y, lng: v.x }
    }

    /// Prüft, ob beide Komponenten endlich sind.
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Wandelt eine Anker-Liste in Geometrie-Vektoren um.
pub fn to_vecs(points: &[LatLng]) -> Vec<DVec2> {
    points.iter().map(|p| p.to_vec()).collect()
}

/// Wandelt Geometrie-Vektoren zurück in Koordinaten.
pub fn from_vecs(points: &[DVec2]) -> Vec<LatLng> {
    points.iter().map(|&v| LatLng::from_vec(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_axes_are_lng_lat() {
        let p = LatLng::new(52.5, 13.4);
        let v = p.to_vec();
        assert_eq!(v.x, 13.4);
        assert_eq!(v.y, 52.5);
        assert_eq!(LatLng::from_vec(v), p);
    }

    #[test]
    fn test_tuple_conversion_is_lat_first() {
        let p: LatLng = (1.0, 2.0).into();
        assert_eq!(p.lat, 1.0);
        assert_eq!(p.lng, 2.0);
    }
}
