//! Glättet eine Anker-Folge zu einer dichten Kurve.
//!
//! Pipeline: Kontrollpunkte ableiten → kubisch abtasten → Duplikate entfernen.
//! Wird bei jeder Änderung komplett neu berechnet, es gibt keinen Cache.

use glam::DVec2;

use super::bezier_geometry::{
    dedupe_consecutive, derive_control_points, sample_cubic_bezier, CurveParams,
};
use crate::core::{lat_lng, LatLng};

/// Zustandsloser Kurven-Glätter mit festen Parametern.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurveFitter {
    params: CurveParams,
}

impl CurveFitter {
    pub fn new(params: CurveParams) -> Self {
        Self { params }
    }

    /// Berechnet die gerenderte Kurve durch alle Anker.
    ///
    /// Weniger als 3 Anker werden unverändert zurückgegeben.
    pub fn fit(&self, anchors: &[LatLng]) -> Vec<LatLng> {
        if anchors.len() < 3 {
            return anchors.to_vec();
        }
        let points = lat_lng::to_vecs(anchors);
        lat_lng::from_vecs(&self.fit_vecs(&points))
    }

    /// Wie [`fit`](Self::fit), aber direkt auf `DVec2` (x = lng, y = lat).
    pub fn fit_vecs(&self, anchors: &[DVec2]) -> Vec<DVec2> {
        if anchors.len() < 3 {
            return anchors.to_vec();
        }
        let control_points = derive_control_points(anchors, &self.params);
        let samples = sample_cubic_bezier(&control_points, &self.params);
        dedupe_consecutive(&samples, self.params.dedupe_epsilon)
    }
}
