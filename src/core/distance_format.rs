//! Formatierung von Distanzen für den Tooltip.
//!
//! Der Kern liefert nur die Rohsumme plus Einheiten-Präferenzen; die
//! Darstellung übernimmt ein `DistanceFormatter` des Hosts. `ReadableDistance`
//! ist die Standard-Implementierung.

use serde::{Deserialize, Serialize};

/// Nachkommastellen je Einheit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistancePrecision {
    pub km: usize,
    pub m: usize,
    pub mi: usize,
    pub yd: usize,
    pub ft: usize,
    pub nm: usize,
}

impl Default for DistancePrecision {
    fn default() -> Self {
        Self {
            km: 2,
            m: 0,
            mi: 2,
            yd: 0,
            ft: 0,
            nm: 2,
        }
    }
}

/// Einheiten-Präferenzen für die Anzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceUnits {
    /// Metrisch (m / km) anzeigen
    pub metric: bool,
    /// Nicht metrisch: Fuß statt Yards
    pub feet: bool,
    /// Nicht metrisch, keine Fuß: Seemeilen
    pub nautic: bool,
    /// Nachkommastellen
    pub precision: DistancePrecision,
}

impl Default for DistanceUnits {
    fn default() -> Self {
        Self {
            metric: true,
            feet: true,
            nautic: false,
            precision: DistancePrecision::default(),
        }
    }
}

/// Formatiert eine Distanz in Metern für die Anzeige.
pub trait DistanceFormatter {
    fn format(&self, meters: f64, units: &DistanceUnits) -> String;
}

/// Standard-Formatierung (m/km, ft, nm, yd/mi).
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadableDistance;

impl DistanceFormatter for ReadableDistance {
    fn format(&self, meters: f64, units: &DistanceUnits) -> String {
        readable_distance(meters, units)
    }
}

const YARDS_PER_METER: f64 = 1.09361;
const NAUTIC_PER_METER: f64 = 0.53996;

/// Lesbare Distanz-Darstellung.
pub fn readable_distance(meters: f64, units: &DistanceUnits) -> String {
    let p = &units.precision;
    if units.metric {
        if meters > 1000.0 {
            format!("{:.*} km", p.km, meters / 1000.0)
        } else {
            format!("{:.*} m", p.m, meters)
        }
    } else if units.feet {
        format!("{:.*} ft", p.ft, meters * YARDS_PER_METER * 3.0)
    } else if units.nautic {
        format!("{:.*} nm", p.nm, meters * NAUTIC_PER_METER / 1000.0)
    } else {
        let yards = meters * YARDS_PER_METER;
        if yards > 1760.0 {
            format!("{:.*} mi", p.mi, yards / 1760.0)
        } else {
            format!("{:.*} yd", p.yd, yards)
        }
    }
}
