//! Reine Geometrie-Funktionen für die Bezier-Glättung einer Anker-Folge.
//!
//! Layer-neutral: keine Session, kein Rendering. Alle Funktionen arbeiten auf
//! `DVec2` (x = lng, y = lat) und liefern bei degenerierten Eingaben
//! (Nullstrecken, deckungsgleiche Punkte) ein gerades bzw. kurzes Segment
//! statt durch 0 zu teilen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Standard-Toleranz für `fuzzy_equal`: fängt nur exakte Duplikate ab.
pub const DEFAULT_FUZZY_EPSILON: f64 = 1e-18;
/// Toleranz für die Erkennung gerader Segmente beim Sampling.
pub const STRAIGHT_SEGMENT_EPSILON: f64 = 1e-10;
/// Zähler der Tangenten-Spannung (Dreieck-Konstruktion).
pub const TENSION_NUMERATOR: f64 = 8.0;
/// Nenner der Tangenten-Spannung (Dreieck-Konstruktion).
pub const TENSION_DENOMINATOR: f64 = 3.0;
/// Mischfaktor der Endpunkt-Handles (Trapez-Konstruktion).
pub const ENDPOINT_BLEND: f64 = 0.6;
/// Schritte pro kubischem Segment (ergibt `SAMPLES_PER_SEGMENT + 1` Punkte).
pub const SAMPLES_PER_SEGMENT: usize = 32;

/// Stellschrauben der Kurven-Glättung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Zähler der Tangenten-Spannung
    pub tension_numerator: f64,
    /// Nenner der Tangenten-Spannung
    pub tension_denominator: f64,
    /// Mischfaktor für die Handles am ersten und letzten Anker
    pub endpoint_blend: f64,
    /// Schritte pro Segment beim Sampling
    pub samples_per_segment: usize,
    /// Toleranz für das Entfernen aufeinanderfolgender Duplikate
    pub dedupe_epsilon: f64,
    /// Toleranz für die Erkennung gerader Segmente
    pub straight_epsilon: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            tension_numerator: TENSION_NUMERATOR,
            tension_denominator: TENSION_DENOMINATOR,
            endpoint_blend: ENDPOINT_BLEND,
            samples_per_segment: SAMPLES_PER_SEGMENT,
            dedupe_epsilon: DEFAULT_FUZZY_EPSILON,
            straight_epsilon: STRAIGHT_SEGMENT_EPSILON,
        }
    }
}

/// `|a - b| <= epsilon`
pub fn fuzzy_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

fn fuzzy_equal_vec(a: DVec2, b: DVec2, epsilon: f64) -> bool {
    fuzzy_equal(a.x, b.x, epsilon) && fuzzy_equal(a.y, b.y, epsilon)
}

/// Entfernt Punkte, die (beide Komponenten) mit ihrem Vorgänger übereinstimmen.
///
/// Reihenfolge bleibt erhalten, das Ergebnis ist idempotent.
pub fn dedupe_consecutive(points: &[DVec2], epsilon: f64) -> Vec<DVec2> {
    let mut result: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points {
        match result.last() {
            Some(&prev) if fuzzy_equal_vec(prev, p, epsilon) => {}
            _ => result.push(p),
        }
    }
    result
}

/// Berechnet die Kontrollpunkt-Folge für eine Anker-Folge.
///
/// Für weniger als 3 Anker wird die Eingabe unverändert kopiert. Sonst hat das
/// Ergebnis `3n - 2` Einträge: Anker auf `3k`, eingehendes Handle auf `3k - 1`,
/// ausgehendes Handle auf `3k + 1`. Der letzte Anker hat kein ausgehendes Handle.
pub fn derive_control_points(anchors: &[DVec2], params: &CurveParams) -> Vec<DVec2> {
    let n = anchors.len();
    if n < 3 {
        return anchors.to_vec();
    }

    let mut points = vec![DVec2::ZERO; 3 * n - 2];
    for (k, &anchor) in anchors.iter().enumerate() {
        points[3 * k] = anchor;
    }

    for k in 1..n - 1 {
        let (ctrl_in, ctrl_out) =
            triangle_handles(anchors[k - 1], anchors[k], anchors[k + 1], params);
        points[3 * k - 1] = ctrl_in;
        points[3 * k + 1] = ctrl_out;
    }

    points[1] = trapezoid_handle(points[0], points[3], points[2], params.endpoint_blend);
    let last = 3 * n - 3;
    points[last - 1] = trapezoid_handle(
        points[last],
        points[last - 3],
        points[last - 2],
        params.endpoint_blend,
    );

    points
}

/// Dreieck-Konstruktion: zwei Tangenten-Handles symmetrisch um `mid`.
///
/// Die Richtung folgt der Sehne `prev → next`; die Handle-Länge skaliert mit
/// der Länge des jeweils angrenzenden Segments.
fn triangle_handles(prev: DVec2, mid: DVec2, next: DVec2, params: &CurveParams) -> (DVec2, DVec2) {
    let shifted = mid + (next - prev);

    // Lotfußpunkt von `shifted` auf die Gerade durch prev und next
    let foot = if prev.x == next.x {
        DVec2::new(prev.x, shifted.y)
    } else if prev.y == next.y {
        DVec2::new(shifted.x, prev.y)
    } else {
        let slope = (next.y - prev.y) / (next.x - prev.x);
        let intercept = prev.y - prev.x * slope;
        let x = (shifted.y + shifted.x / slope - intercept) / (slope + 1.0 / slope);
        DVec2::new(x, slope * x + intercept)
    };

    let chord = mid.distance(shifted);
    let len_in = prev.distance(mid);
    let len_out = mid.distance(next);

    let stretch = if len_in + len_out != 0.0 {
        1.0 + (len_out - len_in) * params.tension_numerator / (len_out + len_in)
    } else {
        1.0
    };
    let target = foot + (shifted - foot) * stretch;

    let divisor = params.tension_denominator * if chord == 0.0 { 1.0 } else { chord };
    let ctrl_in = mid + (mid - target) * len_in / divisor;
    let ctrl_out = mid + (target - mid) * len_out / divisor;
    (ctrl_in, ctrl_out)
}

/// Trapez-Konstruktion: Handle am Kurvenende.
///
/// Das Handle des Nachbar-Ankers wird an der Mittelsenkrechten der Sehne
/// `end → neighbor` gespiegelt und mit `blend` zum Endpunkt hin gemischt.
fn trapezoid_handle(end: DVec2, neighbor: DVec2, neighbor_ctrl: DVec2, blend: f64) -> DVec2 {
    let mirrored = if (end.y - neighbor.y).abs() == 0.0 {
        DVec2::new(end.x + neighbor.x - neighbor_ctrl.x, neighbor_ctrl.y)
    } else if (end.x - neighbor.x).abs() == 0.0 {
        DVec2::new(neighbor_ctrl.x, end.y + neighbor.y - neighbor_ctrl.y)
    } else {
        let slope = (end.y - neighbor.y) / (end.x - neighbor.x);
        let intercept = neighbor_ctrl.y - slope * neighbor_ctrl.x;
        let x = ((neighbor.y + end.y) / 2.0 + (end.x + neighbor.x) / (2.0 * slope) - intercept)
            / (slope + 1.0 / slope);
        let foot = DVec2::new(x, slope * x + intercept);
        2.0 * foot - neighbor_ctrl
    };

    let chord = end.distance(neighbor);
    let reach = end.distance(mirrored);
    let base = if chord > 0.0 {
        end + (neighbor - end) * reach / chord
    } else {
        end
    };
    base + (mirrored - base) * blend
}

/// Tastet die kubischen Segmente einer Kontrollpunkt-Folge ab.
///
/// Blöcke `[anker_k, out_k, in_k+1, anker_k+1]` mit Schrittweite 3. Gerade
/// Segmente (Handles deckungsgleich mit den Ankern) liefern nur die beiden
/// Endpunkte, alle anderen `samples_per_segment + 1` Punkte. Doppelte Punkte
/// an Blockgrenzen bleiben erhalten.
pub fn sample_cubic_bezier(control_points: &[DVec2], params: &CurveParams) -> Vec<DVec2> {
    if control_points.len() < 3 {
        return control_points.to_vec();
    }

    let steps = params.samples_per_segment.max(1);
    let block_count = (control_points.len() - 1) / 3;
    let mut result = Vec::with_capacity(block_count * (steps + 1));

    let mut o = 0;
    while o + 3 < control_points.len() {
        let p0 = control_points[o];
        let p1 = control_points[o + 1];
        let p2 = control_points[o + 2];
        let p3 = control_points[o + 3];

        if fuzzy_equal_vec(p0, p1, params.straight_epsilon)
            && fuzzy_equal_vec(p2, p3, params.straight_epsilon)
        {
            result.push(p0);
            result.push(p3);
        } else {
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                result.push(cubic_bezier_point(p0, p1, p2, p3, t));
            }
        }
        o += 3;
    }

    result
}

/// Punkt auf einer kubischen Bezier-Kurve (t ∈ [0, 1]).
pub fn cubic_bezier_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let w0 = 1.0 - 3.0 * t + 3.0 * t2 - t3;
    let w1 = 3.0 * (t - 2.0 * t2 + t3);
    let w2 = 3.0 * (t2 - t3);
    w0 * p0 + w1 * p1 + w2 * p2 + t3 * p3
}
