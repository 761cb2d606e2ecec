//! Selbstschnitt-Test für offene Polylines (Screen-Raum).

use glam::DVec2;

/// Orientierungstest: liegen `p`, `p1`, `p2` gegen den Uhrzeigersinn?
fn is_counter_clockwise(p: DVec2, p1: DVec2, p2: DVec2) -> bool {
    (p2.y - p.y) * (p1.x - p.x) > (p1.y - p.y) * (p2.x - p.x)
}

/// Prüft, ob sich die Strecken `p→p1` und `p2→p3` schneiden.
///
/// Gemeinsame Endpunkte und kollineare Berührungen zählen nicht als Schnitt.
pub fn segments_intersect(p: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> bool {
    is_counter_clockwise(p, p2, p3) != is_counter_clockwise(p1, p2, p3)
        && is_counter_clockwise(p, p1, p2) != is_counter_clockwise(p, p1, p3)
}

/// Prüft, ob die neue Strecke vom letzten Punkt zu `candidate` eine der
/// bestehenden Strecken kreuzt.
///
/// Die direkt angrenzende letzte Strecke wird nicht geprüft. Mit weniger als
/// drei bestehenden Punkten ist kein Schnitt möglich.
pub fn new_point_intersects(points: &[DVec2], candidate: DVec2) -> bool {
    first_crossed_segment(points, candidate).is_some()
}

/// Wie [`new_point_intersects`], liefert aber den Index `j` des gekreuzten
/// Segments `points[j - 1] → points[j]` (Suche vom Ende her).
pub fn first_crossed_segment(points: &[DVec2], candidate: DVec2) -> Option<usize> {
    if points.len() < 3 {
        return None;
    }
    let last = points[points.len() - 1];
    let max_index = points.len() - 2;
    (1..=max_index)
        .rev()
        .find(|&j| segments_intersect(last, candidate, points[j - 1], points[j]))
}
