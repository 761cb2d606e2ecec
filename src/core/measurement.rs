//! Laufende Streckenmessung über die rohen Anker (nicht über die Kurve).

/// Kumulierte Pfadlänge der bestätigten Anker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeasurementTracker {
    total: f64,
}

impl MeasurementTracker {
    /// Erstellt einen Tracker mit Gesamtlänge 0.
    pub fn new() -> Self {
        Self { total: 0.0 }
    }

    /// Setzt die Gesamtlänge auf 0 zurück.
    pub fn reset(&mut self) {
        self.total = 0.0;
    }

    /// Addiert die Distanz eines neu bestätigten Ankers.
    pub fn on_commit(&mut self, distance: f64) {
        self.total += distance;
    }

    /// Zieht die Distanz eines entfernten Ankers ab.
    pub fn on_remove(&mut self, distance: f64) {
        self.total -= distance;
    }

    /// Aktuelle Gesamtlänge.
    pub fn current_total(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_commit_then_remove_restores_total() {
        let mut m = MeasurementTracker::new();
        m.on_commit(3.0);
        m.on_commit(4.5);
        let before = m.current_total();
        m.on_commit(0.1);
        m.on_remove(0.1);
        assert_relative_eq!(m.current_total(), before, epsilon = 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut m = MeasurementTracker::new();
        m.on_commit(12.0);
        m.reset();
        assert_eq!(m.current_total(), 0.0);
    }
}
