//! Fehler-Typen der Zeichen-Session.

use thiserror::Error;

/// Abgelehnte Vertex- oder Abschluss-Aktion.
///
/// Geometrie-Fehler zeigt das Tool selbst als Fehler-Feedback an; die Anker
/// bleiben dabei unverändert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrawError {
    /// Die neue Strecke kreuzt eine bestehende
    #[error("Selbstschnitt: neue Strecke kreuzt Segment {segment}")]
    SelfIntersection { segment: usize },

    /// Der Form-Validator hat die Form abgelehnt
    #[error("Form ungültig: {0}")]
    InvalidShape(String),

    /// Aufruf ohne laufende Session
    #[error("Keine aktive Zeichen-Session")]
    Inactive,
}
