//! Tooltip-Texte des Zeichen-Tools.

use serde::{Deserialize, Serialize};

/// Konfigurierbare Tooltip-Texte.
///
/// Leere Strings sind erlaubt; der Host zeigt dann nur den Subtext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawLocale {
    /// Vor dem ersten Vertex
    pub start: String,
    /// Nach genau einem Vertex
    pub cont: String,
    /// Ab zwei Vertices
    pub end: String,
    /// Ungültige Geometrie (Selbstschnitt, Validator)
    pub error: String,
}

impl Default for DrawLocale {
    fn default() -> Self {
        Self {
            start: "Klicken, um die Kurve zu beginnen.".to_string(),
            cont: "Klicken, um die Kurve fortzusetzen.".to_string(),
            end: "Letzten Punkt anklicken, um die Kurve abzuschließen.".to_string(),
            error: "Fehler: Kanten dürfen sich nicht kreuzen!".to_string(),
        }
    }
}
