//! Session-Zustand des Zeichen-Tools.

use std::fmt;

use glam::DVec2;

use super::events::PointerKind;
use crate::core::LatLng;

/// Zustand der laufenden Zeichen-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Vor dem ersten Vertex
    #[default]
    Idle,
    /// Vertices werden gesammelt
    Collecting,
    /// Fehler-Feedback aktiv (überlagert `Collecting`, kehrt automatisch zurück)
    ErrorShown,
    /// Form abgeschlossen und ausgeliefert
    Finished,
}

/// Entprellung der Pointer-Eingabe.
///
/// Ersetzt getrennte Klick/Touch/Sperr-Flags durch einen Zustand:
/// `Armed → Pressed → Cooling → Armed`. Touch springt direkt nach `Cooling`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputDebounce {
    /// Neue Eingabe wird angenommen
    #[default]
    Armed,
    /// Maus gedrückt, wartet auf Loslassen
    Pressed { origin: DVec2, kind: PointerKind },
    /// Kurze Sperre nach dem Loslassen (doppelte Browser-Events)
    Cooling,
}

impl InputDebounce {
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed)
    }

    /// Screen-Position des Drückens, falls gerade gedrückt.
    pub fn press_origin(&self) -> Option<DVec2> {
        match self {
            Self::Pressed { origin, .. } => Some(*origin),
            _ => None,
        }
    }
}

/// Stabile ID eines Vertex innerhalb einer Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Platzierter Marker, 1:1 zu einem Anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub position: LatLng,
}
