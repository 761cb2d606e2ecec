use std::time::Duration;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Art des Eingabegeräts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Pointer-Ereignis in Screen-Koordinaten.
///
/// `timestamp` ist eine monotone Zeit des Hosts; alle Timer des Tools
/// rechnen relativ dazu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in Screen-Pixeln
    pub screen: DVec2,
    pub kind: PointerKind,
    pub timestamp: Duration,
}

impl PointerEvent {
    pub fn mouse(screen: DVec2, timestamp: Duration) -> Self {
        Self {
            screen,
            kind: PointerKind::Mouse,
            timestamp,
        }
    }

    pub fn touch(screen: DVec2, timestamp: Duration) -> Self {
        Self {
            screen,
            kind: PointerKind::Touch,
            timestamp,
        }
    }

    pub fn is_touch(&self) -> bool {
        self.kind == PointerKind::Touch
    }
}
