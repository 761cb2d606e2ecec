//! Bezier-Zeichen-Tool.
//!
//! Aufgeteilt in:
//! - `state`    : Struct, Konstruktor, Tooltip- und Guide-Hilfen
//! - `vertices` : Setzen, Löschen, Abschließen
//! - `lifecycle`: DrawHandler-Implementierung (Pointer, Timer, Start/Stop)

mod lifecycle;
mod state;
mod vertices;

pub use state::{BezierDrawTool, BEZIER_KIND};

#[cfg(test)]
mod tests;
