//! Trait-basiertes Zeichen-Tool-System.
//!
//! Jedes Zeichen-Tool implementiert den `DrawHandler`-Trait. Gemeinsames
//! Verhalten (Lebenszyklus, Guide, Fehler-Feedback) liegt in `common` und wird
//! per Komposition eingebunden.

/// Bezier-Zeichen-Tool: Vertices per Klick/Tap, geglättete Kurve.
pub mod bezier;
/// Gemeinsame Bausteine für Zeichen-Tools.
pub mod common;
/// DrawHandler-Trait: Schnittstelle für alle Zeichen-Tools.
mod draw_handler;

pub use bezier::{BezierDrawTool, BEZIER_KIND};
pub use draw_handler::{DrawHandler, DrawnShape, ShapeValidator};
