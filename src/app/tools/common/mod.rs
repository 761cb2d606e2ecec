//! Gemeinsame Bausteine für Zeichen-Tools.
//!
//! Aufgeteilt in:
//! - `feature`       : FeatureLifecycle (Start/Stop, Created-Event, Repeat-Modus)
//! - `guide`         : GuideRenderer (gestrichelte Linie / Vorschau-Kurve)
//! - `error_feedback`: ErrorFeedback (Fehler-Tooltip mit Auto-Hide)

mod error_feedback;
mod feature;
mod guide;

pub use error_feedback::ErrorFeedback;
pub use feature::FeatureLifecycle;
pub use guide::GuideRenderer;
