//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Kurven-Geometrie, Glättung und Optionen werden von `app` und den
//! Werkzeugen gemeinsam genutzt, ohne Abhängigkeit auf die Session-Logik.

pub mod bezier_geometry;
pub mod curve_fit;
mod locale;
pub mod options;

pub use bezier_geometry::CurveParams;
pub use curve_fit::CurveFitter;
pub use locale::DrawLocale;
pub use options::{DrawErrorOptions, DrawOptions, ShapeStyle};
