//! Bezier-Draw Library.
//! Interaktiver Zeichen-Kern für geglättete Bezier-Linien: Vertex-Erfassung,
//! Kurven-Fit, Messung und Fehler-Feedback hinter Host-Traits.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    BezierDrawTool, DrawController, DrawError, DrawHandler, DrawIntent, DrawSession, DrawnShape,
    HostContext, RecordingHost, SessionState,
};
pub use core::{LatLng, PlanarView, Projection, ViewControl, WebMercatorView};
pub use shared::{CurveFitter, CurveParams, DrawLocale, DrawOptions, ShapeStyle};
