//! Application-Layer: Controller, Session-State, Events und Zeichen-Tools.

pub mod controller;
pub mod error;
pub mod events;
pub mod host;
pub mod intent_log;
mod intent_mapping;
pub mod session;
/// Session- und Eingabe-Zustand des Zeichen-Tools.
pub mod state;
pub mod timers;
pub mod tools;

pub use controller::DrawController;
pub use error::DrawError;
pub use events::{DrawCommand, DrawIntent, PointerEvent, PointerKind};
pub use host::{
    DrawEventSink, HostContext, RecordingHost, RenderSurface, TextKey, TextProvider, Tooltip,
};
pub use intent_log::IntentLog;
pub use session::DrawSession;
pub use state::{InputDebounce, SessionState, Vertex, VertexId};
pub use tools::{BezierDrawTool, DrawHandler, DrawnShape, BEZIER_KIND};
