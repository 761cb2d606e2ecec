//! Mapping von Draw-Intents auf mutierende Draw-Commands.

use std::time::Duration;

use glam::DVec2;

use super::events::{DrawCommand, DrawIntent, PointerEvent, PointerKind};

fn pointer(x: f64, y: f64, kind: PointerKind, at_ms: u64) -> PointerEvent {
    PointerEvent {
        screen: DVec2::new(x, y),
        kind,
        timestamp: Duration::from_millis(at_ms),
    }
}

/// Übersetzt einen `DrawIntent` in eine Sequenz ausführbarer `DrawCommand`s.
pub fn map_intent_to_commands(intent: DrawIntent) -> Vec<DrawCommand> {
    match intent {
        DrawIntent::Start => vec![DrawCommand::StartSession],
        DrawIntent::Stop => vec![DrawCommand::StopSession],
        DrawIntent::PointerDown { x, y, kind, at_ms } => {
            vec![DrawCommand::PointerDown(pointer(x, y, kind, at_ms))]
        }
        DrawIntent::PointerMove { x, y, kind, at_ms } => {
            vec![DrawCommand::PointerMove(pointer(x, y, kind, at_ms))]
        }
        DrawIntent::PointerUp { x, y, kind, at_ms } => {
            vec![DrawCommand::PointerUp(pointer(x, y, kind, at_ms))]
        }
        DrawIntent::Click { x, y, kind, at_ms } => {
            let event = pointer(x, y, kind, at_ms);
            vec![DrawCommand::PointerDown(event), DrawCommand::PointerUp(event)]
        }
        DrawIntent::Cancel => vec![DrawCommand::CancelInput],
        DrawIntent::PointerOut => vec![DrawCommand::PointerOut],
        DrawIntent::VertexClicked { index, at_ms } => vec![DrawCommand::VertexClick {
            index,
            now: Duration::from_millis(at_ms),
        }],
        DrawIntent::DeleteLastVertexRequested => vec![DrawCommand::DeleteLastVertex],
        DrawIntent::FinishRequested => vec![DrawCommand::CompleteShape],
        DrawIntent::PanView { dx, dy } => vec![
            DrawCommand::PanView {
                delta: DVec2::new(dx, dy),
            },
            DrawCommand::ViewChanged,
        ],
        DrawIntent::ZoomView { factor } => {
            vec![DrawCommand::ZoomView { factor }, DrawCommand::ViewChanged]
        }
        DrawIntent::Tick { at_ms } => vec![DrawCommand::Tick {
            now: Duration::from_millis(at_ms),
        }],
    }
}
