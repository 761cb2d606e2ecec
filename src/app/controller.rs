//! Application Controller für zentrale Event-Verarbeitung.

use anyhow::bail;

use super::intent_mapping::map_intent_to_commands;
use super::tools::DrawHandler;
use super::{DrawCommand, DrawIntent, DrawSession};
use crate::core::ViewControl;

/// Orchestriert Host-Intents auf Tool und Ansicht.
#[derive(Debug, Default)]
pub struct DrawController;

impl DrawController {
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<V: ViewControl>(
        &mut self,
        session: &mut DrawSession<V>,
        intent: DrawIntent,
    ) -> anyhow::Result<()> {
        session.intent_log.record(&intent);
        for command in map_intent_to_commands(intent) {
            self.handle_command(session, command)?;
        }
        Ok(())
    }

    /// Führt einen Command auf Tool bzw. Ansicht aus.
    pub fn handle_command<V: ViewControl>(
        &mut self,
        session: &mut DrawSession<V>,
        command: DrawCommand,
    ) -> anyhow::Result<()> {
        log::trace!("Command: {:?}", command);

        // Ansicht zuerst: der HostContext leiht sie nur lesend
        match &command {
            DrawCommand::PanView { delta } => {
                if !delta.is_finite() {
                    bail!("Ungültige Pan-Distanz: {delta:?}");
                }
                session.view.pan_pixels(*delta);
                return Ok(());
            }
            DrawCommand::ZoomView { factor } => {
                if !factor.is_finite() || *factor <= 0.0 {
                    bail!("Ungültiger Zoom-Faktor: {factor}");
                }
                session.view.zoom_view(*factor);
                return Ok(());
            }
            _ => {}
        }

        let tool = &mut session.tool;
        let mut ctx = session.host.context(&session.view, &session.locale);

        match command {
            DrawCommand::StartSession => tool.start(&mut ctx),
            DrawCommand::StopSession => tool.stop(&mut ctx),
            DrawCommand::PointerDown(event) => tool.on_pointer_down(&mut ctx, &event),
            DrawCommand::PointerMove(event) => tool.on_pointer_move(&mut ctx, &event),
            DrawCommand::PointerUp(event) => tool.on_pointer_up(&mut ctx, &event),
            DrawCommand::CancelInput => tool.on_cancel(&mut ctx),
            DrawCommand::PointerOut => tool.on_pointer_out(&mut ctx),
            DrawCommand::VertexClick { index, now } => tool.on_vertex_click(&mut ctx, index, now),
            DrawCommand::DeleteLastVertex => tool.delete_last_vertex(&mut ctx),
            DrawCommand::CompleteShape => tool.complete_shape(&mut ctx),
            DrawCommand::ViewChanged => tool.on_view_changed(&mut ctx),
            DrawCommand::Tick { now } => tool.on_tick(&mut ctx, now),
            DrawCommand::PanView { .. } | DrawCommand::ZoomView { .. } => {}
        }

        Ok(())
    }
}
