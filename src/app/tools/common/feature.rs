//! Gemeinsamer Lebenszyklus aller Zeichen-Tools.

use crate::app::host::HostContext;
use crate::app::tools::DrawnShape;

/// Start/Stop-Zustand, Benachrichtigungen und Repeat-Modus.
///
/// Wird von konkreten Tools per Komposition eingebunden.
#[derive(Debug, Clone)]
pub struct FeatureLifecycle {
    kind: &'static str,
    enabled: bool,
    repeat_mode: bool,
}

impl FeatureLifecycle {
    pub fn new(kind: &'static str, repeat_mode: bool) -> Self {
        Self {
            kind,
            enabled: false,
            repeat_mode,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn repeat_mode(&self) -> bool {
        self.repeat_mode
    }

    /// Aktiviert das Tool. Gibt `false` zurück, wenn es schon aktiv war.
    pub fn enable(&mut self, ctx: &mut HostContext<'_>) -> bool {
        if self.enabled {
            return false;
        }
        self.enabled = true;
        ctx.events.draw_start();
        log::info!("Zeichen-Tool '{}' aktiviert", self.kind);
        true
    }

    /// Deaktiviert das Tool und entfernt den Tooltip.
    pub fn disable(&mut self, ctx: &mut HostContext<'_>) -> bool {
        if !self.enabled {
            return false;
        }
        self.enabled = false;
        ctx.tooltip.dispose();
        ctx.events.draw_stop();
        log::info!("Zeichen-Tool '{}' deaktiviert", self.kind);
        true
    }

    /// Liefert die fertige Form an den Host aus.
    pub fn fire_created(&self, ctx: &mut HostContext<'_>, shape: DrawnShape) {
        log::info!(
            "Form '{}' erstellt: {} Anker, {} Kurvenpunkte",
            shape.kind,
            shape.anchors.len(),
            shape.curve.len()
        );
        ctx.events.shape_created(shape);
    }
}
