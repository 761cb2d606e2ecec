//! Zustand einer Replay- bzw. Host-Sitzung: Tool, Ansicht und Host.

use super::host::RecordingHost;
use super::tools::{BezierDrawTool, DrawnShape};
use super::IntentLog;
use crate::core::ViewControl;
use crate::shared::{DrawLocale, DrawOptions};

/// Alles, was der `DrawController` für einen Intent braucht.
pub struct DrawSession<V: ViewControl> {
    /// Aktives Zeichen-Tool
    pub tool: BezierDrawTool,
    /// Ansicht (Projektion, Pan, Zoom)
    pub view: V,
    /// Aufzeichnender Host
    pub host: RecordingHost,
    /// Tooltip-Texte
    pub locale: DrawLocale,
    /// Verlauf verarbeiteter Intents
    pub intent_log: IntentLog,
}

impl<V: ViewControl> DrawSession<V> {
    /// Erstellt eine Sitzung mit inaktivem Tool.
    pub fn new(options: DrawOptions, view: V) -> Self {
        Self {
            locale: options.locale.clone(),
            tool: BezierDrawTool::new(options),
            view,
            host: RecordingHost::new(),
            intent_log: IntentLog::new(),
        }
    }

    /// Bisher ausgelieferte Formen.
    pub fn created_shapes(&self) -> Vec<&DrawnShape> {
        self.host.events.created_shapes()
    }
}
