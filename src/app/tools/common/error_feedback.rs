//! Zeitlich begrenztes Fehler-Feedback (Tooltip, Pfad- und Guide-Farbe).

use std::time::Duration;

use crate::app::host::HostContext;
use crate::app::timers::{ScopedTimer, SessionEpoch};
use crate::shared::DrawErrorOptions;

/// Fehler-Anzeige mit Auto-Hide.
#[derive(Debug, Clone)]
pub struct ErrorFeedback {
    shown: bool,
    timer: ScopedTimer,
    color: String,
    timeout: Duration,
}

impl ErrorFeedback {
    pub fn new(options: &DrawErrorOptions) -> Self {
        Self {
            shown: false,
            timer: ScopedTimer::default(),
            color: options.color.clone(),
            timeout: options.timeout(),
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Zeigt die Meldung und färbt Pfad und Guide ein.
    ///
    /// Ein laufender Auto-Hide-Timer wird neu gestartet.
    pub fn show(
        &mut self,
        ctx: &mut HostContext<'_>,
        message: &str,
        now: Duration,
        epoch: SessionEpoch,
    ) {
        self.shown = true;

        ctx.tooltip.show_as_error();
        ctx.tooltip.update_content(message, None);

        ctx.surface.set_guide_color(&self.color);
        ctx.surface.set_path_color(&self.color);

        self.clear_timer();
        self.timer.arm(now, self.timeout, epoch);
    }

    /// Nimmt die Fehler-Darstellung zurück.
    ///
    /// Der Tooltip-Inhalt wird vom Tool danach neu gesetzt.
    pub fn hide(&mut self, ctx: &mut HostContext<'_>, shape_color: &str) {
        self.shown = false;
        self.clear_timer();

        ctx.tooltip.remove_error();
        ctx.surface.set_guide_color(shape_color);
        ctx.surface.set_path_color(shape_color);
    }

    /// Stoppt den Auto-Hide-Timer. Idempotent.
    pub fn clear_timer(&mut self) {
        self.timer.cancel();
    }

    /// `true`, wenn der Auto-Hide-Timer jetzt fällig geworden ist.
    pub fn poll(&mut self, now: Duration, epoch: SessionEpoch) -> bool {
        self.timer.fire_if_due(now, epoch) && self.shown
    }

    /// Zustand ohne Host-Aufrufe verwerfen (Teardown).
    pub fn reset(&mut self) {
        self.shown = false;
        self.clear_timer();
    }
}
