//! Session-gebundene Timer ohne eigene Threads.
//!
//! Der Host übergibt mit jedem Ereignis eine monotone Zeit und ruft
//! regelmäßig `on_tick(now)`. Ein Timer feuert nur, wenn seine Epoche zur
//! laufenden Session passt; nach einem Teardown ist er garantiert wirkungslos.

use std::time::Duration;

/// Zähler, der bei jedem Session-Teardown erhöht wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionEpoch(u64);

impl SessionEpoch {
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Einmal-Timer mit Frist und Session-Epoche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScopedTimer {
    deadline: Option<Duration>,
    epoch: SessionEpoch,
}

impl ScopedTimer {
    /// Startet den Timer neu (eine laufende Frist wird ersetzt).
    pub fn arm(&mut self, now: Duration, delay: Duration, epoch: SessionEpoch) {
        self.deadline = Some(now.saturating_add(delay));
        self.epoch = epoch;
    }

    /// Stoppt den Timer. Idempotent.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Verbraucht den Timer, wenn die Frist erreicht ist.
    ///
    /// Gibt nur `true` zurück, wenn die Epoche noch zur Session passt.
    pub fn fire_if_due(&mut self, now: Duration, epoch: SessionEpoch) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.epoch == epoch
            }
            _ => false,
        }
    }
}
