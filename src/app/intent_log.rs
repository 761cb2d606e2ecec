//! Begrenztes Log der verarbeiteten Intents (Replay, Fehlersuche).

use super::DrawIntent;

/// Speichert verarbeitete Intents in Reihenfolge.
#[derive(Debug, Default)]
pub struct IntentLog {
    entries: Vec<DrawIntent>,
}

impl IntentLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen Intent hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, intent: &DrawIntent) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(intent.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[DrawIntent] {
        &self.entries
    }
}
