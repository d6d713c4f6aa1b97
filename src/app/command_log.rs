//! Command-Verlauf für Diagnose und Tests.

use super::AppCommand;
use std::collections::VecDeque;

/// Ausgeführte Commands als Debug-Text, älteste zuerst.
///
/// Ringpuffer: bei voller Kapazität fällt der älteste Eintrag heraus.
#[derive(Debug, Clone)]
pub struct CommandLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Standard-Kapazität
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Erstellt einen leeren Verlauf mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Erstellt einen leeren Verlauf mit `capacity` Einträgen (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Nimmt einen ausgeführten Command auf.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(format!("{command:?}"));
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch nichts aufgezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Alle Einträge, älteste zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_log_drops_oldest_entry() {
        let mut log = CommandLog::with_capacity(2);
        log.record(&AppCommand::ToggleLogPanel);
        log.record(&AppCommand::ToggleDebugger);
        log.record(&AppCommand::RequestExit);

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.entries().collect::<Vec<_>>(),
            vec!["ToggleDebugger", "RequestExit"]
        );
        assert_eq!(log.last(), Some("RequestExit"));
    }

    #[test]
    fn records_command_fields() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::SetZoomLevel { level: 2.0 });
        assert_eq!(log.last(), Some("SetZoomLevel { level: 2.0 }"));
    }
}
