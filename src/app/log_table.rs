//! In-App-Protokoll für das Log-Panel.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Zeitstempel-Format der ersten Spalte.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Eine Zeile: Zeitstempel plus die per `;` getrennten Felder der Meldung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    /// Formatierter Zeitstempel
    pub timestamp: String,
    /// Felder der Meldung
    pub fields: Vec<String>,
}

/// Begrenzte Liste von Log-Zeilen; älteste Zeilen fallen zuerst heraus.
#[derive(Debug, Clone)]
pub struct LogTable {
    rows: VecDeque<LogRow>,
    capacity: usize,
}

impl Default for LogTable {
    fn default() -> Self {
        Self::new(crate::shared::options::LOG_CAPACITY)
    }
}

impl LogTable {
    /// Erstellt eine leere Tabelle mit maximal `capacity` Zeilen.
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Hängt eine Meldung mit aktuellem Zeitstempel an.
    pub fn push(&mut self, message: &str) {
        self.push_at(Local::now(), message);
    }

    /// Hängt eine Meldung mit vorgegebenem Zeitstempel an.
    pub fn push_at(&mut self, at: DateTime<Local>, message: &str) {
        if self.rows.len() >= self.capacity {
            self.rows.pop_front();
        }
        self.rows.push_back(LogRow {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            fields: message.split(';').map(str::to_string).collect(),
        });
    }

    /// Alle Zeilen, älteste zuerst.
    pub fn rows(&self) -> impl Iterator<Item = &LogRow> {
        self.rows.iter()
    }

    /// Letzte Zeile.
    pub fn last(&self) -> Option<&LogRow> {
        self.rows.back()
    }

    /// Größte Feldanzahl aller Zeilen (Spaltenzahl der Tabelle ohne Zeitstempel).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.fields.len()).max().unwrap_or(0)
    }

    /// Anzahl der Zeilen.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Gibt `true` zurück, wenn keine Zeilen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Leert die Tabelle.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn push_splits_fields_and_formats_timestamp() {
        let mut log = LogTable::new(10);
        let at = Local
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 2)
            .single()
            .expect("eindeutige Lokalzeit");

        log.push_at(at, "Reload;demo.rml;320x480");

        let row = log.last().expect("Zeile vorhanden");
        assert_eq!(row.timestamp, "07/03/2024 09:05:02");
        assert_eq!(row.fields, vec!["Reload", "demo.rml", "320x480"]);
        assert_eq!(log.column_count(), 3);
    }

    #[test]
    fn capacity_drops_oldest_rows() {
        let mut log = LogTable::new(2);
        log.push("a");
        log.push("b");
        log.push("c");

        let first: Vec<&str> = log.rows().map(|row| row.fields[0].as_str()).collect();
        assert_eq!(first, vec!["b", "c"]);
    }
}
