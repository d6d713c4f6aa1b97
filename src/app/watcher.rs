//! Live-Reload: Dateiüberwachung der geöffneten Markup-Datei.
//!
//! Überwacht wird das Elternverzeichnis (nicht rekursiv), gefiltert auf die
//! Dokumentdatei. So lösen auch Editoren, die per Rename speichern, weiterhin
//! einen Reload aus. Benachrichtigungen laufen über einen Channel und werden
//! vom Host auf dem UI-Thread abgeholt.

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Port für die Dateiüberwachung.
pub trait PathWatcher {
    /// Beginnt die Überwachung einer Datei.
    fn watch(&mut self, path: &Path) -> anyhow::Result<()>;

    /// Beendet die Überwachung einer Datei.
    fn unwatch(&mut self, path: &Path);
}

/// Callback, der den Host nach einer Benachrichtigung aufweckt.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Überwachte Dateien: kanonischer Pfad → Pfad wie vom Aufrufer übergeben.
type Targets = Arc<Mutex<HashMap<PathBuf, PathBuf>>>;

/// `notify`-basierte Überwachung.
pub struct LiveReloadWatcher {
    watcher: RecommendedWatcher,
    targets: Targets,
    directories: HashMap<PathBuf, usize>,
}

impl LiveReloadWatcher {
    /// Erstellt den Watcher; geänderte Pfade gehen an `sender`.
    pub fn new(sender: Sender<PathBuf>, waker: Option<Waker>) -> anyhow::Result<Self> {
        let targets: Targets = Arc::new(Mutex::new(HashMap::new()));
        let callback_targets = targets.clone();

        let watcher = notify::recommended_watcher(move |result: notify::Result<notify::Event>| {
            let event = match result {
                Ok(event) => event,
                Err(e) => {
                    log::warn!("Dateiüberwachung meldet Fehler: {}", e);
                    return;
                }
            };
            if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                return;
            }
            let Ok(targets) = callback_targets.lock() else {
                return;
            };
            for path in &event.paths {
                if let Some(original) = targets.get(path) {
                    if sender.send(original.clone()).is_ok() {
                        if let Some(waker) = &waker {
                            waker();
                        }
                    }
                }
            }
        })?;

        Ok(Self {
            watcher,
            targets,
            directories: HashMap::new(),
        })
    }
}

fn canonical_parts(path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let canonical = std::fs::canonicalize(path)?;
    let directory = canonical
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("kein Elternverzeichnis: {}", canonical.display()))?;
    Ok((canonical, directory))
}

impl PathWatcher for LiveReloadWatcher {
    fn watch(&mut self, path: &Path) -> anyhow::Result<()> {
        let (canonical, directory) = canonical_parts(path)?;
        let mut targets = self
            .targets
            .lock()
            .map_err(|_| anyhow::anyhow!("Watcher-Lock vergiftet"))?;
        if targets.contains_key(&canonical) {
            return Ok(());
        }

        // erst registrieren, wenn notify das Verzeichnis angenommen hat
        let count = self.directories.get(&directory).copied().unwrap_or(0);
        if count == 0 {
            self.watcher.watch(&directory, RecursiveMode::NonRecursive)?;
        }
        self.directories.insert(directory, count + 1);
        targets.insert(canonical, path.to_path_buf());
        log::info!("Überwache {}", path.display());
        Ok(())
    }

    fn unwatch(&mut self, path: &Path) {
        let Ok((canonical, directory)) = canonical_parts(path) else {
            return;
        };
        let removed = match self.targets.lock() {
            Ok(mut targets) => targets.remove(&canonical).is_some(),
            Err(_) => false,
        };
        if !removed {
            return;
        }
        if let Some(count) = self.directories.get_mut(&directory) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.directories.remove(&directory);
                if let Err(e) = self.watcher.unwatch(&directory) {
                    log::warn!("Überwachung von {} nicht beendet: {}", directory.display(), e);
                }
            }
        }
    }
}

/// Holt alle anstehenden Änderungen ab; doppelte Pfade werden zusammengefasst.
pub fn drain_changed_paths(receiver: &Receiver<PathBuf>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for path in receiver.try_iter() {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}
