use super::ResourceResolver;
use indexmap::IndexSet;
use std::path::PathBuf;

/// Geordnete, duplikatfreie Suchpfad-Liste.
#[derive(Debug, Clone, Default)]
pub struct SearchPaths {
    paths: IndexSet<PathBuf>,
}

impl SearchPaths {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self {
            paths: IndexSet::new(),
        }
    }

    /// Anzahl registrierter Pfade.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Gibt `true` zurück, wenn keine Pfade registriert sind.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl ResourceResolver for SearchPaths {
    fn add_search_path(&mut self, path: PathBuf) -> bool {
        let added = self.paths.insert(path);
        if added {
            log::debug!(
                "Suchpfad registriert: {}",
                self.paths.last().map(|p| p.display().to_string()).unwrap_or_default()
            );
        }
        added
    }

    fn search_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_paths_are_registered_once() {
        let mut paths = SearchPaths::new();
        assert!(paths.add_search_path(PathBuf::from("/a")));
        assert!(paths.add_search_path(PathBuf::from("/b")));
        assert!(!paths.add_search_path(PathBuf::from("/a")));
        assert_eq!(
            paths.search_paths(),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }
}
