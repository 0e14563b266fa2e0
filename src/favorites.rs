//! Favorites set persisted in the key-value store
//!
//! The set is stored as a JSON array of country names under
//! [`FAVORITES_KEY`]. Every check reads the stored value and every toggle
//! rewrites it whole, so the file is always the source of truth.

use crate::constants::FAVORITES_KEY;
use crate::storage::{KeyValueStore, Result, StorageError};

pub struct Favorites {
    store: Box<dyn KeyValueStore>,
}

impl Favorites {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Favorites { store }
    }

    /// Stored names in insertion order, without duplicates
    pub fn names(&self) -> Result<Vec<String>> {
        let Some(raw) = self.store.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(list) => Ok(dedup(list)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored favorites unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        match self.names() {
            Ok(names) => names.iter().any(|n| n == name),
            Err(e) => {
                tracing::warn!(error = %e, name, "Favorite lookup failed");
                false
            }
        }
    }

    /// Add `name` if absent, remove it if present. Returns the new membership.
    pub fn toggle(&self, name: &str) -> Result<bool> {
        let mut names = self.names()?;
        let now_favorite = if let Some(pos) = names.iter().position(|n| n == name) {
            names.remove(pos);
            false
        } else {
            names.push(name.to_string());
            true
        };

        let raw = serde_json::to_string(&names).map_err(|source| StorageError::Serialize {
            key: FAVORITES_KEY.to_string(),
            source,
        })?;
        self.store.set(FAVORITES_KEY, &raw)?;

        tracing::info!(name, favorite = now_favorite, count = names.len(), "Favorite toggled");
        Ok(now_favorite)
    }
}

fn dedup(list: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(list.len());
    for name in list {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::tempdir;

    fn memory_favorites() -> Favorites {
        Favorites::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_starts_empty() {
        let favs = memory_favorites();
        assert!(favs.names().unwrap().is_empty());
        assert!(!favs.is_favorite("Portugal"));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let favs = memory_favorites();
        assert!(favs.toggle("Portugal").unwrap());
        assert!(favs.is_favorite("Portugal"));
        assert_eq!(favs.names().unwrap(), vec!["Portugal"]);

        assert!(!favs.toggle("Portugal").unwrap());
        assert!(!favs.is_favorite("Portugal"));
        assert!(favs.names().unwrap().is_empty());
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let favs = memory_favorites();
        favs.toggle("Spain").unwrap();
        favs.toggle("Japan").unwrap();
        let before = favs.names().unwrap();

        for name in ["Spain", "Chile"] {
            favs.toggle(name).unwrap();
            favs.toggle(name).unwrap();
            let mut after = favs.names().unwrap();
            let mut expected = before.clone();
            after.sort();
            expected.sort();
            assert_eq!(after, expected, "after double toggle of {name}");
        }
    }

    #[test]
    fn test_duplicates_in_storage_are_collapsed() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, r#"["Peru","Peru","Chad"]"#).unwrap();
        let favs = Favorites::new(Box::new(store));
        assert_eq!(favs.names().unwrap(), vec!["Peru", "Chad"]);

        assert!(!favs.toggle("Peru").unwrap());
        assert!(!favs.is_favorite("Peru"));
        assert_eq!(favs.names().unwrap(), vec!["Chad"]);
    }

    #[test]
    fn test_corrupt_value_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "not json").unwrap();
        let favs = Favorites::new(Box::new(store));
        assert!(favs.names().unwrap().is_empty());
        assert!(favs.toggle("Peru").unwrap());
        assert_eq!(favs.names().unwrap(), vec!["Peru"]);
    }

    #[test]
    fn test_persisted_as_json_list() {
        let dir = tempdir().unwrap();
        let favs = Favorites::new(Box::new(FileStore::open(dir.path()).unwrap()));
        favs.toggle("Portugal").unwrap();
        favs.toggle("Brazil").unwrap();

        let raw = std::fs::read_to_string(dir.path().join("favorites.json")).unwrap();
        assert_eq!(raw, r#"["Portugal","Brazil"]"#);

        let reopened = Favorites::new(Box::new(FileStore::open(dir.path()).unwrap()));
        assert!(reopened.is_favorite("Brazil"));
    }
}
