//! In-memory storage medium for tests and storage-less degraded runs.

use super::{StorageMedium, StorageResult};
use std::collections::HashMap;

/// Hash-map medium; never fails.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl StorageMedium for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStorage;
    use crate::storage::StorageMedium;

    #[test]
    fn behaves_like_a_key_value_map() {
        let mut medium = MemoryStorage::default();

        assert_eq!(medium.get("a").unwrap(), None);
        medium.set("a", "1").unwrap();
        medium.set("a", "2").unwrap();
        assert_eq!(medium.get("a").unwrap().as_deref(), Some("2"));

        medium.remove("a").unwrap();
        medium.remove("a").unwrap();
        assert_eq!(medium.get("a").unwrap(), None);
    }
}
