//! Key/value persistence standing in for browser local storage

use crate::{CoreError, CoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String-keyed store with local storage semantics
pub trait KeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> CoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        (**self).remove(key)
    }
}

pub fn load_json<T, S>(store: &S, key: &str) -> CoreResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> CoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::KeyValueStore;
    use crate::{CoreError, CoreResult};
    use std::path::{Path, PathBuf};

    /// One JSON file per key under a data directory
    #[derive(Debug, Clone)]
    pub struct FileStore {
        root: PathBuf,
    }

    impl FileStore {
        /// Create the directory if needed
        pub fn open(root: impl Into<PathBuf>) -> CoreResult<Self> {
            let root = root.into();
            std::fs::create_dir_all(&root)?;
            Ok(Self { root })
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        fn path_for(&self, key: &str) -> CoreResult<PathBuf> {
            let valid = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
                && !key.starts_with('.');
            if !valid {
                return Err(CoreError::Storage(format!("invalid storage key: {:?}", key)));
            }
            Ok(self.root.join(format!("{}.json", key)))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> CoreResult<Option<String>> {
            let path = self.path_for(key)?;
            match std::fs::read_to_string(&path) {
                Ok(raw) => Ok(Some(raw)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set(&self, key: &str, value: &str) -> CoreResult<()> {
            let path = self.path_for(key)?;
            // Replace atomically: write a sibling, then rename over the key
            let tmp = path.with_extension("json.tmp");
            std::fs::write(&tmp, value)?;
            std::fs::rename(&tmp, &path)?;
            Ok(())
        }

        fn remove(&self, key: &str) -> CoreResult<()> {
            let path = self.path_for(key)?;
            match std::fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Used by front-ends whose storage can refuse writes (quota, private mode)
pub fn storage_error(context: &str, detail: impl std::fmt::Display) -> CoreError {
    CoreError::Storage(format!("{}: {}", context, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        count: u32,
    }

    #[test]
    fn test_memory_store_shares_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));

        other.remove("k").unwrap();
        assert!(!store.contains("k"));
        store.remove("missing").unwrap();
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::new();
        let record = Record {
            name: "a".into(),
            count: 3,
        };
        save_json(&store, "record", &record).unwrap();

        let loaded: Option<Record> = load_json(&store, "record").unwrap();
        assert_eq!(loaded, Some(record));

        let missing: Option<Record> = load_json(&store, "nope").unwrap();
        assert!(missing.is_none());

        store.set("broken", "{not json").unwrap();
        let broken: CoreResult<Option<Record>> = load_json(&store, "broken");
        assert!(matches!(broken, Err(CoreError::Json(_))));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nested")).unwrap();

        assert!(store.get("user").unwrap().is_none());
        store.set("user", r#"{"id":"1"}"#).unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some(r#"{"id":"1"}"#));
        assert!(store.root().join("user.json").exists());

        let reopened = FileStore::open(store.root()).unwrap();
        assert!(reopened.get("user").unwrap().is_some());

        reopened.remove("user").unwrap();
        reopened.remove("user").unwrap();
        assert!(store.get("user").unwrap().is_none());
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        assert!(matches!(store.set("../escape", "x"), Err(CoreError::Storage(_))));
        assert!(store.get("a/b").is_err());
        assert!(store.set("", "x").is_err());
        assert!(store.set("digital-guardian-uploads", "[]").is_ok());
    }
}
