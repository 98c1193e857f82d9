use crate::error::StoreError;
use crate::model::{QuizResult, RiskProfile};
use std::cell::RefCell;
use std::collections::HashMap;

/// Fixed key of the durable slot holding the quiz result.
pub const QUIZ_RESULT_KEY: &str = "finaware_quiz_result";

/// Client-scoped key-value storage holding opaque serialized text.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}

/// Read/write/clear service for the persisted quiz result.
///
/// The only component that touches [`QUIZ_RESULT_KEY`]; pages ask it instead
/// of reading storage directly.
#[derive(Debug, Default)]
pub struct ResultStore<S> {
    slot: S,
    /// Last unreadable value already reported, so the per-frame reads warn once.
    reported: RefCell<Option<String>>,
}

impl<S: KeyValueStore> ResultStore<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            reported: RefCell::new(None),
        }
    }

    /// Writes `profile` stamped with the current time, replacing any prior result.
    pub fn persist_result(&mut self, profile: RiskProfile) -> Result<QuizResult, StoreError> {
        let result = QuizResult::now(profile);
        self.persist(&result)?;
        Ok(result)
    }

    pub fn persist(&mut self, result: &QuizResult) -> Result<(), StoreError> {
        let json = serde_json::to_string(result)?;
        self.slot.set(QUIZ_RESULT_KEY, &json)
    }

    /// Stored result, or `None` when the slot is empty or holds anything that
    /// does not decode to a profile tag plus a timestamp.
    pub fn load_result(&self) -> Option<QuizResult> {
        let stored = self.slot.get(QUIZ_RESULT_KEY)?;
        match serde_json::from_str(&stored) {
            Ok(result) => Some(result),
            Err(e) => {
                let mut reported = self.reported.borrow_mut();
                if reported.as_deref() != Some(stored.as_str()) {
                    log::warn!("ignoring unreadable quiz result: {e}");
                    *reported = Some(stored);
                }
                None
            }
        }
    }

    pub fn clear_result(&mut self) -> Result<(), StoreError> {
        self.slot.remove(QUIZ_RESULT_KEY)
    }

    pub fn has_completed(&self) -> bool {
        self.load_result().is_some()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }
}
