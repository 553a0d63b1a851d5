use std::collections::HashMap;

use crate::constants::DRAW_DATA_KEY;
use crate::draw::DrawResult;
use crate::error::DrawError;

/// Session-scoped string key-value storage the draw record is handed through.
pub trait DrawStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-process store, lives as long as the session that owns it.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DrawStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Serialize `result` under the draw key, replacing any earlier draw.
pub fn save_draw<S: DrawStore + ?Sized>(store: &mut S, result: &DrawResult) -> Result<(), DrawError> {
    let json = serde_json::to_string(result)?;
    store.set(DRAW_DATA_KEY, json);
    Ok(())
}

/// Read the draw record back and check it is consistent.
pub fn load_draw<S: DrawStore + ?Sized>(store: &S) -> Result<DrawResult, DrawError> {
    let json = store.get(DRAW_DATA_KEY).ok_or(DrawError::MissingRecord)?;
    let result: DrawResult = serde_json::from_str(&json)?;
    result.validate()?;
    Ok(result)
}
