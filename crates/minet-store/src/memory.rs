use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::names::validate_slot_name;
use crate::traits::SlotStore;

/// In-memory, HashMap-based slot store.
///
/// Intended for tests and ephemeral sessions. All slots are held in memory
/// behind a `RwLock`; data is lost when the store is dropped.
pub struct InMemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemorySlotStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of slots currently stored.
    pub fn len(&self) -> usize {
        self.slots.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.read().expect("lock poisoned").is_empty()
    }

    /// Remove all slots from the store.
    pub fn clear(&self) {
        self.slots.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemorySlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotStore for InMemorySlotStore {
    fn read_slot(&self, name: &str) -> StoreResult<Option<String>> {
        validate_slot_name(name)?;
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots.get(name).cloned())
    }

    fn write_slot(&self, name: &str, contents: &str) -> StoreResult<()> {
        validate_slot_name(name)?;
        let mut slots = self.slots.write().expect("lock poisoned");
        slots.insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn delete_slot(&self, name: &str) -> StoreResult<bool> {
        validate_slot_name(name)?;
        let mut slots = self.slots.write().expect("lock poisoned");
        Ok(slots.remove(name).is_some())
    }

    fn list_slots(&self) -> StoreResult<Vec<String>> {
        let slots = self.slots.read().expect("lock poisoned");
        let mut names: Vec<String> = slots.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

impl std::fmt::Debug for InMemorySlotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySlotStore")
            .field("slot_count", &self.len())
            .finish()
    }
}
