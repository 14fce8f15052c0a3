use crate::error::StoreResult;

/// Storage backend for named string slots.
///
/// All implementations must satisfy these invariants:
/// - A write replaces the entire slot contents (snapshot semantics); readers
///   never observe a partially written slot.
/// - Reading a slot that has never been written returns `Ok(None)`.
/// - Slot names are validated with [`crate::names::validate_slot_name`]
///   before any backend access.
/// - All I/O errors are propagated, never silently ignored.
pub trait SlotStore: Send + Sync {
    /// Read the contents of a slot.
    ///
    /// Returns `Ok(None)` if the slot does not exist.
    /// Returns `Err` on I/O failure or data corruption.
    fn read_slot(&self, name: &str) -> StoreResult<Option<String>>;

    /// Write (create or fully overwrite) a slot.
    fn write_slot(&self, name: &str, contents: &str) -> StoreResult<()>;

    /// Delete a slot. Returns `true` if the slot existed.
    fn delete_slot(&self, name: &str) -> StoreResult<bool>;

    /// Sorted names of all slots currently present.
    fn list_slots(&self) -> StoreResult<Vec<String>>;
}

impl<S: SlotStore + ?Sized> SlotStore for std::sync::Arc<S> {
    fn read_slot(&self, name: &str) -> StoreResult<Option<String>> {
        (**self).read_slot(name)
    }

    fn write_slot(&self, name: &str, contents: &str) -> StoreResult<()> {
        (**self).write_slot(name, contents)
    }

    fn delete_slot(&self, name: &str) -> StoreResult<bool> {
        (**self).delete_slot(name)
    }

    fn list_slots(&self) -> StoreResult<Vec<String>> {
        (**self).list_slots()
    }
}
