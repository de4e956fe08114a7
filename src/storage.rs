use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::types::PlanEntry;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to read slot {0}")]
    Read(String),
    #[error("failed to write slot {0}")]
    Write(String),
    #[error("failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A named key-value slot holding a string.
pub trait PlanSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub struct LocalStorage;

pub fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl PlanSlot for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::Read(key.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

/// In-memory slot; `read_only` makes every write fail.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            items: RefCell::default(),
            read_only: true,
        }
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl PlanSlot for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write(key.to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write(key.to_string()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
pub enum SlotContents {
    Empty,
    Corrupt(String),
    Plan(Vec<PlanEntry>),
}

/// Read the plan slot without collapsing a corrupt value into "absent".
pub fn inspect(slot: &impl PlanSlot, key: &str) -> SlotContents {
    let json = match slot.read(key) {
        Ok(Some(json)) => json,
        Ok(None) => return SlotContents::Empty,
        Err(e) => return SlotContents::Corrupt(e.to_string()),
    };
    match serde_json::from_str::<Vec<PlanEntry>>(&json) {
        Ok(plan) if plan.is_empty() => SlotContents::Corrupt("stored plan is empty".to_string()),
        Ok(plan) => SlotContents::Plan(plan),
        Err(e) => SlotContents::Corrupt(e.to_string()),
    }
}

/// Stored plan, or `None` when the slot is empty or unreadable.
pub fn load_plan(slot: &impl PlanSlot, key: &str) -> Option<Vec<PlanEntry>> {
    match inspect(slot, key) {
        SlotContents::Plan(plan) => {
            log::debug!("loaded plan with {} entries", plan.len());
            Some(plan)
        }
        SlotContents::Empty => None,
        SlotContents::Corrupt(reason) => {
            log::warn!("ignoring stored plan in {}: {}", key, reason);
            None
        }
    }
}

fn try_save_plan(slot: &impl PlanSlot, key: &str, plan: &[PlanEntry]) -> Result<(), StorageError> {
    let json = serde_json::to_string(plan)?;
    slot.write(key, &json)
}

/// Best-effort write; failures are logged and dropped.
pub fn save_plan(slot: &impl PlanSlot, key: &str, plan: &[PlanEntry]) {
    match try_save_plan(slot, key, plan) {
        Ok(()) => log::info!("saved plan with {} entries", plan.len()),
        Err(e) => log::warn!("plan not saved: {}", e),
    }
}

pub fn clear_plan(slot: &impl PlanSlot, key: &str) {
    if let Err(e) = slot.remove(key) {
        log::warn!("plan not cleared: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLAN_KEY;
    use crate::plan::build_four_week_plan;

    #[test]
    fn empty_slot_loads_nothing() {
        let slot = MemoryStorage::new();
        assert_eq!(inspect(&slot, PLAN_KEY), SlotContents::Empty);
        assert!(load_plan(&slot, PLAN_KEY).is_none());
    }

    #[test]
    fn saved_plan_loads_back() {
        let slot = MemoryStorage::new();
        let plan = build_four_week_plan();
        save_plan(&slot, PLAN_KEY, &plan);
        assert_eq!(load_plan(&slot, PLAN_KEY), Some(plan));
    }

    #[test]
    fn garbage_is_reported_corrupt_but_loads_as_absent() {
        let slot = MemoryStorage::with_item(PLAN_KEY, "{not json");
        assert!(matches!(inspect(&slot, PLAN_KEY), SlotContents::Corrupt(_)));
        assert!(load_plan(&slot, PLAN_KEY).is_none());
    }

    #[test]
    fn entries_missing_fields_are_corrupt() {
        let slot = MemoryStorage::with_item(PLAN_KEY, r#"[{"id":"w1d1","day":1}]"#);
        assert!(matches!(inspect(&slot, PLAN_KEY), SlotContents::Corrupt(_)));
    }

    #[test]
    fn empty_array_is_corrupt() {
        let slot = MemoryStorage::with_item(PLAN_KEY, "[]");
        assert!(matches!(inspect(&slot, PLAN_KEY), SlotContents::Corrupt(_)));
        assert!(load_plan(&slot, PLAN_KEY).is_none());
    }

    #[test]
    fn failed_save_is_swallowed() {
        let slot = MemoryStorage::read_only();
        save_plan(&slot, PLAN_KEY, &build_four_week_plan());
        assert!(load_plan(&slot, PLAN_KEY).is_none());
    }

    #[test]
    fn clear_removes_the_plan() {
        let slot = MemoryStorage::new();
        save_plan(&slot, PLAN_KEY, &build_four_week_plan());
        clear_plan(&slot, PLAN_KEY);
        assert_eq!(inspect(&slot, PLAN_KEY), SlotContents::Empty);
    }

    #[test]
    fn stored_json_uses_plain_entry_objects() {
        let slot = MemoryStorage::new();
        save_plan(&slot, PLAN_KEY, &build_four_week_plan());
        let raw = slot.read(PLAN_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value[0];
        for field in ["id", "day", "week", "title", "focus", "duration", "kcal"] {
            assert!(first.get(field).is_some(), "missing {}", field);
        }
    }
}
