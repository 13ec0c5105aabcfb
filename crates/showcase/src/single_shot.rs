//! Single-shot suppression backed by a host flag store

use std::collections::HashMap;

/// Identity tying a highlight to a persisted "already shown" flag.
///
/// `None` means the highlight is not single-shot and is never suppressed.
pub type SingleShotId = Option<i64>;

/// Persistent key/value flags supplied by the host platform
pub trait FlagStore {
    fn get(&self, key: &str) -> bool;
    fn set(&mut self, key: &str, value: bool);
}

/// In-memory flag store for tests and hosts without platform preferences
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    flags: HashMap<String, bool>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_string(), value);
    }
}

/// Store key for a single-shot id
pub fn flag_key(id: i64) -> String {
    format!("shown-{id}")
}

/// True when the highlight was already shown once and must be skipped
pub fn should_suppress(id: SingleShotId, store: &dyn FlagStore) -> bool {
    match id {
        Some(id) => store.get(&flag_key(id)),
        None => false,
    }
}

/// Persist that the highlight with `id` has been shown
pub fn mark_shown(id: SingleShotId, store: &mut dyn FlagStore) {
    if let Some(id) = id {
        store.set(&flag_key(id), true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_id_never_suppresses() {
        let mut store = MemoryFlagStore::new();
        store.set("shown-47", true);
        assert!(!should_suppress(None, &store));
    }

    #[test]
    fn persisted_flag_suppresses() {
        let mut store = MemoryFlagStore::new();
        assert!(!should_suppress(Some(47), &store));
        store.set("shown-47", true);
        assert!(should_suppress(Some(47), &store));
    }

    #[test]
    fn mark_shown_round_trips_through_the_store() {
        let mut store = MemoryFlagStore::new();
        mark_shown(Some(47), &mut store);
        assert!(store.get("shown-47"));
        assert!(should_suppress(Some(47), &store));
    }

    #[test]
    fn mark_shown_without_id_is_a_no_op() {
        let mut store = MemoryFlagStore::new();
        mark_shown(None, &mut store);
        assert!(store.flags.is_empty());
    }
}
