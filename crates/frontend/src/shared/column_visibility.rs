//! Which table columns are shown, persisted across reloads.
//!
//! The visible set is always a non-empty subset of a static column
//! configuration, kept in configuration order. It is stored as a JSON array
//! of column ids under one fixed key.

use crate::shared::kv_store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Right,
}

/// Static description of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: &'static str,
    pub label: &'static str,
    pub default_visible: bool,
    pub align: ColumnAlign,
    pub min_width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Changed,
    /// Already in the requested state
    Unchanged,
    /// Would have hidden the last visible column
    RejectedLastColumn,
    UnknownColumn,
}

pub struct ColumnVisibility {
    columns: &'static [ColumnDef],
    visible: Vec<String>,
    store: Box<dyn KeyValueStore>,
    storage_key: String,
}

impl ColumnVisibility {
    /// Restore the persisted selection, dropping ids that are no longer
    /// configured. Falls back to the configured defaults when nothing valid
    /// remains.
    pub fn load(
        columns: &'static [ColumnDef],
        store: Box<dyn KeyValueStore>,
        storage_key: &str,
    ) -> Self {
        let persisted: Vec<String> = match store.get(storage_key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable column selection '{}': {}", storage_key, e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        let mut visible = in_config_order(columns, |id| persisted.iter().any(|p| p == id));
        if visible.is_empty() {
            visible = default_visible(columns);
        }

        Self {
            columns,
            visible,
            store,
            storage_key: storage_key.to_string(),
        }
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        self.columns
    }

    pub fn visible_ids(&self) -> &[String] {
        &self.visible
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        self.visible.iter().any(|id| id == column_id)
    }

    pub fn visible_columns(&self) -> Vec<&'static ColumnDef> {
        self.columns
            .iter()
            .filter(|c| self.is_visible(c.id))
            .collect()
    }

    /// Show or hide one column. Hiding the last visible column is refused.
    pub fn toggle(&mut self, column_id: &str, visible: bool) -> ToggleOutcome {
        if !self.columns.iter().any(|c| c.id == column_id) {
            return ToggleOutcome::UnknownColumn;
        }
        if self.is_visible(column_id) == visible {
            return ToggleOutcome::Unchanged;
        }
        if !visible && self.visible.len() == 1 {
            log::warn!("Refusing to hide '{}': at least one column must stay visible", column_id);
            return ToggleOutcome::RejectedLastColumn;
        }

        let current = &self.visible;
        let next = in_config_order(self.columns, |id| {
            if id == column_id {
                visible
            } else {
                current.iter().any(|v| v == id)
            }
        });
        self.visible = next;
        self.persist();
        ToggleOutcome::Changed
    }

    /// Back to the configured defaults (also persisted).
    pub fn reset_to_defaults(&mut self) {
        self.visible = default_visible(self.columns);
        self.persist();
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.visible) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to encode column selection: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.storage_key, &raw) {
            log::warn!("Column selection not persisted: {}", e);
        }
    }
}

fn in_config_order(columns: &[ColumnDef], keep: impl Fn(&str) -> bool) -> Vec<String> {
    columns
        .iter()
        .filter(|c| keep(c.id))
        .map(|c| c.id.to_string())
        .collect()
}

/// Configured defaults; the first column when none is marked.
fn default_visible(columns: &[ColumnDef]) -> Vec<String> {
    let defaults = in_config_order(columns, |id| {
        columns.iter().any(|c| c.id == id && c.default_visible)
    });
    if defaults.is_empty() {
        columns.iter().take(1).map(|c| c.id.to_string()).collect()
    } else {
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::kv_store::{MemoryStore, StorageError};

    const KEY: &str = "test.visibleColumns";

    const fn col(id: &'static str, default_visible: bool) -> ColumnDef {
        ColumnDef {
            id,
            label: id,
            default_visible,
            align: ColumnAlign::Left,
            min_width: 100,
        }
    }

    static COLUMNS: [ColumnDef; 4] = [
        col("name", true),
        col("department", true),
        col("budget", false),
        col("status", true),
    ];

    fn load(store: &MemoryStore) -> ColumnVisibility {
        ColumnVisibility::load(&COLUMNS, Box::new(store.clone()), KEY)
    }

    #[test]
    fn test_defaults_when_nothing_persisted() {
        let cv = load(&MemoryStore::new());
        assert_eq!(cv.visible_ids(), &["name", "department", "status"]);
    }

    #[test]
    fn test_toggle_persists_in_config_order() {
        let store = MemoryStore::new();
        let mut cv = load(&store);
        assert_eq!(cv.toggle("budget", true), ToggleOutcome::Changed);
        assert_eq!(cv.visible_ids(), &["name", "department", "budget", "status"]);
        assert_eq!(
            store.get(KEY).as_deref(),
            Some(r#"["name","department","budget","status"]"#)
        );

        // a fresh controller reads the same selection back
        let reloaded = load(&store);
        assert!(reloaded.is_visible("budget"));
    }

    #[test]
    fn test_last_visible_column_cannot_be_hidden() {
        let store = MemoryStore::with_entry(KEY, r#"["status"]"#);
        let mut cv = load(&store);
        assert_eq!(cv.visible_ids(), &["status"]);
        assert_eq!(cv.toggle("status", false), ToggleOutcome::RejectedLastColumn);
        assert_eq!(cv.visible_ids(), &["status"]);
        assert_eq!(store.get(KEY).as_deref(), Some(r#"["status"]"#));
    }

    #[test]
    fn test_unchanged_and_unknown() {
        let mut cv = load(&MemoryStore::new());
        assert_eq!(cv.toggle("name", true), ToggleOutcome::Unchanged);
        assert_eq!(cv.toggle("budget", false), ToggleOutcome::Unchanged);
        assert_eq!(cv.toggle("ward", true), ToggleOutcome::UnknownColumn);
    }

    #[test]
    fn test_removed_ids_are_dropped_on_load() {
        let store = MemoryStore::with_entry(KEY, r#"["contractor","budget","name","budget"]"#);
        let cv = load(&store);
        assert_eq!(cv.visible_ids(), &["name", "budget"]);
    }

    #[test]
    fn test_only_removed_ids_fall_back_to_defaults() {
        let store = MemoryStore::with_entry(KEY, r#"["contractor","ward"]"#);
        let cv = load(&store);
        assert_eq!(cv.visible_ids(), &["name", "department", "status"]);
    }

    #[test]
    fn test_corrupt_entry_falls_back_to_defaults() {
        let store = MemoryStore::with_entry(KEY, "{not json");
        let cv = load(&store);
        assert_eq!(cv.visible_ids(), &["name", "department", "status"]);
    }

    #[test]
    fn test_no_marked_defaults_uses_first_column() {
        static BARE: [ColumnDef; 2] = [col("a", false), col("b", false)];
        let cv = ColumnVisibility::load(&BARE, Box::new(MemoryStore::new()), KEY);
        assert_eq!(cv.visible_ids(), &["a"]);
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_write_failure_keeps_in_memory_change() {
        let mut cv = ColumnVisibility::load(&COLUMNS, Box::new(FailingStore), KEY);
        assert_eq!(cv.toggle("department", false), ToggleOutcome::Changed);
        assert_eq!(cv.visible_ids(), &["name", "status"]);
    }

    #[test]
    fn test_reset_to_defaults() {
        let store = MemoryStore::with_entry(KEY, r#"["budget"]"#);
        let mut cv = load(&store);
        cv.reset_to_defaults();
        assert_eq!(cv.visible_ids(), &["name", "department", "status"]);
        assert_eq!(
            store.get(KEY).as_deref(),
            Some(r#"["name","department","status"]"#)
        );
    }
}
