/// SelectionRegistry - insertion-ordered set of selected objects
///
/// Iteration order is the selection order and drives the per-object ID
/// written by the mask pass, so entries are kept in a Vec with a side
/// index instead of a plain hash map.

use rustc_hash::FxHashMap;
use slotmap::Key;
use crate::engine_debug;
use super::object::{ObjectHandle, RenderablePart};
use super::source::RenderableSource;

/// One selected object and the parts captured at selection time
#[derive(Debug, Clone)]
pub struct SelectionEntry {
    handle: ObjectHandle,
    parts: Vec<RenderablePart>,
}

impl SelectionEntry {
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    pub fn parts(&self) -> &[RenderablePart] {
        &self.parts
    }
}

#[derive(Debug, Default)]
pub struct SelectionRegistry {
    entries: Vec<SelectionEntry>,
    index: FxHashMap<ObjectHandle, usize>,
}

impl SelectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `handle`, or refresh its parts if already selected.
    ///
    /// Parts are re-queried from `source` on every call. A refreshed
    /// entry keeps its position. Null and dead handles are ignored.
    ///
    /// Returns true if the registry was touched.
    pub fn select(&mut self, handle: ObjectHandle, source: &dyn RenderableSource) -> bool {
        if handle.is_null() || !source.is_alive(handle) {
            return false;
        }

        match self.index.get(&handle).copied() {
            Some(slot) => {
                let entry = &mut self.entries[slot];
                entry.parts.clear();
                source.collect_renderable_parts(handle, &mut entry.parts);
                engine_debug!("galaxy3d::SelectionRegistry",
                    "Refreshed {:?} ({} parts)", handle, entry.parts.len());
            }
            None => {
                let mut parts = Vec::with_capacity(4);
                source.collect_renderable_parts(handle, &mut parts);
                engine_debug!("galaxy3d::SelectionRegistry",
                    "Selected {:?} ({} parts)", handle, parts.len());
                self.index.insert(handle, self.entries.len());
                self.entries.push(SelectionEntry { handle, parts });
            }
        }
        true
    }

    /// Remove `handle` from the selection. Unselected handles are a no-op.
    pub fn deselect(&mut self, handle: ObjectHandle) -> bool {
        let Some(slot) = self.index.remove(&handle) else {
            return false;
        };

        self.entries.remove(slot);
        for entry in &self.entries[slot..] {
            if let Some(i) = self.index.get_mut(&entry.handle) {
                *i -= 1;
            }
        }
        engine_debug!("galaxy3d::SelectionRegistry", "Deselected {:?}", handle);
        true
    }

    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.index.contains_key(&handle)
    }

    /// Parts captured for `handle`, None if not selected
    pub fn parts(&self, handle: ObjectHandle) -> Option<&[RenderablePart]> {
        self.index.get(&handle).map(|&slot| self.entries[slot].parts())
    }

    /// Position of `handle` in selection order
    pub fn position(&self, handle: ObjectHandle) -> Option<usize> {
        self.index.get(&handle).copied()
    }

    /// Entries in selection order
    pub fn iter(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of parts across all entries
    pub fn part_count(&self) -> usize {
        self.entries.iter().map(|e| e.parts.len()).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

#[cfg(test)]
#[path = "selection_registry_tests.rs"]
mod tests;
