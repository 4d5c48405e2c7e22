//! # API Facade
//!
//! [`PropertyApi`] is the single entry point for UI clients. It owns the
//! record store and the selection, dispatches to the command layer, and
//! returns structured results — never strings, never I/O.
//!
//! The facade also guards the selection invariant: an id can only be selected
//! while its record exists, and deletions reconcile the selection so stale ids
//! never linger.

use std::collections::HashSet;

use crate::commands::{self, CmdResult};
use crate::csv::Column;
use crate::error::{PropError, Result};
use crate::filter::Criteria;
use crate::model::Property;
use crate::selection::Selection;
use crate::stats::Stats;
use crate::store::RecordStore;

#[derive(Debug, Default)]
pub struct PropertyApi {
    store: RecordStore,
    selection: Selection,
}

impl PropertyApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing catalog (e.g. fixtures or a restored session).
    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store,
            selection: Selection::new(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    // --- Record operations ---

    /// Strict insert; fails on a duplicate id.
    pub fn create_property(&mut self, record: Property) -> Result<CmdResult> {
        commands::create::run(&mut self.store, record)
    }

    /// Insert-or-replace — the form-submit path.
    pub fn save_property(&mut self, record: Property) -> Result<CmdResult> {
        commands::save::run(&mut self.store, record)
    }

    pub fn delete_property(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.selection.remove(id);
        Ok(result)
    }

    pub fn delete_selected(&mut self) -> Result<CmdResult> {
        commands::delete::run_bulk(&mut self.store, &mut self.selection)
    }

    pub fn import_file(&mut self, file_name: &str) -> Result<CmdResult> {
        commands::import::run(&mut self.store, file_name)
    }

    // --- Views ---

    pub fn list(&self, criteria: &Criteria) -> Result<CmdResult> {
        commands::list::run(&self.store, criteria)
    }

    pub fn list_all(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &Criteria::new())
    }

    pub fn stats(&self) -> Stats {
        Stats::compute(self.store.iter())
    }

    pub fn export_all(&self, columns: &[Column]) -> Result<CmdResult> {
        commands::export::run(&self.store, columns)
    }

    pub fn export_selected(&self, columns: &[Column]) -> Result<CmdResult> {
        commands::export::run_selected(&self.store, &self.selection, columns)
    }

    // --- Selection ---

    /// Flip an id's selection state, returning whether it is selected
    /// afterwards. Unknown ids are refused so the selection can never name a
    /// record the store does not hold.
    pub fn toggle_selection(&mut self, id: &str) -> Result<bool> {
        if !self.store.contains(id) {
            return Err(PropError::NotFound(id.to_string()));
        }
        Ok(self.selection.toggle(id))
    }

    pub fn select_all(&mut self) {
        let ids: Vec<String> = self.store.iter().map(|r| r.id.clone()).collect();
        for id in ids {
            self.selection.add(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Drop selected ids whose records are gone. The facade already
    /// reconciles after its own deletions; this is for callers that mutate
    /// the store directly before handing it over.
    pub fn reconcile_selection(&mut self) {
        let valid: HashSet<String> = self.store.iter().map(|r| r.id.clone()).collect();
        self.selection.reconcile(&valid);
    }
}
