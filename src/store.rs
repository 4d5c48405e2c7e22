//! # Record Store
//!
//! [`RecordStore`] is the single source of truth for the listing collection.
//! It is a plain in-memory store: state is transient per session, and the
//! presentation layer is expected to re-derive its views (filtered lists,
//! stats, selections) after every mutation.
//!
//! ## Ordering
//!
//! Insertion order is the only defined order. [`RecordStore::iter`] yields
//! records in that order and never re-sorts; `upsert` replaces a record in
//! place so an edit does not move a row.
//!
//! ## Id discipline
//!
//! Ids are supplied by callers and must be unique; the store enforces
//! uniqueness but never generates ids. Deriving an id from the current record
//! count collides after any deletion, so that scheme is deliberately not
//! offered — callers that need a fresh id should mint a UUID (see
//! [`crate::commands::import`]).
//!
//! The store is single-threaded and synchronous. If this were ever fronted by
//! a multi-user backend, this boundary is where a transaction would go.

use log::debug;
use std::collections::HashSet;

use crate::error::{PropError, Result};
use crate::model::Property;

/// What an [`RecordStore::upsert`] actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Replaced,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Property>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Append a record. Fails if the id is already present.
    pub fn insert(&mut self, record: Property) -> Result<()> {
        if self.position(&record.id).is_some() {
            return Err(PropError::DuplicateId(record.id));
        }
        debug!("store: insert {}", record.id);
        self.records.push(record);
        Ok(())
    }

    /// Insert-or-replace keyed by id. A replace is a full record swap in
    /// place (no field-level merge) and keeps the record's position.
    pub fn upsert(&mut self, record: Property) -> UpsertOutcome {
        match self.position(&record.id) {
            Some(pos) => {
                debug!("store: replace {}", record.id);
                self.records[pos] = record;
                UpsertOutcome::Replaced
            }
            None => {
                debug!("store: add {}", record.id);
                self.records.push(record);
                UpsertOutcome::Added
            }
        }
    }

    /// Remove a record, returning it. Errors if the id is absent.
    pub fn delete(&mut self, id: &str) -> Result<Property> {
        let pos = self
            .position(id)
            .ok_or_else(|| PropError::NotFound(id.to_string()))?;
        debug!("store: delete {id}");
        Ok(self.records.remove(pos))
    }

    /// Remove every record whose id is in `ids`, in one pass. Absent ids are
    /// ignored. Returns the removed records in store order.
    pub fn delete_many(&mut self, ids: &HashSet<String>) -> Vec<Property> {
        let mut removed = Vec::new();
        self.records.retain(|record| {
            if ids.contains(&record.id) {
                removed.push(record.clone());
                false
            } else {
                true
            }
        });
        debug!("store: bulk delete removed {} record(s)", removed.len());
        removed
    }

    pub fn get(&self, id: &str) -> Result<&Property> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| PropError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// All records in insertion order. Restartable: call again for a fresh
    /// pass.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
