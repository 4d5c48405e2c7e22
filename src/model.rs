//! # Domain Model: Property Records
//!
//! This module defines the core data structures: [`Property`] and [`Status`].
//!
//! A [`Property`] is one listing — a flat record with no nested entities and no
//! foreign keys. Its `id` is supplied by the caller, is unique within a
//! [`crate::store::RecordStore`], and is stable for the record's lifetime.
//!
//! ## Validation
//!
//! Presence checks live at the record-creation boundary, not in the store:
//! [`Property::validate`] is called by the command layer before a record is
//! committed. Required fields are `id`, `name`, `project`, and `kind`; `area`
//! must be positive and `price` non-negative. Everything else is optional and
//! an empty string means "not provided".
//!
//! ## Field notes
//!
//! - `kind` is the listing type ("Residential", "Commercial"); it serializes as
//!   `type` since that is the established payload key.
//! - `bedrooms` is a free-form label ("2", "studio"), not a count.
//! - `effective_from`/`effective_to` form an optional validity window; the
//!   library does not enforce an ordering between them.
//! - `price` is a plain amount in a single implicit currency. Formatting
//!   (currency symbols, thousands separators) is a presentation concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PropError, Result};

/// Listing availability state. Closed set: nothing else is ever stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Available,
    Reserved,
    Sold,
}

impl Status {
    /// Parse the lowercase wire form. Returns `None` for anything outside the
    /// three known states.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "available" => Some(Status::Available),
            "reserved" => Some(Status::Reserved),
            "sold" => Some(Status::Sold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Reserved => "reserved",
            Status::Sold => "sold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub project: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub unit: String,
    pub area: f64,
    pub price: f64,
    pub status: Status,
    #[serde(default)]
    pub bedrooms: String,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub parking: u32,
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub facing: String,
    #[serde(default)]
    pub furnished: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effective_from: Option<NaiveDate>,
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub email: String,
}

impl Property {
    /// Build a record from the required fields, leaving the rest empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project: impl Into<String>,
        kind: impl Into<String>,
        area: f64,
        price: f64,
        status: Status,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project: project.into(),
            kind: kind.into(),
            building: String::new(),
            unit: String::new(),
            area,
            price,
            status,
            bedrooms: String::new(),
            bathrooms: 0,
            parking: 0,
            agent: String::new(),
            facing: String::new(),
            furnished: String::new(),
            description: String::new(),
            effective_from: None,
            effective_to: None,
            contact_number: String::new(),
            email: String::new(),
        }
    }

    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    pub fn with_rooms(mut self, bedrooms: impl Into<String>, bathrooms: u32) -> Self {
        self.bedrooms = bedrooms.into();
        self.bathrooms = bathrooms;
        self
    }

    pub fn with_facing(mut self, facing: impl Into<String>) -> Self {
        self.facing = facing.into();
        self
    }

    pub fn with_furnished(mut self, furnished: impl Into<String>) -> Self {
        self.furnished = furnished.into();
        self
    }

    /// Boundary check before a record is committed to the store.
    ///
    /// Required: non-blank `id`, `name`, `project`, `kind`; `area > 0`;
    /// `price >= 0` and finite. The store itself does not re-check these.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("project", &self.project),
            ("type", &self.kind),
        ] {
            if value.trim().is_empty() {
                return Err(PropError::Validation(format!(
                    "required field '{field}' is empty"
                )));
            }
        }
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(PropError::Validation(format!(
                "area must be positive, got {}",
                self.area
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(PropError::Validation(format!(
                "price must be non-negative, got {}",
                self.price
            )));
        }
        Ok(())
    }
}
