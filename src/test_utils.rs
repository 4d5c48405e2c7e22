//! Canonical fixtures shared by unit and integration tests.
//!
//! Enabled for this crate's own tests and, via the `test_utils` feature, for
//! downstream crates that want the same sample catalog.

pub mod fixtures {
    use crate::model::{Property, Status};
    use crate::store::RecordStore;

    /// One of the three canonical sample records. Panics on an unknown id;
    /// this is a test helper, not API.
    pub fn sample_record(id: &str) -> Property {
        match id {
            "P001" => Property::new(
                "P001",
                "Sunrise Heights A-G-001",
                "Sunrise Heights",
                "Residential",
                1200.0,
                250000.0,
                Status::Available,
            )
            .with_building("Block A")
            .with_unit("A-G-001")
            .with_rooms("2", 2)
            .with_agent("John Doe")
            .with_facing("north")
            .with_furnished("semi-furnished"),
            "P002" => Property::new(
                "P002",
                "Ocean View B-1-002",
                "Ocean View Residences",
                "Residential",
                850.0,
                180000.0,
                Status::Reserved,
            )
            .with_building("Block B")
            .with_unit("B-1-002")
            .with_rooms("1", 1)
            .with_agent("Jane Smith")
            .with_facing("east")
            .with_furnished("unfurnished"),
            "P003" => Property::new(
                "P003",
                "Downtown Plaza C-2-003",
                "Downtown Plaza",
                "Commercial",
                1500.0,
                320000.0,
                Status::Sold,
            )
            .with_building("Block C")
            .with_unit("C-2-003")
            .with_rooms("0", 2)
            .with_agent("Mike Johnson")
            .with_facing("south")
            .with_furnished("fully-furnished"),
            other => panic!("no fixture for id {other}"),
        }
    }

    /// The three canonical records in catalog order.
    pub fn sample_records() -> Vec<Property> {
        vec![
            sample_record("P001"),
            sample_record("P002"),
            sample_record("P003"),
        ]
    }

    /// A store pre-seeded with the canonical catalog.
    pub fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        for record in sample_records() {
            store
                .insert(record)
                .expect("fixture ids are unique");
        }
        store
    }
}
