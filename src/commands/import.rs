use log::info;
use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Property, Status};
use crate::store::RecordStore;

/// Simulated file upload: no parsing happens, the upload only seeds one
/// placeholder record named after the file.
///
/// The id is a minted UUID. The admin page derived ids from the record count,
/// which reuses an existing id after any deletion; that scheme is a bug and is
/// not reproduced.
pub fn run(store: &mut RecordStore, file_name: &str) -> Result<CmdResult> {
    let record = Property::new(
        Uuid::new_v4().to_string(),
        format!("Property from {file_name}"),
        "Uploaded Project",
        "Residential",
        1000.0,
        200000.0,
        Status::Available,
    )
    .with_building("Upload Building")
    .with_agent("System Import");

    store.insert(record.clone())?;
    info!("import seeded record {} from {file_name}", record.id);

    let mut result = CmdResult::default().with_affected(vec![record]);
    result.add_message(CmdMessage::success(
        "File uploaded and processed successfully!",
    ));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_seeds_placeholder_record() {
        let mut store = RecordStore::new();
        let result = run(&mut store, "listings.xlsx").unwrap();

        let record = &result.affected[0];
        assert_eq!(record.name, "Property from listings.xlsx");
        assert_eq!(record.project, "Uploaded Project");
        assert_eq!(record.agent, "System Import");
        assert_eq!(record.status, Status::Available);
        assert!(store.contains(&record.id));
    }

    #[test]
    fn test_import_mints_unique_ids() {
        let mut store = RecordStore::new();
        let a = run(&mut store, "a.csv").unwrap();
        let b = run(&mut store, "b.csv").unwrap();

        assert_ne!(a.affected[0].id, b.affected[0].id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_imported_record_is_valid() {
        let mut store = RecordStore::new();
        let result = run(&mut store, "data.csv").unwrap();
        assert!(result.affected[0].validate().is_ok());
    }
}
