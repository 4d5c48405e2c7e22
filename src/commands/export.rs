use log::info;

use crate::commands::{CmdMessage, CmdResult, CsvDocument};
use crate::csv::{self, Column};
use crate::error::Result;
use crate::selection::Selection;
use crate::store::RecordStore;

const LIST_FILENAME: &str = "property-list.csv";
const SELECTED_FILENAME: &str = "selected-properties.csv";

/// Export the whole catalog with the given projection.
pub fn run(store: &RecordStore, columns: &[Column]) -> Result<CmdResult> {
    if store.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No properties to export."));
        return Ok(result);
    }

    let content = csv::export(store.iter(), columns);
    info!("exported {} record(s) to {LIST_FILENAME}", store.len());

    let mut result = CmdResult::default().with_export(CsvDocument {
        filename: LIST_FILENAME.to_string(),
        content,
    });
    result.add_message(CmdMessage::success("Property list exported successfully"));
    Ok(result)
}

/// Export only the selected records, in store order.
pub fn run_selected(
    store: &RecordStore,
    selection: &Selection,
    columns: &[Column],
) -> Result<CmdResult> {
    if selection.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("Please select properties to export"));
        return Ok(result);
    }

    let records = store.iter().filter(|r| selection.contains(&r.id));
    let content = csv::export(records, columns);
    info!(
        "exported {} selected record(s) to {SELECTED_FILENAME}",
        selection.len()
    );

    let mut result = CmdResult::default().with_export(CsvDocument {
        filename: SELECTED_FILENAME.to_string(),
        content,
    });
    result.add_message(CmdMessage::success(
        "Selected properties exported successfully",
    ));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::csv::{AGENT_COLUMNS, ROOMS_COLUMNS};
    use crate::test_utils::fixtures::sample_store;

    #[test]
    fn test_export_all_produces_document() {
        let store = sample_store();
        let result = run(&store, &AGENT_COLUMNS).unwrap();

        let doc = result.export.unwrap();
        assert_eq!(doc.filename, "property-list.csv");
        assert_eq!(doc.content.lines().count(), 4);
    }

    #[test]
    fn test_export_empty_store_yields_no_document() {
        let store = RecordStore::new();
        let result = run(&store, &AGENT_COLUMNS).unwrap();

        assert!(result.export.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn test_export_selected_respects_store_order() {
        let store = sample_store();
        let mut selection = Selection::new();
        selection.add("P003");
        selection.add("P001");

        let result = run_selected(&store, &selection, &ROOMS_COLUMNS).unwrap();

        let doc = result.export.unwrap();
        assert_eq!(doc.filename, "selected-properties.csv");
        let ids: Vec<&str> = doc
            .content
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, vec!["P001", "P003"]);
    }

    #[test]
    fn test_export_selected_with_empty_selection_warns() {
        let store = sample_store();
        let selection = Selection::new();

        let result = run_selected(&store, &selection, &AGENT_COLUMNS).unwrap();

        assert!(result.export.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
