use log::info;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::selection::Selection;
use crate::store::RecordStore;

/// Delete a single record by id.
pub fn run(store: &mut RecordStore, id: &str) -> Result<CmdResult> {
    let removed = store.delete(id)?;

    let mut result = CmdResult::default().with_affected(vec![removed]);
    result.add_message(CmdMessage::success("Property deleted successfully"));
    Ok(result)
}

/// Delete every selected record. The selection is cleared afterwards, so it
/// never references a record that is gone.
pub fn run_bulk(store: &mut RecordStore, selection: &mut Selection) -> Result<CmdResult> {
    if selection.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("Please select properties to delete"));
        return Ok(result);
    }

    let removed = store.delete_many(selection.ids());
    selection.clear();
    info!("bulk delete removed {} record(s)", removed.len());

    let mut result = CmdResult::default().with_affected(removed);
    result.add_message(CmdMessage::success(
        "Selected properties deleted successfully",
    ));
    Ok(result)
}
