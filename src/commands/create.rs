use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Property;
use crate::store::RecordStore;

/// Strict insert: the record must validate and its id must be fresh.
pub fn run(store: &mut RecordStore, record: Property) -> Result<CmdResult> {
    record.validate()?;
    store.insert(record.clone())?;

    let mut result = CmdResult::default().with_affected(vec![record]);
    result.add_message(CmdMessage::success("Property added successfully!"));
    Ok(result)
}
