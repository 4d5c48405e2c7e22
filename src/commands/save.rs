use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Property;
use crate::store::{RecordStore, UpsertOutcome};

/// The form-submit path: validate, then insert-or-replace keyed on id.
///
/// The admin page simulates a network delay before committing; that is
/// presentation theater and has no counterpart here — the save is immediate.
pub fn run(store: &mut RecordStore, record: Property) -> Result<CmdResult> {
    record.validate()?;
    let outcome = store.upsert(record.clone());

    let mut result = CmdResult::default().with_affected(vec![record]);
    result.add_message(match outcome {
        UpsertOutcome::Replaced => CmdMessage::success("Property updated successfully!"),
        UpsertOutcome::Added => CmdMessage::success("Property added successfully!"),
    });
    Ok(result)
}
