use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{self, Criteria};
use crate::store::RecordStore;

/// List the records matching `criteria`, in store order.
pub fn run(store: &RecordStore, criteria: &Criteria) -> Result<CmdResult> {
    let listed = filter::apply(store.iter(), criteria)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
