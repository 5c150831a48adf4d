use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::organizer;
use std::path::Path;

/// Sorts the directory at `root` into category folders.
pub fn run(root: &Path) -> Result<CmdResult> {
    let report = organizer::organize(root)?;
    let mut result = CmdResult::default();
    if report.moved_count() == 0 && report.unknown_files.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to sort in {}",
            root.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Sorted {} files in {}",
            report.moved_count(),
            root.display()
        )));
    }
    for failure in &report.failures {
        result.add_message(CmdMessage::warning(failure.clone()));
    }
    Ok(result.with_report(report))
}
