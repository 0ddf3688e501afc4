//! Queries against the stc CLI

use crate::runner::CommandRunner;
use crate::sync_status::pure::{percentage_from_dump, percentage_from_table};
use crate::tools::ToolHandle;

pub fn dump_argv(tool: &ToolHandle) -> Vec<String> {
    tool.argv(&["json_dump"])
}

pub fn table_argv(tool: &ToolHandle) -> Vec<String> {
    tool.invocation.clone()
}

pub fn rescan_argv(tool: &ToolHandle, folder: &str) -> Vec<String> {
    tool.argv(&["rescan", folder])
}

/// Folder completion: structured dump first, plain table second
pub fn query_percentage(
    tool: &ToolHandle,
    folder: &str,
    runner: &dyn CommandRunner,
) -> Option<u8> {
    let from_dump = runner
        .output(&dump_argv(tool))
        .ok()
        .filter(|out| out.success)
        .and_then(|out| percentage_from_dump(&out.stdout, folder));
    if from_dump.is_some() {
        return from_dump;
    }

    runner
        .output(&table_argv(tool))
        .ok()
        .filter(|out| out.success)
        .and_then(|out| percentage_from_table(&out.stdout, folder))
}
