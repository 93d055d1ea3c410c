use std::io;
use std::path::{Path, PathBuf};

use crate::output;
use crate::report::{self, Report};

/// A directory counts as empty iff it holds no non-dot entries.
fn is_empty(dir: &Path) -> io::Result<bool> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_name().to_string_lossy().starts_with('.') {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Prune empty cache subdirectories after the scan, deepest first.
///
/// The queue was filled top-down during the scan, so reverse iteration
/// guarantees every child shard is evaluated before its parent. An ancestor
/// emptied by this very pass is therefore removable in the same run.
pub fn prune(subdirectories: &[PathBuf], clean: bool, verbose: bool, report: &mut Report) {
    for dir in subdirectories.iter().rev() {
        match is_empty(dir) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                report.increment(report::ERRORS);
                if verbose {
                    output::print_entry_error(&dir.display().to_string(), &e.to_string());
                }
                continue;
            }
        }

        report.increment(report::EMPTY_CACHE_SUBDIRECTORIES);
        if !clean {
            continue;
        }

        match std::fs::remove_dir(dir) {
            Ok(()) => {
                report.increment(report::DELETED_EMPTY_CACHE_SUBDIRECTORIES);
                if verbose {
                    output::print_pruned(&dir.display().to_string());
                }
            }
            Err(e) => {
                report.increment(report::ERRORS);
                if verbose {
                    output::print_delete_error(&dir.display().to_string(), &e.to_string());
                }
            }
        }
    }
}
