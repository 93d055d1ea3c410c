use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::classify::{classify, Classification};
use crate::expiry;
use crate::output;
use crate::report::{self, Report};

/// Walk the cache tree once, top-down, classifying every entry.
///
/// Cache files are evaluated for expiry inline (and deleted in clean mode);
/// cache subdirectories are collected in discovery order so the prune pass
/// can consume them in reverse. Walk errors count against the report and the
/// walk continues with whatever walkdir can still yield.
pub fn scan(
    root: &Path,
    now: u64,
    clean: bool,
    verbose: bool,
    report: &mut Report,
) -> Vec<PathBuf> {
    let mut subdirectories = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                report.increment(report::ERRORS);
                if verbose {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    output::print_entry_error(&path, &e.to_string());
                }
                continue;
            }
        };

        report.increment(report::OBJECTS);

        let name = entry.file_name().to_string_lossy();
        let is_dir = entry.file_type().is_dir();

        match classify(&name, is_dir) {
            Classification::CacheDirectory => {
                report.increment(report::CACHE_SUBDIRECTORIES);
                subdirectories.push(entry.path().to_path_buf());
            }
            Classification::CacheFile => {
                report.increment(report::CACHE_FILES);
                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                report.add(report::CACHE_FILES_SIZE, size);
                expiry::evaluate(entry.path(), size, now, clean, verbose, report);
            }
            Classification::Other => {
                if is_dir {
                    report.increment(report::NON_CACHE_SUBDIRECTORIES);
                } else {
                    report.increment(report::NON_CACHE_FILES);
                }
            }
        }
    }

    subdirectories
}
