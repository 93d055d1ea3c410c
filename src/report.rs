use std::collections::BTreeMap;

pub const OBJECTS: &str = "objects";
pub const CACHE_FILES: &str = "cache_files";
pub const CACHE_FILES_SIZE: &str = "cache_files_size";
pub const NON_CACHE_FILES: &str = "non_cache_files";
pub const UNEXPIRED_CACHE_FILES: &str = "unexpired_cache_files";
pub const UNEXPIRED_CACHE_FILES_SIZE: &str = "unexpired_cache_files_size";
pub const EXPIRED_CACHE_FILES: &str = "expired_cache_files";
pub const EXPIRED_CACHE_FILES_SIZE: &str = "expired_cache_files_size";
pub const DELETED_EXPIRED_CACHE_FILES: &str = "deleted_expired_cache_files";
pub const DELETED_EXPIRED_CACHE_FILES_SIZE: &str = "deleted_expired_cache_files_size";
pub const INVALID_TIMESTAMP_CACHE_FILES: &str = "invalid_timestamp_cache_files";
pub const CACHE_SUBDIRECTORIES: &str = "cache_subdirectories";
pub const NON_CACHE_SUBDIRECTORIES: &str = "non_cache_subdirectories";
pub const EMPTY_CACHE_SUBDIRECTORIES: &str = "empty_cache_subdirectories";
pub const DELETED_EMPTY_CACHE_SUBDIRECTORIES: &str = "deleted_empty_cache_subdirectories";
pub const ERRORS: &str = "errors";

/// Emission order for the final report.
pub const ALL_CATEGORIES: &[&str] = &[
    OBJECTS,
    CACHE_FILES,
    CACHE_FILES_SIZE,
    NON_CACHE_FILES,
    UNEXPIRED_CACHE_FILES,
    UNEXPIRED_CACHE_FILES_SIZE,
    EXPIRED_CACHE_FILES,
    EXPIRED_CACHE_FILES_SIZE,
    DELETED_EXPIRED_CACHE_FILES,
    DELETED_EXPIRED_CACHE_FILES_SIZE,
    INVALID_TIMESTAMP_CACHE_FILES,
    CACHE_SUBDIRECTORIES,
    NON_CACHE_SUBDIRECTORIES,
    EMPTY_CACHE_SUBDIRECTORIES,
    DELETED_EMPTY_CACHE_SUBDIRECTORIES,
    ERRORS,
];

/// Named counters accumulated over a single run.
///
/// Write-only during the scan and prune passes; categories come into
/// existence on first increment, and reading an unseen category yields zero.
#[derive(Debug, Default)]
pub struct Report {
    counts: BTreeMap<&'static str, u64>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: &'static str) {
        self.add(category, 1);
    }

    pub fn add(&mut self, category: &'static str, amount: u64) {
        *self.counts.entry(category).or_insert(0) += amount;
    }

    pub fn get(&self, category: &str) -> u64 {
        self.counts.get(category).copied().unwrap_or(0)
    }
}
