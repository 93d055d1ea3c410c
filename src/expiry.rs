use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::output;
use crate::report::{self, Report};

/// Sentinel substituted for malformed or unreadable headers. Far enough in
/// the future that the file is never considered expired and never deleted.
pub const FAR_FUTURE: u64 = 9_999_999_999;

/// Number of leading bytes holding the ASCII-decimal expiration timestamp.
const HEADER_LEN: usize = 10;

/// Expiration read from a cache file header.
pub struct Expiration {
    pub timestamp: u64,
    pub valid: bool,
}

impl Expiration {
    fn invalid() -> Self {
        Self {
            timestamp: FAR_FUTURE,
            valid: false,
        }
    }
}

/// Read the expiration timestamp from the first 10 bytes of `path`.
///
/// A short or non-numeric header is not an I/O error: the file is flagged
/// invalid and given the far-future sentinel. Only a real read failure
/// surfaces as `Err`.
pub fn read_expiration(path: &Path) -> io::Result<Expiration> {
    let mut header = [0u8; HEADER_LEN];
    let mut file = File::open(path)?;
    match file.read_exact(&mut header) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            return Ok(Expiration::invalid());
        }
        Err(e) => return Err(e),
    }

    if !header.iter().all(|b| b.is_ascii_digit()) {
        return Ok(Expiration::invalid());
    }

    // 10 ASCII digits always fit in a u64.
    let mut timestamp = 0u64;
    for b in header {
        timestamp = timestamp * 10 + u64::from(b - b'0');
    }

    Ok(Expiration {
        timestamp,
        valid: true,
    })
}

/// Expiry is inclusive of the current second.
pub fn is_expired(timestamp: u64, now: u64) -> bool {
    timestamp <= now
}

/// Evaluate one cache file against the run's expiry horizon and, in clean
/// mode, delete it if expired. All outcomes land in the report; nothing
/// aborts the run.
pub fn evaluate(
    path: &Path,
    size: u64,
    now: u64,
    clean: bool,
    verbose: bool,
    report: &mut Report,
) {
    let expiration = match read_expiration(path) {
        Ok(exp) => exp,
        Err(e) => {
            report.increment(report::ERRORS);
            if verbose {
                output::print_entry_error(&path.display().to_string(), &e.to_string());
            }
            Expiration::invalid()
        }
    };

    if !expiration.valid {
        report.increment(report::INVALID_TIMESTAMP_CACHE_FILES);
    }

    if !is_expired(expiration.timestamp, now) {
        report.increment(report::UNEXPIRED_CACHE_FILES);
        report.add(report::UNEXPIRED_CACHE_FILES_SIZE, size);
        if verbose {
            output::print_unexpired(&path.display().to_string(), expiration.timestamp);
        }
        return;
    }

    report.increment(report::EXPIRED_CACHE_FILES);
    report.add(report::EXPIRED_CACHE_FILES_SIZE, size);
    if verbose {
        output::print_expired(&path.display().to_string(), expiration.timestamp);
    }

    if !clean {
        return;
    }

    match std::fs::remove_file(path) {
        Ok(()) => {
            report.increment(report::DELETED_EXPIRED_CACHE_FILES);
            report.add(report::DELETED_EXPIRED_CACHE_FILES_SIZE, size);
            if verbose {
                output::print_deleted(&path.display().to_string(), &output::format_size(size));
            }
        }
        Err(e) => {
            report.increment(report::ERRORS);
            if verbose {
                output::print_delete_error(&path.display().to_string(), &e.to_string());
            }
        }
    }
}
