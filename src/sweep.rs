use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::pruner;
use crate::report::Report;
use crate::scanner;

pub struct SweepOptions {
    /// Top of the cache tree.
    pub root: PathBuf,
    /// When false, report only — nothing is deleted.
    pub clean: bool,
    /// Emit a diagnostic line per entry. Never changes behavior.
    pub verbose: bool,
}

/// Run one scan-and-prune pass over the cache tree.
///
/// A bad root is the only fatal error; every anomaly past this point is
/// absorbed into the report's `errors` counter. The clock is sampled once so
/// every file in the run is judged against the same expiry horizon.
pub fn sweep(options: &SweepOptions) -> io::Result<Report> {
    let root = options.root.canonicalize()?;
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a directory: {}", root.display()),
        ));
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut report = Report::new();
    let subdirectories = scanner::scan(&root, now, options.clean, options.verbose, &mut report);
    pruner::prune(&subdirectories, options.clean, options.verbose, &mut report);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const DIGEST: &str = "0123456789abcdef0123456789abcdef01234567";

    fn options(root: &Path, clean: bool) -> SweepOptions {
        SweepOptions {
            root: root.to_path_buf(),
            clean,
            verbose: false,
        }
    }

    #[test]
    fn missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("nope");
        assert!(sweep(&options(&gone, false)).is_err());
    }

    #[test]
    fn root_that_is_a_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("flat");
        fs::write(&file, b"").unwrap();
        assert!(sweep(&options(&file, false)).is_err());
    }

    #[test]
    fn expired_file_reported_but_kept_without_clean() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DIGEST);
        fs::write(&path, b"0000000001payload").unwrap();

        let report = sweep(&options(temp.path(), false)).unwrap();

        assert_eq!(report.get(report::CACHE_FILES), 1);
        assert_eq!(report.get(report::EXPIRED_CACHE_FILES), 1);
        assert_eq!(report.get(report::DELETED_EXPIRED_CACHE_FILES), 0);
        assert!(path.exists());
    }

    #[test]
    fn expired_file_deleted_in_clean_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DIGEST);
        fs::write(&path, b"0000000001payload").unwrap();

        let report = sweep(&options(temp.path(), true)).unwrap();

        assert_eq!(report.get(report::DELETED_EXPIRED_CACHE_FILES), 1);
        assert!(!path.exists());
    }

    #[test]
    fn far_future_file_survives_both_modes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DIGEST);
        fs::write(&path, b"9999999999payload").unwrap();

        let report = sweep(&options(temp.path(), false)).unwrap();
        assert_eq!(report.get(report::UNEXPIRED_CACHE_FILES), 1);
        assert!(path.exists());

        let report = sweep(&options(temp.path(), true)).unwrap();
        assert_eq!(report.get(report::UNEXPIRED_CACHE_FILES), 1);
        assert_eq!(report.get(report::DELETED_EXPIRED_CACHE_FILES), 0);
        assert!(path.exists());
    }

    #[test]
    fn empty_shard_reported_then_removed() {
        let temp = TempDir::new().unwrap();
        let shard = temp.path().join("ab");
        fs::create_dir(&shard).unwrap();

        let report = sweep(&options(temp.path(), false)).unwrap();
        assert_eq!(report.get(report::EMPTY_CACHE_SUBDIRECTORIES), 1);
        assert!(shard.exists());

        let report = sweep(&options(temp.path(), true)).unwrap();
        assert_eq!(report.get(report::DELETED_EMPTY_CACHE_SUBDIRECTORIES), 1);
        assert!(!shard.exists());
    }

    #[test]
    fn nested_shards_collapse_in_a_single_run() {
        let temp = TempDir::new().unwrap();
        let outer = temp.path().join("aa");
        let inner = outer.join("bb");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join(DIGEST), b"0000000001payload").unwrap();

        let report = sweep(&options(temp.path(), true)).unwrap();

        assert_eq!(report.get(report::DELETED_EXPIRED_CACHE_FILES), 1);
        assert_eq!(report.get(report::DELETED_EMPTY_CACHE_SUBDIRECTORIES), 2);
        assert!(!inner.exists());
        assert!(!outer.exists());
    }

    #[test]
    fn second_clean_run_deletes_nothing() {
        let temp = TempDir::new().unwrap();
        let shard = temp.path().join("cd");
        fs::create_dir(&shard).unwrap();
        fs::write(shard.join(DIGEST), b"0000000001payload").unwrap();

        sweep(&options(temp.path(), true)).unwrap();
        let second = sweep(&options(temp.path(), true)).unwrap();

        assert_eq!(second.get(report::DELETED_EXPIRED_CACHE_FILES), 0);
        assert_eq!(second.get(report::DELETED_EMPTY_CACHE_SUBDIRECTORIES), 0);
        assert_eq!(second.get(report::OBJECTS), 0);
    }

    #[test]
    fn dry_run_matches_clean_run_counters() {
        let temp = TempDir::new().unwrap();
        let shard = temp.path().join("ef");
        fs::create_dir(&shard).unwrap();
        fs::write(shard.join(DIGEST), b"0000000001payload").unwrap();
        fs::write(
            shard.join("1123456789abcdef0123456789abcdef01234567"),
            b"9999999999payload",
        )
        .unwrap();
        fs::write(temp.path().join("stray.log"), b"noise").unwrap();

        let dry = sweep(&options(temp.path(), false)).unwrap();
        let wet = sweep(&options(temp.path(), true)).unwrap();

        for category in [
            report::OBJECTS,
            report::CACHE_FILES,
            report::NON_CACHE_FILES,
            report::EXPIRED_CACHE_FILES,
            report::UNEXPIRED_CACHE_FILES,
            report::CACHE_SUBDIRECTORIES,
        ] {
            assert_eq!(dry.get(category), wet.get(category), "{category}");
        }
        assert_eq!(dry.get(report::DELETED_EXPIRED_CACHE_FILES), 0);
        assert_eq!(wet.get(report::DELETED_EXPIRED_CACHE_FILES), 1);
    }
}
