/// What a filesystem entry is, judged purely by the shape of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    CacheFile,
    CacheDirectory,
    Other,
}

/// Cache files carry the 40-character lowercase hex digest the producing
/// store derives from its keys; shard directories use the first 2 characters
/// of that digest.
const CACHE_FILE_NAME_LEN: usize = 40;
const CACHE_DIR_NAME_LEN: usize = 2;

fn is_digest_shaped(name: &str, len: usize) -> bool {
    name.len() == len
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Classify an entry from name and kind alone. No I/O.
pub fn classify(name: &str, is_dir: bool) -> Classification {
    if is_dir {
        if is_digest_shaped(name, CACHE_DIR_NAME_LEN) {
            Classification::CacheDirectory
        } else {
            Classification::Other
        }
    } else if is_digest_shaped(name, CACHE_FILE_NAME_LEN) {
        Classification::CacheFile
    } else {
        Classification::Other
    }
}
