//! Content checksum computation.

use md5::{Digest, Md5};

/// Compute the MD5 hex digest of a content string.
///
/// Returns a lowercase 32-character hex string. Snapshot checksums stored by
/// the persistence layer use this exact format, so equality comparison against
/// stored values is byte-for-byte.
pub fn content_checksum(content: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
