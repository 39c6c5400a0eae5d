//! Content Change Detection Module.
//!
//! Detects whether a company website snapshot changed between two scans and
//! how large the change is, without ever fetching content itself.
//!
//! # Pipeline
//!
//! 1. Compare content checksums - equal checksums short-circuit the whole
//!    analysis (no change).
//! 2. Compute a similarity ratio between the old and new text.
//! 3. Bucket the ratio into a [`ChangeMagnitude`].
//! 4. Isolate the newly-added lines so downstream keyword analysis only sees
//!    genuinely new content, never static boilerplate.
//!
//! # Usage
//!
//! ```ignore
//! use lookout_monitor::change::{content_checksum, detect_change, added_lines};
//!
//! let old_sum = content_checksum(&old_text);
//! let new_sum = content_checksum(&new_text);
//!
//! let detection = detect_change(&old_sum, &new_sum, Some(&old_text), Some(&new_text));
//! if detection.changed {
//!     let fresh = added_lines(&old_text, &new_text);
//!     // feed `fresh` to the significance analyzer
//! }
//! ```

pub mod checksum;
pub mod differ;
pub mod headers;

pub use checksum::content_checksum;
pub use differ::{
    added_lines, detect_change, magnitude, similarity, ChangeDetection, ChangeMagnitude,
};
pub use headers::{content_type, is_html, parse_last_modified};
