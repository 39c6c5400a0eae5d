//! Operational Status Module.
//!
//! Determines whether a company still appears to be operating, from weak
//! independent indicators found in its website snapshot:
//!
//! - **Copyright year**: a current copyright line suggests maintenance; one
//!   several years stale suggests abandonment.
//! - **Acquisition language**: "acquired by", "now part of" and similar
//!   phrases are strong closure/absorption signals.
//! - **HTTP Last-Modified freshness**: recently modified content is a good
//!   liveness signal.
//!
//! Each indicator is extracted by a simple pure function; the rule engine
//! only ever sees typed [`StatusIndicator`] values, so callers are free to
//! wire in their own extractors. Any "current time" involved is supplied by
//! the caller - nothing in this module reads the clock.
//!
//! # Usage
//!
//! ```ignore
//! use chrono::Utc;
//! use lookout_monitor::status::StatusAnalyzer;
//!
//! let analyzer = StatusAnalyzer::new();
//! let report = analyzer.analyze(&snapshot_text, last_modified, Utc::now());
//!
//! println!("{} ({:.0}%)", report.status, report.confidence * 100.0);
//! for indicator in &report.indicators {
//!     println!("  {}: {} [{}]", indicator.kind, indicator.value, indicator.signal);
//! }
//! ```

pub mod extract;
pub mod rules;
pub mod types;

pub use extract::{
    acquisition_indicator, copyright_indicator, detect_acquisition, extract_copyright_year,
    freshness_indicator,
};
pub use rules::{confidence, determine_status, StatusAnalyzer};
pub use types::{OperationalStatus, SignalKind, StatusIndicator, StatusReport};
