//! Lookout Monitor Library
//!
//! Evidence-weighted classification engine for company monitoring. Turns
//! raw signals - text snapshots, typed indicators, verification outcomes -
//! into discrete classifications with attached confidence and explanatory
//! evidence.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     lookout-monitor (library)                       │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │  ┌───────────────┐   ┌────────────────────────────────────────┐    │
//! │  │  change       │──▶│  significance                          │    │
//! │  │  (checksums,  │   │  (lexicons → matches → rule table →    │    │
//! │  │   similarity, │   │   classification + confidence)         │    │
//! │  │   added lines)│   └────────────────────────────────────────┘    │
//! │  └───────────────┘                                                  │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────────┐    │
//! │  │  status       │   │  leadership   │   │  verification     │    │
//! │  │  (indicators →│   │  (roster diff │   │  (weighted signal │    │
//! │  │   3-state     │   │   → severity) │   │   combination)    │    │
//! │  │   verdict)    │   │               │   │                   │    │
//! │  └───────────────┘   └───────────────┘   └───────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Properties
//!
//! - **Pure and deterministic**: no I/O, no clock reads, no randomness.
//!   Identical inputs always produce identical outputs; any "current time"
//!   is an explicit argument.
//! - **Never fails on malformed input**: empty or garbled content degrades
//!   to a low-confidence or uncertain classification, never an error.
//! - **Every confidence is clamped to [0.0, 1.0]**.
//! - **Thread-safe by construction**: all configuration (lexicons, weight
//!   tables, rule tables) is immutable static data; call from as many
//!   workers as you like.
//!
//! The scraping, persistence, LLM, and reporting layers are external
//! collaborators - this crate only consumes their already-materialized
//! outputs and hands back typed results.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod change;
pub mod leadership;
pub mod significance;
pub mod status;
pub mod verification;

mod util;

pub use change::{ChangeDetection, ChangeMagnitude};
pub use leadership::{ChangeSeverity, ExecutiveProfile, LeadershipChange, LeadershipChangeType};
pub use significance::{Classification, KeywordMatch, Sentiment, SignificanceResult};
pub use status::{OperationalStatus, SignalKind, StatusIndicator, StatusReport};
pub use verification::{IdentityVerifier, VerificationSignals, VerificationWeights};
