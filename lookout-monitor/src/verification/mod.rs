//! Identity Verification Module.
//!
//! Decides whether an article or discovered asset is really about a given
//! company, by combining independent verification signals into one weighted
//! confidence score:
//!
//! - **domain**: the company's domain appears at a word edge in the URL or
//!   content
//! - **logo**: perceptual logo similarity (computed externally)
//! - **context**: the company name appears near business language, not as a
//!   generic mention
//! - **llm**: an external LLM judgment
//!
//! Signal *production* for logo and llm lives outside this crate; the engine
//! only combines already-materialized values. Missing signals contribute
//! nothing, unknown signal names are ignored rather than rejected.
//!
//! # Usage
//!
//! ```ignore
//! use std::collections::HashMap;
//! use lookout_monitor::verification::IdentityVerifier;
//!
//! let verifier = IdentityVerifier::new();
//! let signals = HashMap::from([
//!     ("domain".to_string(), 1.0),
//!     ("context".to_string(), 1.0),
//! ]);
//!
//! let confidence = verifier.confidence(&signals);
//! assert!(verifier.is_verified(confidence)); // 0.45 >= 0.40
//! ```

pub mod signals;
pub mod verifier;

pub use signals::{base_domain, domain_matches, name_in_business_context, BUSINESS_TERMS};
pub use verifier::{
    build_evidence, is_verified, weighted_confidence, IdentityVerifier, VerificationSignals,
    VerificationWeights, DEFAULT_VERIFICATION_THRESHOLD,
};
