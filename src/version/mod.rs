//! Version resolution layer for release tags
//!
//! This module turns raw tags published by a holder into canonical PEP 440
//! versions, and filters them by pre-release policy and major line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Rewrite   │────▶│   Parser    │────▶│    Major    │
//! │ (tag rules) │     │  (PEP 440)  │     │  (filter)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                   │                   │
//!        │                   ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Sanitizer  │────▶│  Fallback   │     │   Latest    │
//! │ (pipeline)  │     │ (extract)   │     │ (pick max)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: Rejection reasons and configuration errors
//! - [`latest`]: Picks the greatest accepted version out of a tag list
//! - [`major`]: Major/branch filter with optional regex overrides
//! - [`parser`]: Strict PEP 440 parsing
//! - [`rewrite`]: Ordered, named text rewrites applied before parsing
//! - [`sanitizer`]: The full tag-to-version pipeline

pub mod error;
pub mod latest;
pub mod major;
pub mod parser;
pub mod rewrite;
pub mod sanitizer;

pub use error::{ConfigError, InvalidReason};
pub use latest::{LatestRelease, latest_release};
pub use major::{BranchFilters, matches_major};
pub use parser::{CanonicalVersion, parse_version};
pub use sanitizer::{Sanitized, TagSanitizer, sanitize_version};
