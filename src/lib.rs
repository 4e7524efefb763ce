//! Release tag resolution
//!
//! Turns loosely formatted release tags (`release-3_0_2`, `2.3.4-p2`,
//! `v1.10.2rc1-final`) into PEP 440 versions that can be compared, and
//! decides which hosting provider ("holder") serves a repository identifier.
//!
//! # Modules
//!
//! - [`config`]: Per-holder settings (pre-release policy, major filter, branch patterns)
//! - [`holder`]: Holder descriptors and the classification registry
//! - [`version`]: Tag rewriting, parsing, major filtering and latest selection

pub mod config;
pub mod holder;
pub mod version;
