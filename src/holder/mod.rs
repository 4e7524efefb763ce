//! Holder layer
//! - types.rs: Holder kinds (GitHub, GitLab, Mercurial, ...)
//! - descriptor.rs: Per-holder URL/name tables, hostname and project matching
//! - registry.rs: Ordered, immutable set of descriptors used to classify repos

pub mod descriptor;
pub mod registry;
pub mod types;

pub use descriptor::HolderDescriptor;
pub use registry::HolderRegistry;
pub use types::HolderType;
