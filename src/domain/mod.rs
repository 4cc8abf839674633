//! Domain logic - pure classification rules independent of the source-control API

pub mod bump;
pub mod policy;
pub mod upgrade;
pub mod version;

pub use bump::{classify_bump, BumpLevel};
pub use policy::{is_allowed, MergeLevel, MergePolicy};
pub use upgrade::{parse_title, UpgradeDescriptor};
