//! ConfigMap field access
//!
//! Treats a ConfigMap as a field-level key/value store:
//! - `builder` assembles ConfigMap values without a cluster
//! - `accessor` defines how ConfigMaps are fetched and persisted
//! - `fields` reads and updates single fields on top of an accessor
//! - `memory` is an accessor backed by an in-process map

pub mod accessor;
pub mod builder;
pub mod fields;
pub mod memory;

pub use accessor::{GetUpdater, Getter};
pub use builder::{builder, ConfigMapBuilder};
pub use fields::{read_data, read_key, update_field};
pub use memory::InMemoryConfigMaps;
