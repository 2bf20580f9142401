//! Code generation for the CodingKeys derive
//!
//! - **mapping** - decides the key of every field
//! - **keys_enum** - renders the decided keys as a `{Record}CodingKeys` enum

pub mod keys_enum;
pub mod mapping;

pub use keys_enum::generate_coding_keys;
pub use mapping::{MappingEntry, generate};
