//! # Coding Keys
//!
//! Derive the serialization keys of a struct's fields at compile time.
//!
//! `#[derive(CodingKeys)]` generates a `{Struct}CodingKeys` enum with one
//! variant per field, named after the field. Each variant knows the key its field is serialized
//! under: a custom key, or the field name converted to snake_case or
//! kebab-case.
//!
//! ## Features
//!
//! - **Naming styles**: `snake_cased` (default) or `kebab_cased`, per struct
//! - **Custom keys**: `#[coding_key(custom = "entityID")]`
//! - **Ignored fields**: `#[coding_key_ignored]`
//! - **Raw identifiers**: `r#type` is keyed as `type`
//! - **Serde** (default feature): generated keys serialize as their string
//!
//! ## Quick Start
//!
//! ```rust
//! use coding_keys::prelude::*;
//!
//! #[derive(CodingKeys)]
//! #[allow(non_snake_case)]
//! struct Entity {
//!     #[coding_key(custom = "entityID")]
//!     id: String,
//!     currentValue: i32,
//!     #[coding_key_ignored]
//!     foo: bool,
//!     count: i32,
//!     r#protocol: String,
//! }
//!
//! let keys: Vec<&str> = EntityCodingKeys::keys().collect();
//! assert_eq!(keys, ["entityID", "current_value", "count", "protocol"]);
//! assert_eq!(Entity::key_for_field("currentValue"), Some("current_value"));
//! assert_eq!(Entity::key_for_field("foo"), None);
//! ```
//!
//! Malformed input is rejected at compile time:
//!
//! ```compile_fail
//! use coding_keys::CodingKeys;
//!
//! #[derive(CodingKeys)]
//! struct Entity {
//!     #[coding_key()]
//!     id: String,
//! }
//! ```
//!
//! ```compile_fail
//! use coding_keys::CodingKeys;
//!
//! #[derive(CodingKeys)]
//! #[coding_keys(style = camelCased)]
//! struct Entity {
//!     id: String,
//! }
//! ```

pub mod errors;
pub mod prelude;
pub mod traits;

pub use coding_keys_macros::CodingKeys;
pub use errors::{CodingKeysError, CodingKeysResult};
pub use traits::{CodingKey, HasCodingKeys};

/// Re-exports used by generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "serde")]
    pub use serde;
}
