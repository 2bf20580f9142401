//! Prelude module for convenient imports.
//!
//! ```rust
//! use coding_keys::prelude::*;
//! ```

pub use crate::CodingKeys;
pub use crate::errors::{CodingKeysError, CodingKeysResult};
pub use crate::traits::{CodingKey, HasCodingKeys};
