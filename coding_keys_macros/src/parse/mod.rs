//! Parsing infrastructure for the CodingKeys derive
//!
//! Reads the annotated struct into plain declarations the generator can work
//! on without touching `syn` attributes again:
//!
//! 1. **Attributes** (`attributes.rs`) - field attributes into [`attributes::Annotation`]s
//! 2. **Fields** (`field.rs`) - field declarations and their [`Disposition`]
//! 3. **Style** (`style.rs`) - the `#[coding_keys(style = ...)]` container option
//! 4. **Record** (`record.rs`) - the whole struct
//!
//! ```text
//! DeriveInput
//!     ↓
//! RecordDeclaration (style + FieldDeclarations)
//!     ↓
//! resolve() per field → Disposition
//!     ↓
//! Mapping generation (next phase)
//! ```

pub mod attributes;
pub mod field;
pub mod record;
pub mod style;

pub use field::{Disposition, FieldDeclaration, Key, resolve};
pub use record::RecordDeclaration;
