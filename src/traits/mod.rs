pub mod coding_key;

// Re-export commonly used types
pub use coding_key::{CodingKey, HasCodingKeys};
