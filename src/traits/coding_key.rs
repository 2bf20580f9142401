//! Traits implemented by `#[derive(CodingKeys)]`.

use crate::errors::{CodingKeysError, CodingKeysResult};

/// Serialization keys of a struct, one value per mapped field.
///
/// Implemented by the generated `{Struct}CodingKeys` enum. Ignored fields have
/// no value at all.
///
/// # Example
///
/// ```
/// use coding_keys::{CodingKey, CodingKeys};
///
/// #[derive(CodingKeys)]
/// #[coding_keys(style = kebab_cased)]
/// #[allow(non_snake_case)]
/// struct Entity {
///     #[coding_key(custom = "entity_id")]
///     id: String,
///     currentValue: i32,
/// }
///
/// let keys: Vec<&str> = EntityCodingKeys::keys().collect();
/// assert_eq!(keys, ["entity_id", "current-value"]);
/// assert_eq!(
///     EntityCodingKeys::from_key("current-value"),
///     Ok(EntityCodingKeys::currentValue)
/// );
/// ```
pub trait CodingKey: Copy + Eq + 'static {
    /// Every key, in field declaration order
    const ALL: &'static [Self];

    /// The serialized key
    fn as_str(&self) -> &'static str;

    /// Name of the field in the struct, without any `r#` prefix
    fn field_name(&self) -> &'static str;

    /// Look a key up by its serialized form
    fn from_key(key: &str) -> CodingKeysResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == key)
            .ok_or_else(|| CodingKeysError::UnknownKey(key.to_string()))
    }

    /// Look a key up by the name of its field
    fn from_field_name(field: &str) -> CodingKeysResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.field_name() == field)
            .ok_or_else(|| CodingKeysError::UnknownField(field.to_string()))
    }

    /// Serialized keys in field declaration order
    fn keys() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|key| key.as_str())
    }
}

/// A struct with generated coding keys
pub trait HasCodingKeys {
    type CodingKeys: CodingKey;

    fn coding_keys() -> &'static [Self::CodingKeys] {
        <Self::CodingKeys as CodingKey>::ALL
    }

    /// Serialized key of `field`, `None` for unknown or ignored fields
    fn key_for_field(field: &str) -> Option<&'static str> {
        <Self::CodingKeys as CodingKey>::from_field_name(field)
            .ok()
            .map(|key| key.as_str())
    }
}
