use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use crate::generate::{generate, generate_coding_keys};
use crate::parse::RecordDeclaration;

mod errors;
mod generate;
mod parse;
mod utils;

/// Derives a `{StructName}CodingKeys` enum holding the serialized key of every
/// field, and implements `HasCodingKeys` for the struct.
///
/// Each variant is named exactly like its field (`r#type` stays `r#type`), so
/// the enum allows `non_camel_case_types`.
///
/// # Attributes
///
/// - `#[coding_keys(style = snake_cased | kebab_cased)]` - **Optional**, on the
///   struct. Naming style applied to fields without a custom key. Defaults to
///   `snake_cased`. The value may also be written as a string literal.
/// - `#[coding_key(custom = "key")]` - **Optional**, on a field. Serializes the
///   field under the given expression, which is emitted verbatim and must
///   evaluate to a `&'static str`. `#[coding_key("key")]` is accepted as well.
///   An empty `#[coding_key]` is a compile error.
/// - `#[coding_key_ignored]` - **Optional**, on a field. The field gets no key.
///   Takes precedence over `#[coding_key]`.
///
/// Fields without a custom key are converted by inserting the style's
/// separator before every uppercase letter and lowercasing it, so
/// `currentValue` becomes `current_value` (or `current-value`). Raw identifiers
/// lose their `r#` prefix. Each capital is converted on its own: `HTTPCode`
/// becomes `_h_t_t_p_code`.
///
/// If every field is ignored (or the struct has no named fields) nothing is
/// generated.
///
/// # Example
///
/// ```rust,ignore
/// use coding_keys::{CodingKey, CodingKeys};
///
/// #[derive(CodingKeys)]
/// #[allow(non_snake_case)]
/// struct Entity {
///     #[coding_key(custom = "entityID")]
///     id: String,
///     currentValue: i32,
///     #[coding_key_ignored]
///     foo: bool,
///     count: i32,
///     r#type: String,
/// }
///
/// // Generates:
/// // enum EntityCodingKeys { Id, CurrentValue, Count, Type }
/// assert_eq!(EntityCodingKeys::id.as_str(), "entityID");
/// assert_eq!(EntityCodingKeys::currentValue.as_str(), "current_value");
/// assert_eq!(EntityCodingKeys::count.as_str(), "count");
/// assert_eq!(EntityCodingKeys::r#type.as_str(), "type");
/// ```
///
/// # See Also
///
/// - `CodingKey` - The trait implemented by the generated enum
/// - `HasCodingKeys` - The trait implemented by the struct
#[proc_macro_derive(CodingKeys, attributes(coding_keys, coding_key, coding_key_ignored))]
pub fn coding_keys_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let record = RecordDeclaration::from_derive_input(input)?;
    match generate(&record.fields, record.style)? {
        Some(entries) => Ok(generate_coding_keys(&record, &entries)),
        None => Ok(proc_macro2::TokenStream::new()),
    }
}
