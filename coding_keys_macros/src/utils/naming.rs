use proc_macro2::Ident;
use strum::EnumString;

/// Escape prefix carried by raw identifiers (`r#type`).
const RAW_PREFIX: &str = "r#";

/// Casing convention applied to field identifiers that carry no custom key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
pub enum NamingStyle {
    #[default]
    #[strum(serialize = "snake_cased", serialize = "snakeCased")]
    SnakeCased,
    #[strum(serialize = "kebab_cased", serialize = "kebabCased")]
    KebabCased,
}

impl NamingStyle {
    /// Separator emitted in front of every uppercase character
    pub fn separator(self) -> char {
        match self {
            NamingStyle::SnakeCased => '_',
            NamingStyle::KebabCased => '-',
        }
    }
}

/// Strip one level of raw-identifier escaping (`r#type` -> `type`)
pub fn unescape(identifier: &str) -> &str {
    match identifier.strip_prefix(RAW_PREFIX) {
        Some(rest) if !rest.is_empty() => rest,
        _ => identifier,
    }
}

/// Apply a naming style to an already unescaped identifier.
///
/// Every uppercase character is replaced by the style's separator followed
/// by its lowercase form, with no lookahead: `HTTPCode` becomes
/// `_h_t_t_p_code` under [`NamingStyle::SnakeCased`].
pub fn convert(identifier: &str, style: NamingStyle) -> String {
    identifier
        .chars()
        .fold(String::with_capacity(identifier.len()), |mut out, c| {
            if c.is_uppercase() {
                out.push(style.separator());
                out.extend(c.to_lowercase());
            } else {
                out.push(c);
            }
            out
        })
}

/// Unescape then convert (e.g. `r#currentValue` -> `current_value`)
pub fn normalize(identifier: &str, style: NamingStyle) -> String {
    convert(unescape(identifier), style)
}

/// Generate the keys enum name (e.g., Entity -> EntityCodingKeys)
pub fn coding_keys_enum_name(record_name: &Ident) -> Ident {
    quote::format_ident!("{}CodingKeys", record_name)
}
