use syn::Ident;

use crate::errors::Diagnostic;
use crate::parse::{Disposition, FieldDeclaration, Key, resolve};
use crate::utils::naming::{NamingStyle, normalize, unescape};

/// The key decided for one field
#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry {
    /// Original identifier, `r#` escape included
    pub field: Ident,

    /// `None` when the unescaped identifier is already the key
    pub key: Option<Key>,
}

/// Decide the key of every field, in declaration order.
///
/// Ignored fields get no entry. Returns `Ok(None)` when no field is left, in
/// which case nothing should be generated for the record. The first malformed
/// field aborts the whole mapping.
pub fn generate(
    fields: &[FieldDeclaration],
    style: NamingStyle,
) -> Result<Option<Vec<MappingEntry>>, Diagnostic> {
    let mut entries = Vec::with_capacity(fields.len());

    for field in fields {
        let key = match resolve(field)? {
            Disposition::Skip => {
                log::debug!("coding key for `{}` skipped", field.ident);
                continue;
            }
            Disposition::Rename(key) => Some(key),
            Disposition::Keep => {
                let raw = field.ident.to_string();
                let transformed = normalize(&raw, style);
                (transformed != unescape(&raw)).then_some(Key::Derived(transformed))
            }
        };

        log::debug!(
            "coding key for `{}`: {}",
            field.ident,
            key.as_ref()
                .map_or_else(|| "identifier".to_string(), |key| quote::quote!(#key).to_string())
        );
        entries.push(MappingEntry {
            field: field.ident.clone(),
            key,
        });
    }

    Ok((!entries.is_empty()).then_some(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DiagnosticKind;
    use crate::parse::RecordDeclaration;
    use syn::{DeriveInput, Expr, parse_quote};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn generate_for(input: DeriveInput) -> Result<Option<Vec<MappingEntry>>, Diagnostic> {
        let record = RecordDeclaration::from_derive_input(&input).unwrap();
        generate(&record.fields, record.style)
    }

    /// (field, key) pairs with string-literal keys unquoted
    fn summarize(entries: &[MappingEntry]) -> Vec<(String, Option<String>)> {
        entries
            .iter()
            .map(|entry| {
                let key = entry.key.as_ref().map(|key| match key {
                    Key::Derived(name) => name.clone(),
                    Key::Custom(Expr::Lit(lit)) => match &lit.lit {
                        syn::Lit::Str(s) => s.value(),
                        other => quote::quote!(#other).to_string(),
                    },
                    Key::Custom(expr) => quote::quote!(#expr).to_string(),
                });
                (entry.field.to_string(), key)
            })
            .collect()
    }

    fn entity(style: Option<&str>, custom: &str) -> DeriveInput {
        let style_attr = style.map(|style| {
            let style: Ident = syn::parse_str(style).unwrap();
            quote::quote!(#[coding_keys(style = #style)])
        });
        parse_quote! {
            #style_attr
            struct Entity {
                #[coding_key(custom = #custom)]
                id: String,
                currentValue: i32,
                #[coding_key_ignored]
                foo: bool,
                count: i32,
                r#protocol: String,
            }
        }
    }

    #[test]
    fn test_default_style_mapping() {
        init_logger();
        let entries = generate_for(entity(None, "entityID")).unwrap().unwrap();
        assert_eq!(
            summarize(&entries),
            vec![
                ("id".to_string(), Some("entityID".to_string())),
                ("currentValue".to_string(), Some("current_value".to_string())),
                ("count".to_string(), None),
                ("r#protocol".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_kebab_style_mapping() {
        init_logger();
        let entries = generate_for(entity(Some("kebab_cased"), "entity_id"))
            .unwrap()
            .unwrap();
        assert_eq!(
            summarize(&entries),
            vec![
                ("id".to_string(), Some("entity_id".to_string())),
                ("currentValue".to_string(), Some("current-value".to_string())),
                ("count".to_string(), None),
                ("r#protocol".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_all_ignored_needs_no_mapping() {
        let input: DeriveInput = parse_quote! {
            struct Entity {
                #[coding_key_ignored]
                foo: bool,
                #[coding_key_ignored]
                bar: bool,
            }
        };
        assert!(generate_for(input).unwrap().is_none());

        let input: DeriveInput = parse_quote!(struct Empty {});
        assert!(generate_for(input).unwrap().is_none());
    }

    #[test]
    fn test_empty_custom_key_aborts_everything() {
        let input: DeriveInput = parse_quote! {
            struct Entity {
                count: i32,
                #[coding_key()]
                id: String,
                #[coding_key]
                other: String,
            }
        };
        let err = generate_for(input).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::MalformedCustomKey);
        assert_eq!(err.kind.id(), "emptyArgument");
    }

    #[test]
    fn test_malformed_custom_key_fails_under_every_style() {
        for style in [NamingStyle::SnakeCased, NamingStyle::KebabCased] {
            let fields = vec![FieldDeclaration::from_field(&parse_quote!(
                #[coding_key]
                id: String
            ))
            .unwrap()
            .unwrap()];
            let err = generate(&fields, style).unwrap_err();
            assert_eq!(err.kind, DiagnosticKind::MalformedCustomKey);
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let input: DeriveInput = parse_quote! {
            struct Ordered {
                zeta: u8,
                #[coding_key_ignored]
                skipped: u8,
                alphaBeta: u8,
                #[coding_key("m")]
                mid: u8,
                a: u8,
            }
        };
        let entries = generate_for(input).unwrap().unwrap();
        let names: Vec<String> = entries.iter().map(|e| e.field.to_string()).collect();
        assert_eq!(names, ["zeta", "alphaBeta", "mid", "a"]);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let record =
            RecordDeclaration::from_derive_input(&entity(Some("kebab_cased"), "entity_id")).unwrap();
        let first = generate(&record.fields, record.style).unwrap();
        let second = generate(&record.fields, record.style).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_raw_identifier_with_uppercase_gets_a_key() {
        let input: DeriveInput = parse_quote! {
            struct Raw {
                r#myType: u8,
            }
        };
        let entries = generate_for(input).unwrap().unwrap();
        assert_eq!(
            summarize(&entries),
            vec![("r#myType".to_string(), Some("my_type".to_string()))]
        );
    }
}
