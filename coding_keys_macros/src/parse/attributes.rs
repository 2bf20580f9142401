//! Field annotation parsing
//!
//! Turns the raw `syn::Attribute`s found on a struct field into the closed
//! [`Annotation`] set the resolver works with. Only two attribute names are
//! registered; everything else is carried along as [`Annotation::Other`] and
//! never looked at again.

use proc_macro2::Span;
use syn::{Attribute, Expr, Meta, Result, Token, punctuated::Punctuated, spanned::Spanned};

/// `#[coding_key_ignored]`
pub const IGNORE_ATTRIBUTE: &str = "coding_key_ignored";

/// `#[coding_key(custom = "key")]`
pub const CUSTOM_KEY_ATTRIBUTE: &str = "coding_key";

/// `#[coding_keys(style = ...)]`, placed on the struct itself
pub const CONTAINER_ATTRIBUTE: &str = "coding_keys";

/// Label accepted in front of a custom key expression
const CUSTOM_LABEL: &str = "custom";

/// A single annotation found on a field
#[derive(Debug, Clone)]
pub enum Annotation {
    /// Leave the field out of the generated keys
    Ignore,

    /// Serialize the field under `expr`. `None` when the attribute carried no
    /// argument, which is rejected later by the resolver.
    CustomKey { span: Span, expr: Option<Expr> },

    /// Any attribute this crate does not own
    Other,
}

impl Annotation {
    /// Classify one attribute
    pub fn from_attribute(attr: &Attribute) -> Result<Self> {
        let path = attr.path();

        if path.is_ident(IGNORE_ATTRIBUTE) {
            return Ok(Annotation::Ignore);
        }

        if !path.is_ident(CUSTOM_KEY_ATTRIBUTE) {
            return Ok(Annotation::Other);
        }

        let expr = match &attr.meta {
            Meta::Path(_) => None,
            Meta::NameValue(name_value) => Some(name_value.value.clone()),
            Meta::List(list) => list
                .parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)?
                .into_iter()
                .next()
                .map(strip_custom_label),
        };

        Ok(Annotation::CustomKey {
            span: attr.span(),
            expr,
        })
    }

    /// Parse every attribute of a field, keeping their order
    pub fn from_attributes(attrs: &[Attribute]) -> Result<Vec<Self>> {
        attrs.iter().map(Self::from_attribute).collect()
    }
}

/// `custom = "key"` -> `"key"`; anything else is returned untouched
fn strip_custom_label(expr: Expr) -> Expr {
    match expr {
        Expr::Assign(assign)
            if matches!(&*assign.left, Expr::Path(label) if label.path.is_ident(CUSTOM_LABEL)) =>
        {
            *assign.right
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::parse_quote;

    fn custom_expr(attr: Attribute) -> Option<String> {
        match Annotation::from_attribute(&attr).unwrap() {
            Annotation::CustomKey { expr, .. } => expr.map(|e| e.to_token_stream().to_string()),
            other => panic!("expected a custom key, got {:?}", other),
        }
    }

    #[test]
    fn test_ignore_attribute() {
        let attr: Attribute = parse_quote!(#[coding_key_ignored]);
        assert!(matches!(
            Annotation::from_attribute(&attr).unwrap(),
            Annotation::Ignore
        ));
    }

    #[test]
    fn test_custom_key_forms() {
        assert_eq!(
            custom_expr(parse_quote!(#[coding_key(custom = "entityID")])),
            Some("\"entityID\"".to_string())
        );
        assert_eq!(
            custom_expr(parse_quote!(#[coding_key("entityID")])),
            Some("\"entityID\"".to_string())
        );
        assert_eq!(
            custom_expr(parse_quote!(#[coding_key = "entityID"])),
            Some("\"entityID\"".to_string())
        );
        assert_eq!(
            custom_expr(parse_quote!(#[coding_key(custom = ENTITY_KEY)])),
            Some("ENTITY_KEY".to_string())
        );
    }

    #[test]
    fn test_custom_key_only_first_argument_counts() {
        assert_eq!(
            custom_expr(parse_quote!(#[coding_key("first", "second")])),
            Some("\"first\"".to_string())
        );
    }

    #[test]
    fn test_custom_key_without_argument() {
        assert_eq!(custom_expr(parse_quote!(#[coding_key])), None);
        assert_eq!(custom_expr(parse_quote!(#[coding_key()])), None);
    }

    #[test]
    fn test_other_attributes_are_opaque() {
        let attr: Attribute = parse_quote!(#[serde(rename = "x")]);
        assert!(matches!(
            Annotation::from_attribute(&attr).unwrap(),
            Annotation::Other
        ));

        // The container attribute means nothing on a field
        let attr: Attribute = parse_quote!(#[coding_keys(style = kebab_cased)]);
        assert!(matches!(
            Annotation::from_attribute(&attr).unwrap(),
            Annotation::Other
        ));
    }

    #[test]
    fn test_unparseable_arguments_are_errors() {
        let attr: Attribute = parse_quote!(#[coding_key(=>)]);
        assert!(Annotation::from_attribute(&attr).is_err());
    }
}
