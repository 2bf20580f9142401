use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Expr, Field, Ident, Result};

use super::attributes::Annotation;
use crate::errors::Diagnostic;

/// A named struct field as seen by the mapping generator
#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    /// Field identifier, `r#` escape included
    pub ident: Ident,

    /// Field annotations in declaration order
    pub annotations: Vec<Annotation>,
}

impl FieldDeclaration {
    pub fn new(ident: Ident, annotations: Vec<Annotation>) -> Self {
        Self { ident, annotations }
    }

    /// Read a field's identifier and annotations.
    ///
    /// Returns `None` for tuple fields, which have no identifier to map.
    pub fn from_field(field: &Field) -> Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Ok(None);
        };
        let annotations = Annotation::from_attributes(&field.attrs)?;
        Ok(Some(Self::new(ident.clone(), annotations)))
    }
}

/// Serialized key of a field
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// Expression from `#[coding_key(...)]`, emitted verbatim
    Custom(Expr),

    /// Identifier transformed by the record's naming style
    Derived(String),
}

impl ToTokens for Key {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Key::Custom(expr) => expr.to_tokens(tokens),
            Key::Derived(name) => name.to_tokens(tokens),
        }
    }
}

/// What to do with a field
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
    Skip,
    Rename(Key),
    Keep,
}

/// Classify a field: ignored, custom keyed, or left to the naming style.
///
/// `#[coding_key_ignored]` wins over everything else on the field. A
/// `#[coding_key]` without an argument is a hard error.
pub fn resolve(field: &FieldDeclaration) -> std::result::Result<Disposition, Diagnostic> {
    if field
        .annotations
        .iter()
        .any(|annotation| matches!(annotation, Annotation::Ignore))
    {
        return Ok(Disposition::Skip);
    }

    let custom = field.annotations.iter().find_map(|annotation| match annotation {
        Annotation::CustomKey { span, expr } => Some((*span, expr)),
        _ => None,
    });

    match custom {
        Some((_, Some(expr))) => Ok(Disposition::Rename(Key::Custom(expr.clone()))),
        Some((span, None)) => Err(Diagnostic::malformed_custom_key(span)),
        None => Ok(Disposition::Keep),
    }
}
