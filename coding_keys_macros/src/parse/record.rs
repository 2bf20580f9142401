use syn::{Data, DeriveInput, Generics, Ident, Result, Visibility};

use super::field::FieldDeclaration;
use super::style::parse_style;
use crate::utils::naming::NamingStyle;

/// Everything the derive reads off the annotated struct
#[derive(Debug, Clone)]
pub struct RecordDeclaration {
    pub ident: Ident,
    pub vis: Visibility,
    pub generics: Generics,
    pub style: NamingStyle,
    /// Named fields in declaration order; tuple fields are left out
    pub fields: Vec<FieldDeclaration>,
}

impl RecordDeclaration {
    pub fn from_derive_input(input: &DeriveInput) -> Result<Self> {
        let Data::Struct(data_struct) = &input.data else {
            return Err(syn::Error::new_spanned(
                input,
                "CodingKeys can only be derived for structs",
            ));
        };

        let style = parse_style(&input.attrs)?;

        let mut fields = Vec::with_capacity(data_struct.fields.len());
        for field in &data_struct.fields {
            if let Some(declaration) = FieldDeclaration::from_field(field)? {
                fields.push(declaration);
            }
        }

        Ok(Self {
            ident: input.ident.clone(),
            vis: input.vis.clone(),
            generics: input.generics.clone(),
            style,
            fields,
        })
    }
}
