//! Rendering of the generated keys enum
//!
//! For `struct Entity` this emits `EntityCodingKeys`, one variant per mapped
//! field, plus the `CodingKey` and `HasCodingKeys` implementations that the
//! runtime crate defines.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::MappingEntry;
use crate::parse::RecordDeclaration;
use crate::utils::naming::{coding_keys_enum_name, unescape};

/// Render the keys enum and its trait impls for a non-empty mapping
pub fn generate_coding_keys(record: &RecordDeclaration, entries: &[MappingEntry]) -> TokenStream {
    let record_name = &record.ident;
    let vis = &record.vis;
    let enum_name = coding_keys_enum_name(record_name);
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    // Variants are the field identifiers themselves, `r#` escape included, so
    // distinct fields always give distinct variants
    let variants: Vec<&Ident> = entries.iter().map(|entry| &entry.field).collect();
    let field_names: Vec<String> = entries
        .iter()
        .map(|entry| unescape(&entry.field.to_string()).to_string())
        .collect();
    let keys: Vec<TokenStream> = entries
        .iter()
        .zip(&field_names)
        .map(|(entry, field_name)| match &entry.key {
            Some(key) => quote!(#key),
            None => quote!(#field_name),
        })
        .collect();

    let doc = format!("Serialization keys of [`{}`].", record_name);
    let serde_impls = generate_serde_impls(&enum_name);

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        #vis enum #enum_name {
            #(#variants),*
        }

        impl ::coding_keys::CodingKey for #enum_name {
            const ALL: &'static [Self] = &[#(Self::#variants),*];

            fn as_str(&self) -> &'static str {
                match self {
                    #(Self::#variants => #keys,)*
                }
            }

            fn field_name(&self) -> &'static str {
                match self {
                    #(Self::#variants => #field_names,)*
                }
            }
        }

        impl ::core::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::coding_keys::CodingKey::as_str(self))
            }
        }

        impl ::core::convert::AsRef<str> for #enum_name {
            fn as_ref(&self) -> &str {
                ::coding_keys::CodingKey::as_str(self)
            }
        }

        impl #impl_generics ::coding_keys::HasCodingKeys for #record_name #ty_generics #where_clause {
            type CodingKeys = #enum_name;
        }

        #serde_impls
    }
}

/// Keys serialize as their string form and deserialize back through
/// `CodingKey::from_key`
#[cfg(feature = "serde")]
fn generate_serde_impls(enum_name: &Ident) -> TokenStream {
    quote! {
        impl ::coding_keys::__private::serde::Serialize for #enum_name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::coding_keys::__private::serde::Serializer,
            {
                serializer.serialize_str(::coding_keys::CodingKey::as_str(self))
            }
        }

        impl<'de> ::coding_keys::__private::serde::Deserialize<'de> for #enum_name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::coding_keys::__private::serde::Deserializer<'de>,
            {
                let key = <::std::string::String as ::coding_keys::__private::serde::Deserialize<'de>>::deserialize(deserializer)?;
                <Self as ::coding_keys::CodingKey>::from_key(&key)
                    .map_err(<D::Error as ::coding_keys::__private::serde::de::Error>::custom)
            }
        }
    }
}

#[cfg(not(feature = "serde"))]
fn generate_serde_impls(_enum_name: &Ident) -> TokenStream {
    TokenStream::new()
}
