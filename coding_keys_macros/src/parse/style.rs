use std::str::FromStr;

use syn::{Attribute, Expr, Lit, Meta, Result, spanned::Spanned};

use super::attributes::CONTAINER_ATTRIBUTE;
use crate::errors::Diagnostic;
use crate::utils::naming::NamingStyle;

/// Argument of `#[coding_keys(...)]` selecting the naming style
const STYLE_ARGUMENT: &str = "style";

/// Read the naming style from the struct's `#[coding_keys(...)]` attributes.
///
/// Falls back to [`NamingStyle::SnakeCased`] when no style is given. When the
/// attribute is repeated the last `style` wins.
pub fn parse_style(attrs: &[Attribute]) -> Result<NamingStyle> {
    let mut style = NamingStyle::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(CONTAINER_ATTRIBUTE)) {
        // Bare `#[coding_keys]` carries no arguments at all
        if let Meta::Path(_) = attr.meta {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(STYLE_ARGUMENT) {
                let value: Expr = meta.value()?.parse()?;
                style = style_from_expr(&value)?;
                Ok(())
            } else {
                Err(meta.error("unknown coding_keys argument, expected `style`"))
            }
        })?;
    }

    log::trace!("coding keys style resolved to {:?}", style);
    Ok(style)
}

/// `snake_cased`, `kebabCased`, `"kebab_cased"`, ...
pub fn style_from_expr(expr: &Expr) -> std::result::Result<NamingStyle, Diagnostic> {
    let name = match expr {
        Expr::Path(path) => path.path.get_ident().map(ToString::to_string),
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => Some(s.value()),
            _ => None,
        },
        _ => None,
    };

    name.and_then(|name| NamingStyle::from_str(&name).ok())
        .ok_or_else(|| Diagnostic::unrecognized_style(expr.span()))
}
