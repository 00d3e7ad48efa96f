//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates attributes from the struct and its fields
//! during macro expansion.

use syn::spanned::Spanned;
use syn::{Attribute, Field, LitStr};

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every variable name declared in the struct.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.prefix = lit.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute, expected `prefix`"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed field-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable the field is overridden from.
    ///
    /// `None` means the field is never converted, though struct-typed fields
    /// are still descended into.
    pub name: Option<String>,

    /// Fall back to the file named by `{VAR}_FILE`.
    pub from_file: bool,

    /// Leave the field out of the walk.
    pub skip: bool,
}

impl FieldAttrs {
    /// Extract and validate `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes other than `env` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();
        let mut skip_span = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    if attrs.name.is_some() {
                        return Err(meta.error("duplicate `name` in env attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new_spanned(
                            lit,
                            "environment variable name must not be empty",
                        ));
                    }
                    attrs.name = Some(lit.value());
                    return Ok(());
                }

                if meta.path.is_ident("from_file") {
                    attrs.from_file = true;
                    return Ok(());
                }

                if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    skip_span = Some(meta.path.span());
                    return Ok(());
                }

                Err(meta.error(
                    "unsupported env attribute, expected one of `name`, `from_file`, `skip`",
                ))
            })?;
        }

        if let Some(span) = skip_span.filter(|_| attrs.name.is_some() || attrs.from_file) {
            return Err(syn::Error::new(
                span,
                "`skip` cannot be combined with `name` or `from_file`",
            ));
        }

        if attrs.from_file && attrs.name.is_none() {
            return Err(syn::Error::new_spanned(
                field,
                "`from_file` requires `name = \"VAR\"`",
            ));
        }

        Ok(attrs)
    }
}
