//! Derive macro implementation for envirotron

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Visibility};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `Override` derive macro
///
/// Implements `envirotron::Override` (the field walk) and `envirotron::Field`
/// (so the struct can itself be nested in another overridable struct).
///
/// Only `pub` fields take part. Every public field that is not skipped must
/// have a type implementing `envirotron::Field`: a `ParseEnv` scalar, a struct
/// deriving `Override`, or a standard collection.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[env(name = "VAR")]`: Override the field from `VAR`
/// - `#[env(from_file)]`: Support `{VAR}_FILE` pattern (requires `name`)
/// - `#[env(skip)]`: Leave the field out
///
/// # Example
///
/// See the `envirotron` crate documentation for usage examples.
#[proc_macro_derive(Override, attributes(env))]
pub fn derive_override(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Override only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Override only supports structs",
            ));
        }
    };

    let mut generics = input.generics.clone();
    let bound_fields = !generics.params.is_empty();
    let mut applies = Vec::new();

    for field in fields {
        let attrs = FieldAttrs::from_field(field)?;

        // Private and restricted fields are never touched
        if !matches!(field.vis, Visibility::Public(_)) || attrs.skip {
            continue;
        }

        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;

        if bound_fields {
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#field_type: ::envirotron::Field));
        }

        let annotation = match attrs.name {
            Some(name) => {
                let env_var_name = format!("{}{}", struct_attrs.prefix, name);
                let from_file = attrs.from_file;
                quote! {
                    ::core::option::Option::Some(
                        ::envirotron::Annotation::new(#env_var_name).from_file(#from_file),
                    )
                }
            }
            None => quote!(::core::option::Option::None),
        };

        applies.push(quote! {
            ::envirotron::Field::apply(&mut self.#field_name, #annotation, env)?;
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envirotron::Override for #struct_name #ty_generics #where_clause {
            fn override_from(
                &mut self,
                env: &dyn ::envirotron::Env,
            ) -> ::core::result::Result<(), ::envirotron::EnvError> {
                #(#applies)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::envirotron::Field for #struct_name #ty_generics #where_clause {
            fn apply(
                &mut self,
                annotation: ::core::option::Option<::envirotron::Annotation<'_>>,
                env: &dyn ::envirotron::Env,
            ) -> ::core::result::Result<(), ::envirotron::EnvError> {
                ::envirotron::field::descend(self, annotation, env)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(input: DeriveInput) -> String {
        expand(input).unwrap().to_string()
    }

    fn expand_error(input: DeriveInput) -> String {
        expand(input).unwrap_err().to_string()
    }

    #[test]
    fn test_annotated_public_field_is_applied() {
        let out = expanded(parse_quote! {
            struct Shallow {
                #[env(name = "NAME")]
                pub name: String,
            }
        });

        assert!(out.contains("impl :: envirotron :: Override for Shallow"));
        assert!(out.contains("impl :: envirotron :: Field for Shallow"));
        assert!(out.contains("self . name"));
        assert!(out.contains("\"NAME\""));
    }

    #[test]
    fn test_private_fields_are_left_out() {
        let out = expanded(parse_quote! {
            struct Shallow {
                #[env(name = "NAME")]
                pub name: String,
                #[env(name = "SECRET")]
                hidden: String,
                #[env(name = "CRATE_ONLY")]
                pub(crate) crate_only: String,
            }
        });

        assert!(out.contains("self . name"));
        assert!(!out.contains("hidden"));
        assert!(!out.contains("SECRET"));
        assert!(!out.contains("crate_only"));
    }

    #[test]
    fn test_unannotated_public_field_is_walked_without_annotation() {
        let out = expanded(parse_quote! {
            struct Deep {
                pub nested: Shallow,
            }
        });

        assert!(out.contains("self . nested , :: core :: option :: Option :: None"));
    }

    #[test]
    fn test_skipped_field_is_left_out() {
        let out = expanded(parse_quote! {
            struct Config {
                #[env(skip)]
                pub opaque: Opaque,
            }
        });

        assert!(!out.contains("opaque"));
    }

    #[test]
    fn test_prefix_is_prepended() {
        let out = expanded(parse_quote! {
            #[env(prefix = "THING_")]
            struct Config {
                #[env(name = "URL")]
                pub url: String,
            }
        });

        assert!(out.contains("\"THING_URL\""));
        assert!(!out.contains("\"URL\""));
    }

    #[test]
    fn test_from_file_flag_is_passed() {
        let out = expanded(parse_quote! {
            struct Config {
                #[env(name = "PASSWORD", from_file)]
                pub password: String,
            }
        });

        assert!(out.contains("Annotation :: new (\"PASSWORD\")"));
        assert!(out.contains("from_file (true)"));
    }

    #[test]
    fn test_generic_fields_get_bounds() {
        let out = expanded(parse_quote! {
            struct Wrapper<T> {
                #[env(name = "INNER")]
                pub inner: T,
            }
        });

        assert!(out.contains("where T : :: envirotron :: Field"));
    }

    #[test]
    fn test_enum_is_rejected() {
        let err = expand_error(parse_quote! {
            enum Mode { Fast, Slow }
        });
        assert_eq!(err, "Override only supports structs");
    }

    #[test]
    fn test_tuple_struct_is_rejected() {
        let err = expand_error(parse_quote! {
            struct Config(pub String);
        });
        assert_eq!(err, "Override only supports structs with named fields");
    }

    #[test]
    fn test_unit_struct_is_rejected() {
        let err = expand_error(parse_quote! {
            struct Config;
        });
        assert_eq!(err, "Override only supports structs with named fields");
    }

    #[test]
    fn test_invalid_field_attribute_is_reported() {
        let err = expand_error(parse_quote! {
            struct Config {
                #[env(name = "PORT", skip)]
                pub port: u16,
            }
        });
        assert!(err.contains("`skip` cannot be combined"));
    }
}
