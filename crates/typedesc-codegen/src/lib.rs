// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Parsed `#[reflect(...)]` options on a field.
#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    skip: bool,
}

/// `#[derive(Reflect)]` macro: generates the `typedesc::Reflect` schema
///
/// Supports structs with named fields, tuple structs (members named `0`,
/// `1`, ...) and unit structs. Members are registered in declaration order.
///
/// Example:
/// ```ignore
/// use typedesc::Reflect;
///
/// #[derive(Reflect)]
/// #[reflect(name = "Sensor")]
/// struct SensorReading {
///     id: u32,
///     #[reflect(rename = "celsius")]
///     temperature: f64,
///     #[reflect(skip)]
///     scratch: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect cannot be derived for generic types; implement it by hand",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Only structs are supported",
            ))
        }
    };

    let type_name = parse_type_name(&input.attrs)?.unwrap_or_else(|| name.to_string());

    let mut members = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let field_type = &field.ty;
        let (member_name, access) = match (&field.ident, fields) {
            (Some(ident), Fields::Named(_)) => (ident.to_string(), quote! { #ident }),
            _ => {
                let idx = syn::Index::from(index);
                (index.to_string(), quote! { #idx })
            }
        };
        let member_name = attrs.rename.unwrap_or(member_name);

        members.push(quote! {
            .member::<#field_type>(#member_name, |this| &this.#access)
        });
    }

    Ok(quote! {
        impl ::typedesc::Reflect for #name {
            fn type_descriptor() -> ::typedesc::TypeDescriptor {
                ::typedesc::StructDescriptor::builder::<Self>(#type_name)
                    #(#members)*
                    .build()
            }
        }
    })
}

/// Read `#[reflect(name = "...")]` from the container attributes.
fn parse_type_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut type_name = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                type_name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported reflect attribute on type; expected `name`"))
            }
        })?;
    }
    Ok(type_name)
}

/// Read `#[reflect(rename = "...")]` / `#[reflect(skip)]` from a field.
fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("reflect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported reflect attribute on field; expected `rename` or `skip`",
                ))
            }
        })?;
    }
    Ok(parsed)
}
