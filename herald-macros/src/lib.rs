//! Procedural macros for herald.
//!
//! - `#[derive(Payload)]`: Implements `herald::Payload` for a struct that owns a
//!   `herald::Meta`, preserving generics and bounds.
//!
//! The metadata field is the one named `meta`, or the one marked with
//! `#[payload(meta)]`:
//!
//! ```rust,ignore
//! use herald::{Meta, Payload};
//!
//! #[derive(Clone, Debug, Payload)]
//! struct Moved {
//!     meta: Meta,
//!     x: i32,
//!     y: i32,
//! }
//!
//! #[derive(Clone, Debug, Payload)]
//! struct Renamed(#[payload(meta)] Meta, String);
//! ```
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Field, Fields, Index, Member, parse_macro_input, parse_quote,
    spanned::Spanned,
};

#[proc_macro_derive(Payload, attributes(payload))]
pub fn derive_payload(input: TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_payload(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_payload(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    // Payload is 'static, and so must be every type parameter.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new(
                input.span(),
                "Payload can only be derived for structs",
            ));
        }
    };

    let member = meta_member(fields)?.ok_or_else(|| {
        syn::Error::new(
            input.span(),
            "Payload requires a `meta: herald::Meta` field or a field marked `#[payload(meta)]`",
        )
    })?;

    Ok(quote! {
        impl #impl_generics herald::Payload for #ident #ty_generics #where_clause {
            fn meta(&self) -> &herald::Meta {
                &self.#member
            }

            fn meta_mut(&mut self) -> &mut herald::Meta {
                &mut self.#member
            }
        }
    })
}

/// Finds the metadata field: an explicitly marked one wins over one named `meta`.
fn meta_member(fields: &Fields) -> syn::Result<Option<Member>> {
    let mut marked = None;
    let mut named = None;
    for (idx, field) in fields.iter().enumerate() {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(idx)),
        };
        if is_marked(field)? {
            if marked.is_some() {
                return Err(syn::Error::new(
                    field.span(),
                    "only one field can be marked `#[payload(meta)]`",
                ));
            }
            marked = Some(member);
        } else if field.ident.as_ref().is_some_and(|i| i == "meta") {
            named = Some(member);
        }
    }
    Ok(marked.or(named))
}

fn is_marked(field: &Field) -> syn::Result<bool> {
    let mut marked = false;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("payload")) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("meta") {
                marked = true;
                Ok(())
            } else {
                Err(nested.error("unsupported payload attribute, expected `meta`"))
            }
        })?;
    }
    Ok(marked)
}
