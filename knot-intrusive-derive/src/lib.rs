//  Copyright 2024 knot Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Macros for deriving essential components to build intrusive data structures.

use std::collections::HashSet;

use darling::{ast, FromDeriveInput, FromField, FromMeta};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Attribute, DeriveInput, Generics, Ident, Meta, Path};

#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct LinkedInput {
    ident: Ident,
    generics: Generics,
    data: ast::Data<(), LinkedField>,
}

#[derive(FromField)]
#[darling(forward_attrs(linker))]
struct LinkedField {
    ident: Option<Ident>,
    attrs: Vec<Attribute>,
}

#[derive(Default, FromMeta)]
struct LinkerArgs {
    tag: Option<Path>,
}

/// Derive `knot_intrusive::Linked` for the fields marked with `#[linker]`.
///
/// `#[linker]` implements the capability for `knot_intrusive::DefaultTag`, `#[linker(tag = Tag)]` for `Tag`. Each tag
/// may be used once per struct, and marked fields must be of type `knot_intrusive::Link`.
#[proc_macro_derive(Linked, attributes(linker))]
pub fn derive_linked(input: TokenStream) -> TokenStream {
    let input: DeriveInput = parse_macro_input!(input);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.write_errors().into(),
    }
}

fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let input = LinkedInput::from_derive_input(input)?;
    let fields = match input.data {
        ast::Data::Struct(fields) => fields,
        ast::Data::Enum(_) => unreachable!("rejected by darling"),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut errors = darling::Error::accumulator();
    let mut seen = HashSet::new();
    let mut impls = vec![];

    for field in fields.fields {
        let mut attrs = field.attrs.iter();
        let Some(attr) = attrs.next() else { continue };
        if let Some(dup) = attrs.next() {
            errors.push(darling::Error::custom("a field can only carry one `#[linker]`").with_span(dup));
            continue;
        }
        // Named structs only, guaranteed by darling.
        let Some(name) = field.ident.as_ref() else { continue };

        let Some(args) = errors.handle(linker_args(&attr.meta)) else {
            continue;
        };
        let tag: Path = args.tag.unwrap_or_else(|| parse_quote!(::knot_intrusive::DefaultTag));

        if !seen.insert(quote!(#tag).to_string()) {
            errors.push(darling::Error::custom("the tag is already used by another `#[linker]` field").with_span(&tag));
            continue;
        }

        impls.push(quote! {
            impl #impl_generics ::knot_intrusive::Linked<#tag> for #ident #ty_generics #where_clause {
                fn link(&self) -> &::knot_intrusive::Link {
                    &self.#name
                }

                fn link_mut(&mut self) -> &mut ::knot_intrusive::Link {
                    &mut self.#name
                }
            }
        });
    }

    if seen.is_empty() {
        errors.push(darling::Error::custom("`#[derive(Linked)]` needs at least one `#[linker]` field").with_span(ident));
    }

    errors.finish()?;

    Ok(quote! { #(#impls)* })
}

fn linker_args(meta: &Meta) -> darling::Result<LinkerArgs> {
    match meta {
        Meta::Path(_) => Ok(LinkerArgs::default()),
        meta => LinkerArgs::from_meta(meta),
    }
}
