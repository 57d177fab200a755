use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2, TokenTree};
use quote::{ToTokens, format_ident, quote};
use syn::{Data, DataEnum, DeriveInput, Field, Fields, Visibility, parse_macro_input, parse_quote};

use crate::support::{attrs, diag};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let container = attrs::parse_flags(&input.attrs, "walk")?.only(&["validatable"])?;

    // Only parameters reachable through walked fields need `Walkable`.
    let reachable = walked_fields(&input.data)?;
    for param in input.generics.type_params_mut() {
        if reachable.iter().any(|field| mentions(&field.ty, &param.ident)) {
            param
                .bounds
                .push(parse_quote!(::deepcheck::walk::Walkable));
        }
    }

    let node = match &input.data {
        Data::Struct(data) => {
            let members = data
                .fields
                .iter()
                .enumerate()
                .map(|(index, field)| struct_member(index, field))
                .collect::<syn::Result<Vec<_>>>()?;
            quote! { ::deepcheck::walk::Node::Record(::std::vec![#(#members),*]) }
        }
        Data::Enum(data) => enum_node(data)?,
        Data::Union(data) => {
            return Err(diag::error_spanned(
                &data.union_token,
                "Walkable cannot be derived for unions",
            ));
        }
    };

    let capability = container.has("validatable").then(|| {
        quote! {
            fn validatable(&self) -> ::core::option::Option<&dyn ::deepcheck::foundation::Validatable> {
                ::core::option::Option::Some(self)
            }
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::deepcheck::walk::Walkable for #name #ty_generics #where_clause {
            fn node(&self) -> ::deepcheck::walk::Node<'_> {
                #node
            }

            #capability
        }
    })
}

/// `true` unless the field opts out with `#[walk(skip)]`.
fn walked(field: &Field) -> syn::Result<bool> {
    Ok(!attrs::parse_flags(&field.attrs, "walk")?
        .only(&["skip"])?
        .has("skip"))
}

fn is_public(field: &Field) -> bool {
    matches!(field.vis, Visibility::Public(_))
}

/// Fields the generated `node()` hands to the walker.
fn walked_fields(data: &Data) -> syn::Result<Vec<Field>> {
    let fields: Vec<(&Field, bool)> = match data {
        Data::Struct(data) => data.fields.iter().map(|f| (f, is_public(f))).collect(),
        Data::Enum(data) => data
            .variants
            .iter()
            .flat_map(|v| v.fields.iter().map(|f| (f, true)))
            .collect(),
        Data::Union(_) => Vec::new(),
    };

    let mut kept = Vec::new();
    for (field, visible) in fields {
        if visible && walked(field)? {
            kept.push(field.clone());
        }
    }
    Ok(kept)
}

fn mentions(ty: &syn::Type, ident: &Ident) -> bool {
    fn scan(tokens: TokenStream2, ident: &Ident) -> bool {
        tokens.into_iter().any(|token| match token {
            TokenTree::Ident(found) => found == *ident,
            TokenTree::Group(group) => scan(group.stream(), ident),
            TokenTree::Punct(_) | TokenTree::Literal(_) => false,
        })
    }
    scan(ty.to_token_stream(), ident)
}

fn member_name(index: usize, field: &Field) -> String {
    field
        .ident
        .as_ref()
        .map_or_else(|| index.to_string(), ToString::to_string)
}

// Only plain `pub` is observable from everywhere; `pub(crate)` and friends
// are encapsulated.
fn struct_member(index: usize, field: &Field) -> syn::Result<TokenStream2> {
    let name = member_name(index, field);

    if !walked(field)? || !is_public(field) {
        return Ok(quote! { ::deepcheck::walk::Member::encapsulated(#name) });
    }

    let access = match &field.ident {
        Some(ident) => quote! { #ident },
        None => {
            let index = syn::Index::from(index);
            quote! { #index }
        }
    };

    Ok(quote! { ::deepcheck::walk::Member::public(#name, &self.#access) })
}

fn enum_node(data: &DataEnum) -> syn::Result<TokenStream2> {
    if data.variants.is_empty() {
        return Ok(quote! { match *self {} });
    }

    let arms = data
        .variants
        .iter()
        .map(|variant| {
            let variant_ident = &variant.ident;
            let mut bindings = Vec::new();
            let mut members = Vec::new();

            for (index, field) in variant.fields.iter().enumerate() {
                let name = format!("{variant_ident}.{}", member_name(index, field));
                let binding = format_ident!("__field{}", index);

                if walked(field)? {
                    members.push(quote! { ::deepcheck::walk::Member::public(#name, #binding) });
                    bindings.push(Some(binding));
                } else {
                    members.push(quote! { ::deepcheck::walk::Member::encapsulated(#name) });
                    bindings.push(None);
                }
            }

            let pattern = match &variant.fields {
                Fields::Named(named) => {
                    let fields = named.named.iter().zip(&bindings).map(|(field, binding)| {
                        let ident = &field.ident;
                        match binding {
                            Some(binding) => quote! { #ident: #binding },
                            None => quote! { #ident: _ },
                        }
                    });
                    quote! { Self::#variant_ident { #(#fields),* } }
                }
                Fields::Unnamed(_) => {
                    let fields = bindings.iter().map(|binding| match binding {
                        Some(binding) => quote! { #binding },
                        None => quote! { _ },
                    });
                    quote! { Self::#variant_ident(#(#fields),*) }
                }
                Fields::Unit => quote! { Self::#variant_ident },
            };

            Ok(quote! {
                #pattern => ::deepcheck::walk::Node::Record(::std::vec![#(#members),*]),
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}
