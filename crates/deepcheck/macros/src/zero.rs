use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, parse_macro_input, parse_quote};

use crate::support::diag;

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(diag::error_spanned(
                &data.enum_token,
                "Zero can only be derived for structs; implement `deepcheck::Zero` by hand for enums",
            ));
        }
        Data::Union(data) => {
            return Err(diag::error_spanned(
                &data.union_token,
                "Zero can only be derived for structs",
            ));
        }
    };

    let checks = fields.iter().enumerate().map(|(index, field)| {
        let access = match &field.ident {
            Some(ident) => quote! { #ident },
            None => {
                let index = syn::Index::from(index);
                quote! { #index }
            }
        };
        quote! { && ::deepcheck::zero::is_zero(&self.#access) }
    });
    let is_zero = quote! { true #(#checks)* };

    for param in input.generics.type_params_mut() {
        param.bounds.push(parse_quote!(::deepcheck::zero::Zero));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::deepcheck::zero::Zero for #name #ty_generics #where_clause {
            fn kind(&self) -> ::deepcheck::Kind {
                ::deepcheck::Kind::Record
            }

            fn is_zero(&self) -> bool {
                #is_zero
            }
        }
    })
}
