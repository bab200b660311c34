extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Expr, ItemStruct, Lit, Meta, parse_macro_input};

/// Implements `doc_cookies::cookies::CookieName` for a marker struct.
///
/// ```ignore
/// #[cookie(name = "theme")]
/// pub struct Theme;
/// ```
#[proc_macro_attribute]
pub fn cookie(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    let parsed_attr = parse_macro_input!(attr as Meta);

    if !parsed_attr.path().is_ident("name") {
        return syn::Error::new_spanned(
            parsed_attr.path(),
            "Expected `name` parameter: #[cookie(name = \"...\")]",
        )
        .into_compile_error()
        .into();
    }

    let cookie_name = match &parsed_attr {
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(expr) => match &expr.lit {
                Lit::Str(lit_str) => lit_str.value(),
                other => {
                    return syn::Error::new_spanned(other, "Cookie name must be a string literal")
                        .into_compile_error()
                        .into();
                }
            },
            other => {
                return syn::Error::new_spanned(other, "Cookie name must be a string literal")
                    .into_compile_error()
                    .into();
            }
        },
        other => {
            return syn::Error::new_spanned(
                other,
                "Expected `name = \"...\"`, found a bare or list attribute",
            )
            .into_compile_error()
            .into();
        }
    };

    if cookie_name.is_empty() {
        return syn::Error::new_spanned(&parsed_attr, "Cookie name cannot be empty")
            .into_compile_error()
            .into();
    }

    let cookie_struct = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        #input

        impl #impl_generics ::doc_cookies::cookies::CookieName for #cookie_struct #ty_generics #where_clause {
            const COOKIE_NAME: &'static str = #cookie_name;
        }
    };

    expanded.into()
}
