#![warn(missing_docs)]
#![crate_name = "jd_union_rs_derive"]
//! # jd-union-rs-derive
//!
//! This is a set of macros to derive the traits from jd-union-rs.

extern crate proc_macro;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

#[derive(FromDeriveInput)]
#[darling(attributes(jd), supports(struct_named))]
struct UnionRequestAttributes {
    ident: syn::Ident,
    generics: syn::Generics,
    method: String,
    #[darling(default)]
    wrap: Option<String>,
}

/// Implements `UnionRequest` for a serializable struct, binding it to a vendor method and,
/// optionally, to the request object key it is nested under in `360buy_param_json`.
///
/// ## Example
/// ```ignore
/// use jd_union_rs::UnionRequest;
///
/// #[derive(UnionRequest, serde::Serialize)]
/// #[jd(method = "jd.union.open.coupon.gift.stop", wrap = "couponReq")]
/// #[serde(rename_all = "camelCase")]
/// pub struct StopGiftCoupon {
///     pub gift_coupon_key: String,
/// }
/// ```
#[proc_macro_derive(UnionRequest, attributes(jd))]
pub fn union_request_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let UnionRequestAttributes {
        ident,
        generics,
        method,
        wrap,
    } = match UnionRequestAttributes::from_derive_input(&ast) {
        Ok(attributes) => attributes,
        Err(err) => return err.write_errors().into(),
    };

    if method.is_empty() || method.starts_with('.') || method.ends_with('.') {
        return syn::Error::new_spanned(
            &ident,
            "UnionRequest requires a dot-separated method, e.g. `jd.union.open.goods.query`",
        )
        .to_compile_error()
        .into();
    }

    let wrap = match wrap {
        Some(key) if !key.is_empty() => quote! { ::core::option::Option::Some(#key) },
        _ => quote! { ::core::option::Option::None },
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let gen = quote! {
        #[jd_union_rs::async_trait]
        impl #impl_generics jd_union_rs::traits::UnionRequest for #ident #ty_generics #where_clause {
            const METHOD: &'static str = #method;
            const WRAP: ::core::option::Option<&'static str> = #wrap;
        }
    };

    gen.into()
}
