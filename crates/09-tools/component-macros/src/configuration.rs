//! 配置类派生宏实现

use crate::utils::{find_attribute, parse_string_arg};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

/// 展开 `#[derive(Configuration)]`，扫描路径来自 `#[component_scan("path")]`
pub fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let path = match find_attribute(&input.attrs, "component_scan") {
        Some(attr) => parse_string_arg(attr)?,
        None => String::new(),
    };

    Ok(quote! {
        impl #impl_generics ::infrastructure_common::Configuration for #struct_name #ty_generics #where_clause {
            fn component_scan() -> ::infrastructure_common::ComponentScan {
                ::infrastructure_common::ComponentScan::new(#path)
            }
        }
    })
}
