//! 后处理器派生宏实现

use crate::utils::{registration_ident, reject_generics};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

/// 展开 `#[derive(BeanPostProcessor)]`
///
/// 只生成注册代码，`BeanPostProcessor` trait 由使用者实现
pub fn expand(input: &DeriveInput) -> Result<TokenStream> {
    reject_generics(input, "BeanPostProcessor")?;

    let struct_name = &input.ident;
    let register_fn = registration_ident("post_processor", struct_name);

    Ok(quote! {
        #[::ctor::ctor]
        fn #register_fn() {
            ::infrastructure_common::register_catalog_entry(
                ::infrastructure_common::CatalogEntry::post_processor::<#struct_name>(
                    ::std::module_path!(),
                ),
            );
        }
    })
}
