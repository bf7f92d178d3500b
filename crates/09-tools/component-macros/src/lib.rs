//! # Component Macros
//!
//! 这个 crate 提供了用于组件声明和自动注册的派生宏。
//! 生成的注册函数通过 `ctor` 在程序加载时写入全局组件目录，
//! 使用这些宏的 crate 需要依赖 `ctor` 和 `infrastructure-common`。
//!
//! ## 核心宏
//!
//! - [`macro@Component`] - 组件声明和注册
//! - [`macro@BeanPostProcessor`] - 后处理器注册
//! - [`macro@Configuration`] - 组件扫描根配置
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::{Component, Configuration};
//! use infrastructure_common::{Autowired, BeanNameAware};
//!
//! #[derive(Configuration)]
//! #[component_scan("my_app.service")]
//! pub struct AppConfig;
//!
//! #[derive(Debug, Default, Component)]
//! #[component(name = "userService", provides(dyn UserService), aware)]
//! pub struct UserServiceImpl {
//!     #[autowired]
//!     order_service: Autowired<dyn OrderService>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod component;
mod configuration;
mod post_processor;
mod utils;

fn into_token_stream(result: syn::Result<proc_macro2::TokenStream>) -> TokenStream {
    result.unwrap_or_else(syn::Error::into_compile_error).into()
}

/// 组件派生宏
///
/// 为结构体实现 `Component` trait，并注册到全局组件目录。
/// 结构体需要实现 `Default`，注入字段以空的 `Autowired<T>` 开始。
///
/// # 属性
///
/// - `#[component(name = "..")]` - 显式 Bean 名称，默认为首字母小写的类型名
/// - `#[component(provides(dyn Trait, ..))]` - 可按类型注入的能力接口
/// - `#[component(aware)]` - 组件实现了 `BeanNameAware`
/// - `#[component(initializing)]` - 组件实现了 `InitializingBean`
/// - `#[scope("prototype")]` - 作用域，默认 `singleton`
/// - `#[autowired]` / `#[autowired(required = false)]` - 注入字段
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Debug, Default, Component)]
/// #[component(provides(dyn OrderService))]
/// #[scope("prototype")]
/// pub struct OrderServiceImpl;
/// ```
#[proc_macro_derive(Component, attributes(component, scope, autowired))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    into_token_stream(component::expand(&input))
}

/// 后处理器派生宏
///
/// 将后处理器注册到全局组件目录，`BeanPostProcessor` trait 需要手工实现。
/// 结构体需要实现 `Default`。
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Debug, Default, BeanPostProcessor)]
/// pub struct CustomBeanPostProcessor;
///
/// impl infrastructure_common::BeanPostProcessor for CustomBeanPostProcessor {}
/// ```
#[proc_macro_derive(BeanPostProcessor)]
pub fn derive_bean_post_processor(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    into_token_stream(post_processor::expand(&input))
}

/// 配置类派生宏
///
/// 实现 `Configuration` trait，`#[component_scan("path")]` 指定扫描根模块，
/// 路径分隔符可以是 `.` 或 `::`。
///
/// # 示例
///
/// ```rust,ignore
/// #[derive(Configuration)]
/// #[component_scan("example_app.service")]
/// pub struct AppConfig;
/// ```
#[proc_macro_derive(Configuration, attributes(component_scan))]
pub fn derive_configuration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    into_token_stream(configuration::expand(&input))
}
