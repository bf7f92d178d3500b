//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义 Bean 定义注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`BeanFactory`] - 按名称获取 Bean
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`BeanResolver`] - 依赖解析回调
//! - [`DefinitionRegistry`] - Bean 定义注册表
//! - [`PostProcessorChain`] - 后处理器链
//! - [`Proxied`] - 装饰器代理组合子

pub mod container;
pub mod post_processor;
pub mod proxy;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use container::*;
pub use post_processor::*;
pub use proxy::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;
