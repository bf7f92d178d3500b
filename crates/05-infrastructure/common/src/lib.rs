//! # Infrastructure Common
//!
//! 依赖注入容器的公共 traits 和类型。
//!
//! ## 核心组件
//!
//! - [`Component`] - 受容器管理的组件基础 trait
//! - [`Bean`] - 类型擦除后的共享 Bean 句柄
//! - [`Autowired`] - 可注入字段
//! - [`BeanNameAware`] / [`InitializingBean`] / [`BeanPostProcessor`] - 生命周期回调
//! - [`ComponentCatalog`] - 可扫描的组件目录
//!
//! ## 设计原则
//!
//! - 用编译期生成的注册表代替运行时反射
//! - 能力接口显式声明，通过 [`Component::query`] 查看

pub mod catalog;
pub mod component;
pub mod configuration;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use catalog::*;
pub use component::*;
pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
