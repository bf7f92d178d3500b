//! 依赖注入容器抽象接口
//!
//! 提供 Bean 工厂的核心抽象和容器配置

use infrastructure_common::{Bean, ComponentScan, ConfigError, DependencyError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Bean 工厂 trait
///
/// 按名称获取容器管理的 Bean
pub trait BeanFactory: Send + Sync {
    /// 获取 Bean，单例返回缓存实例，原型每次新建
    fn get_bean(&self, name: &str) -> Result<Bean, DependencyError>;

    /// 是否包含指定名称的 Bean 定义
    fn contains_bean(&self, name: &str) -> bool;

    /// 指定 Bean 是否为单例
    fn is_singleton(&self, name: &str) -> Result<bool, DependencyError>;

    /// 指定 Bean 是否为原型
    fn is_prototype(&self, name: &str) -> Result<bool, DependencyError> {
        self.is_singleton(name).map(|singleton| !singleton)
    }

    /// 所有 Bean 定义名称
    fn bean_definition_names(&self) -> Vec<String>;

    /// 获取 Bean 并以 `T` 类型查看，`T` 可以是 `dyn Trait`
    fn get_bean_as<T: ?Sized + 'static>(&self, name: &str) -> Result<Arc<T>, DependencyError>
    where
        Self: Sized,
    {
        let bean = self.get_bean(name)?;
        bean.downcast_arc::<T>()
            .ok_or_else(|| DependencyError::BeanNotOfRequiredType {
                name: name.to_string(),
                required: std::any::type_name::<T>(),
                actual: bean.type_info().name,
            })
    }
}

/// 容器配置
///
/// ```toml
/// [component_scan]
/// path = "example_app.service"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// 组件扫描配置
    #[serde(default)]
    pub component_scan: ComponentScan,
}

impl ContainerConfig {
    /// 使用扫描路径创建配置
    pub fn new(scan_path: impl Into<String>) -> Self {
        Self {
            component_scan: ComponentScan::new(scan_path),
        }
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 从 TOML 文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 已注册 Bean 定义数量
    pub registered_definitions: usize,
    /// 单例定义数量
    pub singleton_definitions: usize,
    /// 原型定义数量
    pub prototype_definitions: usize,
    /// 活跃单例数量
    pub active_singletons: usize,
    /// 后处理器数量
    pub post_processors: usize,
    /// 累计构建的实例数量
    pub created_instances: usize,
}
