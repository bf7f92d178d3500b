//! 扫描根描述

use serde::{Deserialize, Serialize};

/// 组件扫描配置
///
/// `path` 为模块路径，`.` 与 `::` 两种分隔符等价
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScan {
    /// 扫描路径
    #[serde(default)]
    pub path: String,
}

impl ComponentScan {
    /// 创建扫描配置
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// 规范化后的模块路径
    pub fn normalized_path(&self) -> String {
        self.path.trim().replace('.', "::")
    }
}

/// 配置标记 trait
///
/// 作为容器的扫描根描述，通常由 `#[derive(Configuration)]` 生成
pub trait Configuration {
    /// 组件扫描配置
    fn component_scan() -> ComponentScan;
}
