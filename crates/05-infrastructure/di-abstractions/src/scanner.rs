//! 组件扫描器抽象接口

use crate::post_processor::PostProcessorChain;
use crate::registry::DefinitionRegistry;
use infrastructure_common::{ComponentScan, ResolutionError};

/// 组件扫描器 trait
///
/// 根据扫描根描述生成 Bean 定义注册表和后处理器链
pub trait ComponentScanner: Send + Sync {
    /// 扫描指定根路径
    fn scan(&self, root: &ComponentScan) -> Result<ScanResult, ResolutionError>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}

/// 扫描结果
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Bean 定义注册表
    pub registry: DefinitionRegistry,
    /// 后处理器链
    pub post_processors: PostProcessorChain,
}

impl ScanResult {
    /// 创建扫描结果
    pub fn new(registry: DefinitionRegistry, post_processors: PostProcessorChain) -> Self {
        Self {
            registry,
            post_processors,
        }
    }
}
