//! 后处理器链

use infrastructure_common::{Bean, BeanPostProcessor, DependencyError};
use std::sync::Arc;
use tracing::trace;

/// 后处理器链
///
/// 顺序即扫描发现顺序，对每一次 Bean 构建生效
#[derive(Debug, Clone, Default)]
pub struct PostProcessorChain {
    processors: Vec<Arc<dyn BeanPostProcessor>>,
}

impl PostProcessorChain {
    /// 创建空链
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加后处理器
    pub fn push(&mut self, processor: Arc<dyn BeanPostProcessor>) {
        self.processors.push(processor);
    }

    /// 依次执行初始化前回调，每个处理器接收上一个的返回值
    pub fn apply_before_initialization(&self, bean: Bean, bean_name: &str) -> Result<Bean, DependencyError> {
        self.processors.iter().try_fold(bean, |current, processor| {
            trace!("初始化前处理: {} <- {}", bean_name, processor.name());
            processor
                .post_process_before_initialization(current, bean_name)
                .map_err(|source| DependencyError::PostProcessorFailed {
                    bean_name: bean_name.to_string(),
                    processor: processor.name().to_string(),
                    source,
                })
        })
    }

    /// 依次执行初始化后回调，每个处理器接收上一个的返回值
    pub fn apply_after_initialization(&self, bean: Bean, bean_name: &str) -> Result<Bean, DependencyError> {
        self.processors.iter().try_fold(bean, |current, processor| {
            trace!("初始化后处理: {} <- {}", bean_name, processor.name());
            processor
                .post_process_after_initialization(current, bean_name)
                .map_err(|source| DependencyError::PostProcessorFailed {
                    bean_name: bean_name.to_string(),
                    processor: processor.name().to_string(),
                    source,
                })
        })
    }

    /// 遍历后处理器
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn BeanPostProcessor>> {
        self.processors.iter()
    }

    /// 后处理器数量
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}
