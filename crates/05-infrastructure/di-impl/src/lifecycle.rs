//! 生命周期回调执行

use di_abstractions::PostProcessorChain;
use infrastructure_common::{Bean, Component, DependencyError};
use tracing::trace;

/// 生命周期执行器
///
/// 顺序固定：名称感知、初始化前处理、初始化回调、初始化后处理。
/// 返回后处理器链最后给出的 Bean
pub struct LifecycleRunner<'a> {
    post_processors: &'a PostProcessorChain,
}

impl<'a> LifecycleRunner<'a> {
    /// 基于后处理器链创建执行器
    pub fn new(post_processors: &'a PostProcessorChain) -> Self {
        Self { post_processors }
    }

    /// 对已完成注入的实例执行全部回调
    pub fn run(&self, bean_name: &str, mut instance: Box<dyn Component>) -> Result<Bean, DependencyError> {
        if let Some(aware) = instance.as_bean_name_aware() {
            trace!("设置 Bean 名称: {}", bean_name);
            aware.set_bean_name(bean_name);
        }

        let bean = Bean::from(instance);
        let bean = self.post_processors.apply_before_initialization(bean, bean_name)?;

        if let Some(initializing) = bean.as_component().as_initializing_bean() {
            trace!("执行初始化回调: {}", bean_name);
            initializing
                .after_properties_set()
                .map_err(|source| DependencyError::InitializationFailed {
                    bean_name: bean_name.to_string(),
                    source,
                })?;
        }

        self.post_processors.apply_after_initialization(bean, bean_name)
    }
}
