//! # 依赖注入具体实现
//!
//! 提供应用上下文、目录扫描器、单例池、字段注入器和生命周期执行器

pub mod injector;
pub mod lifecycle;
pub mod scanner;
pub mod singleton_pool;

pub use injector::Injector;
pub use lifecycle::LifecycleRunner;
pub use scanner::CatalogScanner;
pub use singleton_pool::SingletonPool;

use di_abstractions::{
    BeanDefinition, BeanFactory, BeanResolver, ComponentScanner, ContainerConfig, ContainerStats,
    DefinitionRegistry, PostProcessorChain, ResolveContext, ScanResult,
};
use infrastructure_common::{Bean, ComponentScan, Configuration, ContainerError, DependencyError};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// 应用上下文
///
/// 构建时完成组件扫描并按名称顺序创建全部单例，之后注册表只读，
/// 单例池是唯一的可变共享状态
#[derive(Debug)]
pub struct ApplicationContext {
    registry: DefinitionRegistry,
    post_processors: PostProcessorChain,
    singletons: SingletonPool,
    created_instances: AtomicUsize,
}

impl ApplicationContext {
    /// 按配置类型声明的扫描路径创建容器
    pub fn new<C: Configuration>() -> Result<Self, ContainerError> {
        Self::from_component_scan(&C::component_scan())
    }

    /// 扫描全局组件目录创建容器
    pub fn from_component_scan(root: &ComponentScan) -> Result<Self, ContainerError> {
        Self::with_scanner(&CatalogScanner::global(), root)
    }

    /// 按容器配置创建容器
    pub fn from_config(config: &ContainerConfig) -> Result<Self, ContainerError> {
        Self::from_component_scan(&config.component_scan)
    }

    /// 使用指定扫描器创建容器
    pub fn with_scanner(scanner: &dyn ComponentScanner, root: &ComponentScan) -> Result<Self, ContainerError> {
        info!("使用 {} 扫描组件: {}", scanner.name(), root.path);
        let ScanResult {
            registry,
            post_processors,
        } = scanner.scan(root)?;

        let context = Self {
            registry,
            post_processors,
            singletons: SingletonPool::new(),
            created_instances: AtomicUsize::new(0),
        };
        context.instantiate_singletons()?;

        info!(
            "容器启动完成: {} 个 Bean 定义, {} 个单例已创建",
            context.registry.len(),
            context.singletons.len()
        );
        Ok(context)
    }

    /// Bean 定义注册表
    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    /// 容器统计信息
    pub fn stats(&self) -> ContainerStats {
        let singleton_definitions = self
            .registry
            .iter()
            .filter(|(_, definition)| definition.is_singleton())
            .count();

        ContainerStats {
            registered_definitions: self.registry.len(),
            singleton_definitions,
            prototype_definitions: self.registry.len() - singleton_definitions,
            active_singletons: self.singletons.len(),
            post_processors: self.post_processors.len(),
            created_instances: self.created_instances.load(Ordering::Relaxed),
        }
    }

    fn instantiate_singletons(&self) -> Result<(), DependencyError> {
        for (name, definition) in self.registry.iter() {
            if definition.is_singleton() {
                self.get_bean(name)?;
            }
        }
        Ok(())
    }

    fn get_bean_in(&self, name: &str, context: &mut ResolveContext) -> Result<Bean, DependencyError> {
        let definition = self
            .registry
            .get(name)
            .ok_or_else(|| DependencyError::BeanNotFound {
                name: name.to_string(),
            })?;

        if !definition.is_singleton() {
            return self.create_bean(name, definition, context);
        }

        if let Some(bean) = self.singletons.get(name) {
            return Ok(bean);
        }
        // 同一请求内重入必须在进入单例槽位之前发现，否则会等待自己
        if context.is_constructing(name) {
            return Err(context.circular_dependency(name));
        }
        self.singletons
            .get_or_try_create(name, || self.create_bean(name, definition, context))
    }

    fn create_bean(
        &self,
        name: &str,
        definition: &BeanDefinition,
        context: &mut ResolveContext,
    ) -> Result<Bean, DependencyError> {
        context.push_bean(name)?;
        let result = self.build_bean(name, definition, context);
        context.pop_bean();
        result.map_err(|err| err.into_creation_failure(name))
    }

    fn build_bean(
        &self,
        name: &str,
        definition: &BeanDefinition,
        context: &mut ResolveContext,
    ) -> Result<Bean, DependencyError> {
        debug!("创建 Bean: {} ({}, {})", name, definition.type_info(), definition.scope());
        let mut instance = (definition.factory())();

        Injector::new(&self.registry).inject(instance.as_mut(), name, definition, self, context)?;
        let bean = LifecycleRunner::new(&self.post_processors).run(name, instance)?;

        self.created_instances.fetch_add(1, Ordering::Relaxed);
        Ok(bean)
    }
}

impl BeanFactory for ApplicationContext {
    fn get_bean(&self, name: &str) -> Result<Bean, DependencyError> {
        self.get_bean_in(name, &mut ResolveContext::new())
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    fn is_singleton(&self, name: &str) -> Result<bool, DependencyError> {
        self.registry
            .get(name)
            .map(BeanDefinition::is_singleton)
            .ok_or_else(|| DependencyError::BeanNotFound {
                name: name.to_string(),
            })
    }

    fn bean_definition_names(&self) -> Vec<String> {
        self.registry.names().map(str::to_string).collect()
    }
}

impl BeanResolver for ApplicationContext {
    fn resolve_in(&self, name: &str, context: &mut ResolveContext) -> Result<Bean, DependencyError> {
        self.get_bean_in(name, context)
    }
}
