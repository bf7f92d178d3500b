//! 基于组件目录的扫描器

use di_abstractions::{BeanDefinition, ComponentScanner, DefinitionRegistry, PostProcessorChain, ScanResult};
use infrastructure_common::{
    CatalogEntry, CatalogEntryKind, ComponentCatalog, ComponentScan, ResolutionError, Scope,
};
use tracing::{debug, info};

/// 目录扫描器
///
/// 只扫描根路径所在的一层模块，不进入子模块。
/// 同一模块内按完整类型名称顺序发现
#[derive(Debug, Clone, Default)]
pub struct CatalogScanner {
    catalog: ComponentCatalog,
}

impl CatalogScanner {
    /// 扫描指定目录
    pub fn new(catalog: ComponentCatalog) -> Self {
        Self { catalog }
    }

    /// 扫描全局目录
    pub fn global() -> Self {
        Self::new(ComponentCatalog::global())
    }

    /// 被扫描的目录
    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    fn register_entry(
        entry: &CatalogEntry,
        registry: &mut DefinitionRegistry,
        post_processors: &mut PostProcessorChain,
    ) -> Result<(), ResolutionError> {
        match &entry.kind {
            CatalogEntryKind::PostProcessor(factory) => {
                post_processors.push(factory());
                info!("注册后处理器: {}", entry.type_info);
            }
            CatalogEntryKind::Component(descriptor) => {
                let name = if descriptor.name.is_empty() {
                    entry.type_info.default_bean_name()
                } else {
                    descriptor.name.to_string()
                };
                let scope = Scope::from_tag(descriptor.scope).ok_or_else(|| {
                    ResolutionError::InvalidScope {
                        type_name: entry.type_info.name,
                        value: descriptor.scope.to_string(),
                    }
                })?;
                debug!("注册 Bean 定义: {} ({}, {})", name, entry.type_info, scope);
                registry.register(name, BeanDefinition::from_descriptor(descriptor, scope))?;
            }
        }
        Ok(())
    }
}

impl ComponentScanner for CatalogScanner {
    fn scan(&self, root: &ComponentScan) -> Result<ScanResult, ResolutionError> {
        let path = root.normalized_path();
        if path.is_empty() {
            return Err(ResolutionError::EmptyScanPath);
        }
        if !self.catalog.resolves(&path) {
            return Err(ResolutionError::PathNotFound { path });
        }

        let mut entries: Vec<&CatalogEntry> = self.catalog.entries_in(&path).collect();
        entries.sort_by_key(|entry| entry.type_info.name);

        let mut registry = DefinitionRegistry::new();
        let mut post_processors = PostProcessorChain::new();
        for entry in entries {
            Self::register_entry(entry, &mut registry, &mut post_processors)?;
        }

        info!(
            "扫描 {} 完成，发现 {} 个 Bean 定义, {} 个后处理器",
            path,
            registry.len(),
            post_processors.len()
        );
        Ok(ScanResult::new(registry, post_processors))
    }

    fn name(&self) -> &str {
        "CatalogScanner"
    }
}
