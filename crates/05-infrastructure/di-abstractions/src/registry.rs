//! Bean 定义注册表

use infrastructure_common::{
    ComponentDescriptor, ComponentFactoryFn, InjectionPoint, ResolutionError, Scope, TypeInfo,
};
use std::collections::BTreeMap;

/// Bean 定义
///
/// 扫描时创建，之后不可变
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    type_info: TypeInfo,
    scope: Scope,
    provides: Vec<TypeInfo>,
    injection_points: Vec<InjectionPoint>,
    factory: ComponentFactoryFn,
}

impl BeanDefinition {
    /// 从组件描述符和解析后的作用域创建
    pub fn from_descriptor(descriptor: &ComponentDescriptor, scope: Scope) -> Self {
        Self {
            type_info: descriptor.type_info,
            scope,
            provides: descriptor.provides.clone(),
            injection_points: descriptor.injection_points.clone(),
            factory: descriptor.factory,
        }
    }

    /// 组件类型
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// 作用域
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// 是否单例
    pub fn is_singleton(&self) -> bool {
        self.scope == Scope::Singleton
    }

    /// 注入点
    pub fn injection_points(&self) -> &[InjectionPoint] {
        &self.injection_points
    }

    /// 默认构造函数
    pub fn factory(&self) -> ComponentFactoryFn {
        self.factory
    }

    /// 组件能否赋值给 `target` 类型
    pub fn is_assignable_to(&self, target: &TypeInfo) -> bool {
        self.provides.iter().any(|provided| provided.id == target.id)
    }
}

/// Bean 定义注册表
///
/// 名称到定义的映射，按名称顺序迭代
#[derive(Debug, Clone, Default)]
pub struct DefinitionRegistry {
    definitions: BTreeMap<String, BeanDefinition>,
}

impl DefinitionRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 Bean 定义，名称必须唯一
    pub fn register(
        &mut self,
        name: impl Into<String>,
        definition: BeanDefinition,
    ) -> Result<(), ResolutionError> {
        let name = name.into();
        if let Some(existing) = self.definitions.get(&name) {
            return Err(ResolutionError::DuplicateBeanName {
                name,
                existing: existing.type_info.name,
                duplicate: definition.type_info.name,
            });
        }
        self.definitions.insert(name, definition);
        Ok(())
    }

    /// 获取 Bean 定义
    pub fn get(&self, name: &str) -> Option<&BeanDefinition> {
        self.definitions.get(name)
    }

    /// 是否包含指定名称
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// 所有 Bean 名称
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// 遍历所有定义
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BeanDefinition)> {
        self.definitions
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// 可赋值给 `target` 类型的所有 Bean 名称
    pub fn candidates_for(&self, target: &TypeInfo) -> Vec<&str> {
        self.iter()
            .filter(|(_, definition)| definition.is_assignable_to(target))
            .map(|(name, _)| name)
            .collect()
    }

    /// 定义数量
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
