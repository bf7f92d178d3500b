//! 字段注入

use di_abstractions::{BeanDefinition, BeanResolver, DefinitionRegistry, ResolveContext};
use infrastructure_common::{Component, DependencyError, InjectionPoint};
use tracing::{debug, trace};

/// 字段注入器
///
/// 先按字段名称（原名或小驼峰形式）匹配 Bean，再按字段类型查找唯一候选
pub struct Injector<'a> {
    registry: &'a DefinitionRegistry,
}

impl<'a> Injector<'a> {
    /// 基于注册表创建注入器
    pub fn new(registry: &'a DefinitionRegistry) -> Self {
        Self { registry }
    }

    /// 为新建实例注入全部声明的字段
    pub fn inject(
        &self,
        instance: &mut dyn Component,
        bean_name: &str,
        definition: &BeanDefinition,
        resolver: &dyn BeanResolver,
        context: &mut ResolveContext,
    ) -> Result<(), DependencyError> {
        for point in definition.injection_points() {
            let Some(target) = self.resolve_target_name(bean_name, point)? else {
                debug!("可选字段 {}.{} 没有候选 Bean，跳过", bean_name, point.field);
                continue;
            };

            trace!("注入 {}.{} <- {}", bean_name, point.field, target);
            let dependency = resolver.resolve_in(&target, context)?;
            instance
                .inject(point.field, &dependency)
                .map_err(|source| DependencyError::InjectionFailed {
                    bean_name: bean_name.to_string(),
                    field: point.field.to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    /// 确定注入点要解析的 Bean 名称
    ///
    /// 可选字段没有候选时返回 `None`；必需字段没有候选时退回字段名称，
    /// 由解析器报告 Bean 未注册
    pub fn resolve_target_name(
        &self,
        bean_name: &str,
        point: &InjectionPoint,
    ) -> Result<Option<String>, DependencyError> {
        if let Some(name) = point
            .name_candidates()
            .into_iter()
            .find(|name| self.registry.contains(name))
        {
            return Ok(Some(name));
        }

        let candidates = self.registry.candidates_for(&point.declared_type);
        match candidates.as_slice() {
            [single] => Ok(Some(single.to_string())),
            [] if point.required => Ok(Some(point.field.to_string())),
            [] => Ok(None),
            _ => Err(DependencyError::AmbiguousDependency {
                bean_name: bean_name.to_string(),
                field: point.field.to_string(),
                type_name: point.declared_type.name,
                candidates: candidates.iter().map(|name| name.to_string()).collect(),
            }),
        }
    }
}
