//! 依赖解析抽象接口
//!
//! 提供依赖解析回调和构建中标记

use infrastructure_common::{Bean, DependencyError};

/// Bean 解析器 trait
///
/// 注入器通过它递归获取依赖，并沿用同一个解析上下文
pub trait BeanResolver: Send + Sync {
    /// 在给定上下文中获取 Bean
    fn resolve_in(&self, name: &str, context: &mut ResolveContext) -> Result<Bean, DependencyError>;
}

/// 解析上下文
///
/// 记录当前请求中正在构建的 Bean 名称，用于检测循环依赖
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// 当前解析链
    pub resolution_chain: Vec<String>,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否正在构建指定 Bean
    pub fn is_constructing(&self, name: &str) -> bool {
        self.resolution_chain.iter().any(|entry| entry == name)
    }

    /// 标记 Bean 开始构建，重复进入时返回循环依赖错误
    pub fn push_bean(&mut self, name: &str) -> Result<(), DependencyError> {
        if self.is_constructing(name) {
            return Err(self.circular_dependency(name));
        }
        self.resolution_chain.push(name.to_string());
        Ok(())
    }

    /// 标记最近的 Bean 构建结束
    pub fn pop_bean(&mut self) {
        self.resolution_chain.pop();
    }

    /// 当前解析深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }

    /// 生成以 `name` 结尾的循环依赖错误
    pub fn circular_dependency(&self, name: &str) -> DependencyError {
        let start = self
            .resolution_chain
            .iter()
            .position(|entry| entry == name)
            .unwrap_or(0);
        let mut chain: Vec<&str> = self.resolution_chain[start..]
            .iter()
            .map(String::as_str)
            .collect();
        chain.push(name);
        DependencyError::CircularDependency {
            dependency_chain: chain.join(" -> "),
        }
    }
}
