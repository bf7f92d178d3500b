//! 组件作用域与生命周期回调接口

use crate::component::Bean;
use crate::errors::BoxError;
use std::fmt;

/// 组件作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// 单例模式 - 容器生命周期内只创建一个实例
    #[default]
    Singleton,
    /// 原型模式 - 每次请求都创建新实例
    Prototype,
}

impl Scope {
    /// 作用域标签默认值
    pub const DEFAULT_TAG: &'static str = "singleton";

    /// 解析作用域标签值，忽略大小写和首尾空白
    pub fn from_tag(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("singleton") {
            Some(Self::Singleton)
        } else if value.eq_ignore_ascii_case("prototype") {
            Some(Self::Prototype)
        } else {
            None
        }
    }

    /// 标签形式
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Prototype => "prototype",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bean 名称感知
///
/// 依赖注入完成后、任何后处理器运行前，容器会传入注册名称
pub trait BeanNameAware {
    /// 设置 Bean 名称
    fn set_bean_name(&mut self, name: &str);
}

/// 初始化回调
///
/// 在所有 `post_process_before_initialization` 之后调用。
/// 调用对象可能已被后处理器替换，因此只能拿到共享引用
pub trait InitializingBean {
    /// 属性设置完成后调用
    fn after_properties_set(&self) -> Result<(), BoxError>;
}

/// Bean 后处理器
///
/// 在 Bean 初始化前后提供钩子，返回值将替换当前的 Bean，
/// 可用于创建包装 Bean 或代理
pub trait BeanPostProcessor: Send + Sync + fmt::Debug {
    /// 在初始化回调之前调用
    fn post_process_before_initialization(
        &self,
        bean: Bean,
        _bean_name: &str,
    ) -> Result<Bean, BoxError> {
        Ok(bean)
    }

    /// 在初始化回调之后调用
    fn post_process_after_initialization(
        &self,
        bean: Bean,
        _bean_name: &str,
    ) -> Result<Bean, BoxError> {
        Ok(bean)
    }

    /// 处理器名称（用于日志和错误信息）
    fn name(&self) -> &str {
        "BeanPostProcessor"
    }
}
