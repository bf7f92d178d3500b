//! 代理组合子
//!
//! 后处理器可以用显式装饰器替换 Bean：装饰器实现与目标相同的能力接口，
//! 每个方法通过 [`Proxied::invoke`] 转发给目标

use std::fmt;
use std::sync::Arc;

/// 方法拦截器
pub trait MethodInterceptor: Send + Sync + fmt::Debug {
    /// 调用目标方法之前执行
    fn before_invocation(&self, bean_name: &str, method: &str);

    /// 调用目标方法之后执行
    fn after_invocation(&self, _bean_name: &str, _method: &str) {}
}

/// 被代理的目标
pub struct Proxied<T: ?Sized> {
    target: Arc<T>,
    bean_name: String,
    interceptor: Arc<dyn MethodInterceptor>,
}

impl<T: ?Sized> Proxied<T> {
    /// 创建代理
    pub fn new(
        target: Arc<T>,
        bean_name: impl Into<String>,
        interceptor: Arc<dyn MethodInterceptor>,
    ) -> Self {
        Self {
            target,
            bean_name: bean_name.into(),
            interceptor,
        }
    }

    /// 被代理的原始对象
    pub fn target(&self) -> &Arc<T> {
        &self.target
    }

    /// 被代理的 Bean 名称
    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }

    /// 拦截器
    pub fn interceptor(&self) -> &Arc<dyn MethodInterceptor> {
        &self.interceptor
    }

    /// 执行拦截逻辑并转发调用，返回目标的结果
    pub fn invoke<R>(&self, method: &str, call: impl FnOnce(&T) -> R) -> R {
        self.interceptor.before_invocation(&self.bean_name, method);
        let result = call(&self.target);
        self.interceptor.after_invocation(&self.bean_name, method);
        result
    }
}

impl<T: ?Sized> Clone for Proxied<T> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            bean_name: self.bean_name.clone(),
            interceptor: Arc::clone(&self.interceptor),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Proxied<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxied")
            .field("target", &std::any::type_name::<T>())
            .field("bean_name", &self.bean_name)
            .field("interceptor", &self.interceptor)
            .finish()
    }
}
