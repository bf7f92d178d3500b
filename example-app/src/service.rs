//! 示例服务组件
//!
//! `userService` 依赖订单服务，实现名称感知和初始化回调，
//! 并在初始化后被 [`CustomBeanPostProcessor`] 替换为带切面逻辑的代理

use component_macros::{BeanPostProcessor, Component, Configuration};
use di_abstractions::{MethodInterceptor, Proxied};
use infrastructure_common::{Autowired, Bean, BeanNameAware, BoxError, InitializingBean, TypeInfo};
use std::any::{Any, TypeId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// 扫描根配置
#[derive(Configuration)]
#[component_scan("example_app.service")]
pub struct AppConfig;

/// 用户服务
pub trait UserService: Send + Sync {
    /// 描述当前服务及其依赖
    fn describe(&self) -> String;

    /// 为用户下单
    fn place_order(&self, user: &str, item: &str) -> String;
}

/// 订单服务
pub trait OrderService: Send + Sync {
    /// 创建订单并返回描述
    fn create_order(&self, user: &str, item: &str) -> String;
}

/// 订单服务实现
#[derive(Debug, Default, Component)]
#[component(provides(dyn OrderService))]
pub struct OrderServiceImpl;

impl OrderService for OrderServiceImpl {
    fn create_order(&self, user: &str, item: &str) -> String {
        format!("{user} 订购了 {item}")
    }
}

/// 用户服务实现
#[derive(Debug, Default, Component)]
#[component(name = "userService", provides(dyn UserService), aware, initializing)]
pub struct UserServiceImpl {
    bean_name: String,
    #[autowired]
    order_service: Autowired<dyn OrderService>,
}

impl UserServiceImpl {
    fn order_service(&self) -> Option<&Arc<dyn OrderService>> {
        self.order_service.get()
    }
}

impl UserService for UserServiceImpl {
    fn describe(&self) -> String {
        match self.order_service() {
            Some(order_service) => format!("{} -> {:p}", self.bean_name, Arc::as_ptr(order_service)),
            None => format!("{} -> <未注入>", self.bean_name),
        }
    }

    fn place_order(&self, user: &str, item: &str) -> String {
        self.order_service()
            .map(|order_service| order_service.create_order(user, item))
            .unwrap_or_default()
    }
}

impl BeanNameAware for UserServiceImpl {
    fn set_bean_name(&mut self, name: &str) {
        self.bean_name = name.to_string();
    }
}

impl InitializingBean for UserServiceImpl {
    fn after_properties_set(&self) -> Result<(), BoxError> {
        info!("初始化...after_properties_set: {}", self.bean_name);
        Ok(())
    }
}

/// 记录切面日志的拦截器
#[derive(Debug, Default)]
pub struct LoggingInterceptor {
    invocations: AtomicUsize,
}

impl LoggingInterceptor {
    /// 已拦截的调用次数
    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::Relaxed)
    }
}

impl MethodInterceptor for LoggingInterceptor {
    fn before_invocation(&self, bean_name: &str, method: &str) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
        info!("切面逻辑: {}.{}", bean_name, method);
    }
}

/// `userService` 的代理，每个方法都经过拦截器转发给原始对象
#[derive(Debug)]
pub struct UserServiceProxy {
    inner: Proxied<dyn UserService>,
    interceptor: Arc<LoggingInterceptor>,
}

impl UserServiceProxy {
    /// 包装原始对象，每个代理实例持有独立的拦截器
    pub fn new(target: Arc<dyn UserService>, bean_name: &str) -> Self {
        let interceptor = Arc::new(LoggingInterceptor::default());
        Self {
            inner: Proxied::new(target, bean_name, interceptor.clone()),
            interceptor,
        }
    }

    /// 被代理的原始对象
    pub fn target(&self) -> &Arc<dyn UserService> {
        self.inner.target()
    }

    /// 代理使用的拦截器
    pub fn interceptor(&self) -> &LoggingInterceptor {
        &self.interceptor
    }
}

impl UserService for UserServiceProxy {
    fn describe(&self) -> String {
        self.inner.invoke("describe", |target| target.describe())
    }

    fn place_order(&self, user: &str, item: &str) -> String {
        self.inner.invoke("place_order", |target| target.place_order(user, item))
    }
}

impl infrastructure_common::Component for UserServiceProxy {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn query(self: Arc<Self>, target: TypeId) -> Option<Box<dyn Any + Send + Sync>> {
        if target == TypeId::of::<Self>() {
            return Some(Box::new(self));
        }
        if target == TypeId::of::<dyn UserService>() {
            return Some(Box::new(self as Arc<dyn UserService>));
        }
        None
    }
}

/// 自定义后处理器
#[derive(Debug, Default, BeanPostProcessor)]
pub struct CustomBeanPostProcessor;

impl infrastructure_common::BeanPostProcessor for CustomBeanPostProcessor {
    fn post_process_before_initialization(&self, bean: Bean, bean_name: &str) -> Result<Bean, BoxError> {
        debug!("{}...初始化前执行了", bean_name);
        Ok(bean)
    }

    fn post_process_after_initialization(&self, bean: Bean, bean_name: &str) -> Result<Bean, BoxError> {
        if bean_name != "userService" {
            return Ok(bean);
        }
        let target = bean
            .downcast_arc::<dyn UserService>()
            .ok_or_else(|| format!("{bean_name} 没有实现 UserService"))?;
        info!("为 {} 创建代理", bean_name);
        Ok(Bean::new(UserServiceProxy::new(target, bean_name)))
    }

    fn name(&self) -> &str {
        "CustomBeanPostProcessor"
    }
}
