//! 组件基础接口定义
//!
//! 提供所有受容器管理的组件必须实现的基础 trait，
//! 以及类型擦除后的 Bean 句柄和可注入字段

use crate::errors::InjectionError;
use crate::lifecycle::{BeanNameAware, InitializingBean};
use crate::metadata::TypeInfo;
use once_cell::sync::OnceCell;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 组件基础 trait
///
/// 通常由 `#[derive(Component)]` 生成，也可以手写。
/// 能力接口（`BeanNameAware`、`InitializingBean`）通过 `as_*` 方法暴露
pub trait Component: Any + Send + Sync + fmt::Debug {
    /// 组件的具体类型信息
    fn type_info(&self) -> TypeInfo;

    /// 以 `target` 描述的类型查看组件
    ///
    /// 返回值必须是装箱的 `Arc<T>`，其中 `TypeId::of::<T>() == target`
    fn query(self: Arc<Self>, target: TypeId) -> Option<Box<dyn Any + Send + Sync>>;

    /// 向字段注入依赖
    fn inject(&mut self, field: &str, _dependency: &Bean) -> Result<(), InjectionError> {
        Err(InjectionError::UnknownField {
            type_name: self.type_info().name,
            field: field.to_string(),
        })
    }

    /// 名称感知能力
    fn as_bean_name_aware(&mut self) -> Option<&mut dyn BeanNameAware> {
        None
    }

    /// 初始化回调能力
    fn as_initializing_bean(&self) -> Option<&dyn InitializingBean> {
        None
    }
}

/// 容器管理的 Bean 句柄
///
/// 克隆只增加引用计数，同一实例的句柄满足 [`Bean::ptr_eq`]
#[derive(Clone)]
pub struct Bean(Arc<dyn Component>);

impl Bean {
    /// 包装一个组件实例
    pub fn new<T: Component>(component: T) -> Self {
        Self(Arc::new(component))
    }

    /// 从共享组件创建
    pub fn from_arc(component: Arc<dyn Component>) -> Self {
        Self(component)
    }

    /// 组件的具体类型信息
    pub fn type_info(&self) -> TypeInfo {
        self.0.type_info()
    }

    /// 访问底层组件
    pub fn as_component(&self) -> &dyn Component {
        self.0.as_ref()
    }

    /// 以指定类型查看 Bean，`T` 可以是具体类型或 `dyn Trait`
    pub fn downcast_arc<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        self.0
            .clone()
            .query(TypeId::of::<T>())?
            .downcast::<Arc<T>>()
            .ok()
            .map(|boxed| *boxed)
    }

    /// 是否可以以指定类型查看
    pub fn provides<T: ?Sized + 'static>(&self) -> bool {
        self.downcast_arc::<T>().is_some()
    }

    /// 是否为同一实例
    pub fn ptr_eq(&self, other: &Bean) -> bool {
        Arc::as_ptr(&self.0) as *const () == Arc::as_ptr(&other.0) as *const ()
    }
}

impl From<Box<dyn Component>> for Bean {
    fn from(component: Box<dyn Component>) -> Self {
        Self(Arc::from(component))
    }
}

impl fmt::Debug for Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bean").field(&self.0).finish()
    }
}

/// 可注入字段
///
/// 组件构造时为空，由容器注入且只能注入一次
pub struct Autowired<T: ?Sized> {
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized + 'static> Autowired<T> {
    /// 创建空字段
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// 获取已注入的依赖
    pub fn get(&self) -> Option<&Arc<T>> {
        self.cell.get()
    }

    /// 是否已注入
    pub fn is_injected(&self) -> bool {
        self.cell.get().is_some()
    }

    /// 直接设置依赖
    pub fn set(&self, field: &str, value: Arc<T>) -> Result<(), InjectionError> {
        self.cell
            .set(value)
            .map_err(|_| InjectionError::AlreadyInjected {
                type_name: std::any::type_name::<T>(),
                field: field.to_string(),
            })
    }

    /// 将 Bean 转换为字段类型后注入
    pub fn inject(&self, field: &str, dependency: &Bean) -> Result<(), InjectionError> {
        let value = dependency
            .downcast_arc::<T>()
            .ok_or_else(|| InjectionError::TypeMismatch {
                field: field.to_string(),
                expected: std::any::type_name::<T>(),
                actual: dependency.type_info().name,
            })?;
        self.set(field, value)
    }
}

impl<T: ?Sized + 'static> Default for Autowired<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Autowired<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.cell.get().is_some() {
            "injected"
        } else {
            "pending"
        };
        f.debug_struct("Autowired")
            .field("type", &std::any::type_name::<T>())
            .field("state", &state)
            .finish()
    }
}
