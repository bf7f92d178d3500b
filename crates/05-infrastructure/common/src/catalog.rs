//! 组件目录
//!
//! 组件目录是可扫描的类型描述符注册表，每个条目记录声明它的模块路径。
//! `#[derive(Component)]` 和 `#[derive(BeanPostProcessor)]` 在程序加载时
//! 向全局目录注册，也可以手工构建目录

use crate::component::Component;
use crate::lifecycle::{BeanPostProcessor, Scope};
use crate::metadata::{InjectionPoint, TypeInfo};
use std::sync::Arc;

/// 组件默认构造函数
pub type ComponentFactoryFn = fn() -> Box<dyn Component>;

/// 后处理器默认构造函数
pub type PostProcessorFactoryFn = fn() -> Arc<dyn BeanPostProcessor>;

fn default_component<T: Component + Default>() -> Box<dyn Component> {
    Box::new(T::default())
}

fn default_post_processor<P: BeanPostProcessor + Default + 'static>() -> Arc<dyn BeanPostProcessor> {
    Arc::new(P::default())
}

/// 组件描述符
///
/// 对应组件标签、作用域标签和注入标签携带的全部信息
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// 组件类型
    pub type_info: TypeInfo,
    /// 显式 Bean 名称，空字符串表示使用默认名称
    pub name: &'static str,
    /// 作用域标签值
    pub scope: &'static str,
    /// 组件可赋值到的类型（自身类型和声明的能力接口）
    pub provides: Vec<TypeInfo>,
    /// 注入点
    pub injection_points: Vec<InjectionPoint>,
    /// 默认构造函数
    pub factory: ComponentFactoryFn,
}

impl ComponentDescriptor {
    /// 使用默认构造函数创建描述符
    pub fn new<T: Component + Default>() -> Self {
        Self::with_factory::<T>(default_component::<T>)
    }

    /// 使用自定义构造函数创建描述符
    pub fn with_factory<T: Component>(factory: ComponentFactoryFn) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            name: "",
            scope: Scope::DEFAULT_TAG,
            provides: vec![TypeInfo::of::<T>()],
            injection_points: Vec::new(),
            factory,
        }
    }

    /// 设置显式名称
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// 设置作用域标签
    pub fn with_scope(mut self, scope: &'static str) -> Self {
        self.scope = scope;
        self
    }

    /// 声明组件可以作为 `T` 注入
    pub fn provides<T: ?Sized + 'static>(mut self) -> Self {
        self.provides.push(TypeInfo::of::<T>());
        self
    }

    /// 添加注入点
    pub fn with_injection_point(mut self, point: InjectionPoint) -> Self {
        self.injection_points.push(point);
        self
    }

    /// 添加必需的注入字段
    pub fn autowired<T: ?Sized + 'static>(self, field: &'static str) -> Self {
        self.with_injection_point(InjectionPoint::new::<T>(field))
    }
}

/// 目录条目类型
#[derive(Debug, Clone)]
pub enum CatalogEntryKind {
    /// 组件
    Component(ComponentDescriptor),
    /// 后处理器
    PostProcessor(PostProcessorFactoryFn),
}

/// 目录条目
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// 声明类型的模块路径
    pub module_path: &'static str,
    /// 类型信息
    pub type_info: TypeInfo,
    /// 条目类型
    pub kind: CatalogEntryKind,
}

impl CatalogEntry {
    /// 创建组件条目
    pub fn component(module_path: &'static str, descriptor: ComponentDescriptor) -> Self {
        Self {
            module_path,
            type_info: descriptor.type_info,
            kind: CatalogEntryKind::Component(descriptor),
        }
    }

    /// 创建后处理器条目
    pub fn post_processor<P: BeanPostProcessor + Default + 'static>(module_path: &'static str) -> Self {
        Self {
            module_path,
            type_info: TypeInfo::of::<P>(),
            kind: CatalogEntryKind::PostProcessor(default_post_processor::<P>),
        }
    }

    /// 是否声明在指定模块或其子模块中
    pub fn is_within(&self, path: &str) -> bool {
        self.module_path == path
            || self
                .module_path
                .strip_prefix(path)
                .is_some_and(|rest| rest.starts_with("::"))
    }
}

/// 组件目录
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    entries: Vec<CatalogEntry>,
}

impl ComponentCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 全局目录的快照
    pub fn global() -> Self {
        Self {
            entries: GLOBAL_COMPONENT_CATALOG.read().clone(),
        }
    }

    /// 添加条目
    pub fn with(mut self, entry: CatalogEntry) -> Self {
        self.register(entry);
        self
    }

    /// 注册条目
    pub fn register(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    /// 所有条目
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// 直接声明在指定模块中的条目（不含子模块）
    pub fn entries_in<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.module_path == path)
    }

    /// 模块路径能否解析到目录中的命名空间
    pub fn resolves(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry.is_within(path))
    }

    /// 条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 全局组件目录
static GLOBAL_COMPONENT_CATALOG: once_cell::sync::Lazy<parking_lot::RwLock<Vec<CatalogEntry>>> =
    once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(Vec::new()));

/// 向全局目录注册条目
///
/// 由派生宏生成的加载期注册函数调用
pub fn register_catalog_entry(entry: CatalogEntry) {
    GLOBAL_COMPONENT_CATALOG.write().push(entry);
}
