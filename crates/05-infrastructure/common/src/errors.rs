//! 错误类型定义

use thiserror::Error;

/// 装箱的通用错误类型，用于生命周期回调和后处理器
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {source}")]
    ParseError {
        #[from]
        source: toml::de::Error,
    },
}

/// 组件扫描错误类型
///
/// 扫描阶段的任何错误都会中止容器构建
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("未配置组件扫描路径")]
    EmptyScanPath,

    #[error("组件扫描路径无法解析: {path}")]
    PathNotFound { path: String },

    #[error("Bean 名称重复: {name}, 已注册 {existing}, 冲突类型 {duplicate}")]
    DuplicateBeanName {
        name: String,
        existing: &'static str,
        duplicate: &'static str,
    },

    #[error("无效的作用域: {type_name} 声明了 \"{value}\"")]
    InvalidScope {
        type_name: &'static str,
        value: String,
    },
}

/// 字段注入错误类型
#[derive(Error, Debug)]
pub enum InjectionError {
    #[error("组件 {type_name} 没有可注入字段 {field}")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    #[error("字段已注入: {type_name}.{field}")]
    AlreadyInjected {
        type_name: &'static str,
        field: String,
    },

    #[error("字段类型不匹配: {field} 需要 {expected}, 实际为 {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("Bean 未注册: {name}")]
    BeanNotFound { name: String },

    #[error("Bean 创建失败: {bean_name}, 原因: {source}")]
    ComponentCreationFailed { bean_name: String, source: BoxError },

    #[error("循环依赖检测到: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("依赖不唯一: {bean_name}.{field} 需要 {type_name}, 候选: {candidates:?}")]
    AmbiguousDependency {
        bean_name: String,
        field: String,
        type_name: &'static str,
        candidates: Vec<String>,
    },

    #[error("Bean 类型不匹配: {name} 需要 {required}, 实际为 {actual}")]
    BeanNotOfRequiredType {
        name: String,
        required: &'static str,
        actual: &'static str,
    },

    #[error("字段注入失败: {bean_name}.{field}, 原因: {source}")]
    InjectionFailed {
        bean_name: String,
        field: String,
        source: InjectionError,
    },

    #[error("初始化回调失败: {bean_name}, 原因: {source}")]
    InitializationFailed { bean_name: String, source: BoxError },

    #[error("后处理器 {processor} 处理 {bean_name} 失败: {source}")]
    PostProcessorFailed {
        bean_name: String,
        processor: String,
        source: BoxError,
    },
}

impl DependencyError {
    /// 将构建过程中的错误包装为一次 Bean 创建失败
    ///
    /// 已包装的错误、循环依赖和依赖不唯一原样向上传递
    pub fn into_creation_failure(self, bean_name: &str) -> Self {
        match self {
            err @ (Self::ComponentCreationFailed { .. }
            | Self::CircularDependency { .. }
            | Self::AmbiguousDependency { .. }) => err,
            other => Self::ComponentCreationFailed {
                bean_name: bean_name.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// 是否为 Bean 未注册错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BeanNotFound { .. })
    }
}

/// 容器错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("组件扫描失败: {source}")]
    Resolution {
        #[from]
        source: ResolutionError,
    },

    #[error("依赖注入错误: {source}")]
    Dependency {
        #[from]
        source: DependencyError,
    },

    #[error("配置错误: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ResolutionResult<T> = Result<T, ResolutionError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ContainerResult<T> = Result<T, ContainerError>;
