//! 元数据定义
//!
//! 提供类型信息和注入点元数据

use std::any::TypeId;
use std::fmt;

/// 类型信息
///
/// 既可以描述具体组件类型，也可以描述 `dyn Trait` 能力接口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称（包含模块路径）
    pub name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径和泛型参数）
    pub fn short_name(&self) -> &'static str {
        let name = self.name.trim_start_matches("dyn ");
        let base = name.split('<').next().unwrap_or(name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// 默认 Bean 名称：简短类型名称首字母小写
    pub fn default_bean_name(&self) -> String {
        decapitalize(self.short_name())
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 首字母小写
///
/// 前两个字符都是大写时保持原样，例如 `URLParser`
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if chars.next().is_some_and(char::is_uppercase) && first.is_uppercase() {
        return name.to_string();
    }
    first
        .to_lowercase()
        .chain(name[first.len_utf8()..].chars())
        .collect()
}

/// 蛇形字段名转为小驼峰，例如 `order_service` 转为 `orderService`
pub fn lower_camel_case(field: &str) -> String {
    let mut segments = field.split('_').filter(|segment| !segment.is_empty());
    let mut result = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// 注入点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectionPoint {
    /// 字段名称，同时作为按名称注入的候选 Bean 名称
    pub field: &'static str,
    /// 字段声明的类型
    pub declared_type: TypeInfo,
    /// 找不到候选 Bean 时是否失败
    pub required: bool,
}

impl InjectionPoint {
    /// 创建必需的注入点
    pub fn new<T: ?Sized + 'static>(field: &'static str) -> Self {
        Self {
            field,
            declared_type: TypeInfo::of::<T>(),
            required: true,
        }
    }

    /// 设置是否必需
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// 按名称注入时依次尝试的 Bean 名称：字段原名，以及不同时的小驼峰形式
    pub fn name_candidates(&self) -> Vec<String> {
        let mut names = vec![self.field.to_string()];
        let camel = lower_camel_case(self.field);
        if !camel.is_empty() && camel != self.field {
            names.push(camel);
        }
        names
    }
}
