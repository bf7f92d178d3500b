//! 宏工具函数

use proc_macro2::Span;
use syn::{Attribute, DeriveInput, Error, Ident, Lit, Meta, Result, Type};

/// 生成加载期注册函数名，例如 `__register_component_userserviceimpl`
pub fn registration_ident(prefix: &str, struct_name: &Ident) -> Ident {
    Ident::new(
        &format!("__register_{}_{}", prefix, struct_name.to_string().to_lowercase()),
        Span::call_site(),
    )
}

/// 注册到目录的类型必须可以用默认构造函数实例化，不支持泛型
pub fn reject_generics(input: &DeriveInput, derive_name: &str) -> Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(Error::new_spanned(
            &input.generics,
            format!("#[derive({derive_name})] 不支持泛型类型"),
        ))
    }
}

/// 查找指定名称的属性
pub fn find_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

/// 读取 `#[name("value")]` 形式的字符串参数，`#[name]` 返回空字符串
pub fn parse_string_arg(attr: &Attribute) -> Result<String> {
    match &attr.meta {
        Meta::Path(_) => Ok(String::new()),
        Meta::List(_) => match attr.parse_args::<Lit>()? {
            Lit::Str(lit_str) => Ok(lit_str.value()),
            other => Err(Error::new_spanned(other, "需要字符串字面量")),
        },
        Meta::NameValue(nv) => Err(Error::new_spanned(nv, "需要 #[name(\"value\")] 形式")),
    }
}

/// 从类型中提取第一个泛型参数
pub fn extract_generic_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) => match args.args.first() {
            Some(syn::GenericArgument::Type(inner_type)) => Some(inner_type),
            _ => None,
        },
        _ => None,
    }
}

/// 检查类型的最后一段是否为指定名称
pub fn is_type_named(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name),
        _ => false,
    }
}
