//! 组件派生宏实现

use crate::utils::{
    extract_generic_type, find_attribute, is_type_named, parse_string_arg, reject_generics,
    registration_ident,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    punctuated::Punctuated, Data, DeriveInput, Error, Fields, Ident, LitBool, LitStr, Result,
    Token, Type,
};

/// `#[component(..)]` 属性参数
#[derive(Default)]
pub struct ComponentArgs {
    /// 显式 Bean 名称，空字符串表示使用默认名称
    pub name: String,
    /// 可作为注入类型的能力接口
    pub provides: Vec<Type>,
    /// 是否实现 `BeanNameAware`
    pub aware: bool,
    /// 是否实现 `InitializingBean`
    pub initializing: bool,
}

impl ComponentArgs {
    fn from_input(input: &DeriveInput) -> Result<Self> {
        let mut args = Self::default();
        let Some(attr) = find_attribute(&input.attrs, "component") else {
            return Ok(args);
        };
        if !matches!(attr.meta, syn::Meta::List(_)) {
            return Ok(args);
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                args.name = value.value();
            } else if meta.path.is_ident("provides") {
                let content;
                syn::parenthesized!(content in meta.input);
                let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                args.provides.extend(types);
            } else if meta.path.is_ident("aware") {
                args.aware = true;
            } else if meta.path.is_ident("initializing") {
                args.initializing = true;
            } else {
                return Err(meta.error("未知的 component 参数，可用: name, provides, aware, initializing"));
            }
            Ok(())
        })?;
        Ok(args)
    }
}

/// `#[autowired]` 字段
pub struct AutowiredField {
    /// 字段名
    pub ident: Ident,
    /// `Autowired<T>` 中的 `T`
    pub target: Type,
    /// 是否必需
    pub required: bool,
}

fn autowired_fields(input: &DeriveInput) -> Result<Vec<AutowiredField>> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(&input.ident, "#[derive(Component)] 只能用于结构体"));
    };
    let Fields::Named(fields) = &data.fields else {
        return Ok(Vec::new());
    };

    let mut result = Vec::new();
    for field in &fields.named {
        let Some(attr) = find_attribute(&field.attrs, "autowired") else {
            continue;
        };
        let Some(ident) = field.ident.clone() else {
            continue;
        };

        let mut required = true;
        if matches!(attr.meta, syn::Meta::List(_)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("required") {
                    let value: LitBool = meta.value()?.parse()?;
                    required = value.value;
                    Ok(())
                } else {
                    Err(meta.error("未知的 autowired 参数，可用: required"))
                }
            })?;
        }

        let target = is_type_named(&field.ty, "Autowired")
            .then(|| extract_generic_type(&field.ty))
            .flatten()
            .ok_or_else(|| Error::new_spanned(&field.ty, "#[autowired] 字段类型必须是 Autowired<T>"))?;

        result.push(AutowiredField {
            ident,
            target: target.clone(),
            required,
        });
    }
    Ok(result)
}

/// 展开 `#[derive(Component)]`
pub fn expand(input: &DeriveInput) -> Result<TokenStream> {
    reject_generics(input, "Component")?;

    let struct_name = &input.ident;
    let args = ComponentArgs::from_input(input)?;
    let scope = match find_attribute(&input.attrs, "scope") {
        Some(attr) => parse_string_arg(attr)?,
        None => "singleton".to_string(),
    };
    let fields = autowired_fields(input)?;

    let provides = &args.provides;
    let field_idents: Vec<&Ident> = fields.iter().map(|f| &f.ident).collect();
    let field_names: Vec<String> = fields.iter().map(|f| f.ident.to_string()).collect();
    let field_targets: Vec<&Type> = fields.iter().map(|f| &f.target).collect();
    let field_required: Vec<bool> = fields.iter().map(|f| f.required).collect();

    let aware_impl = args.aware.then(|| {
        quote! {
            fn as_bean_name_aware(&mut self) -> ::std::option::Option<&mut dyn ::infrastructure_common::BeanNameAware> {
                ::std::option::Option::Some(self)
            }
        }
    });
    let initializing_impl = args.initializing.then(|| {
        quote! {
            fn as_initializing_bean(&self) -> ::std::option::Option<&dyn ::infrastructure_common::InitializingBean> {
                ::std::option::Option::Some(self)
            }
        }
    });
    let inject_impl = (!fields.is_empty()).then(|| {
        quote! {
            fn inject(
                &mut self,
                field: &str,
                dependency: &::infrastructure_common::Bean,
            ) -> ::std::result::Result<(), ::infrastructure_common::InjectionError> {
                match field {
                    #( #field_names => self.#field_idents.inject(field, dependency), )*
                    _ => ::std::result::Result::Err(::infrastructure_common::InjectionError::UnknownField {
                        type_name: ::std::any::type_name::<Self>(),
                        field: field.to_string(),
                    }),
                }
            }
        }
    });

    let name = &args.name;
    let register_fn = registration_ident("component", struct_name);

    Ok(quote! {
        impl ::infrastructure_common::Component for #struct_name {
            fn type_info(&self) -> ::infrastructure_common::TypeInfo {
                ::infrastructure_common::TypeInfo::of::<Self>()
            }

            fn query(
                self: ::std::sync::Arc<Self>,
                target: ::std::any::TypeId,
            ) -> ::std::option::Option<::std::boxed::Box<dyn ::std::any::Any + Send + Sync>> {
                if target == ::std::any::TypeId::of::<Self>() {
                    return ::std::option::Option::Some(::std::boxed::Box::new(self));
                }
                #(
                    if target == ::std::any::TypeId::of::<#provides>() {
                        return ::std::option::Option::Some(
                            ::std::boxed::Box::new(self as ::std::sync::Arc<#provides>),
                        );
                    }
                )*
                ::std::option::Option::None
            }

            #inject_impl
            #aware_impl
            #initializing_impl
        }

        #[::ctor::ctor]
        fn #register_fn() {
            ::infrastructure_common::register_catalog_entry(
                ::infrastructure_common::CatalogEntry::component(
                    ::std::module_path!(),
                    ::infrastructure_common::ComponentDescriptor::new::<#struct_name>()
                        .with_name(#name)
                        .with_scope(#scope)
                        #( .provides::<#provides>() )*
                        #(
                            .with_injection_point(
                                ::infrastructure_common::InjectionPoint::new::<#field_targets>(#field_names)
                                    .with_required(#field_required),
                            )
                        )*,
                ),
            );
        }
    })
}
