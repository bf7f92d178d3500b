//! 派生宏的集中集成测试

use component_macros::Configuration;
use di_abstractions::BeanFactory;
use di_impl::ApplicationContext;
use infrastructure_common::Configuration as _;
use infrastructure_common::{ContainerError, ResolutionError};
use std::sync::atomic::Ordering;

mod shop {
    use component_macros::{BeanPostProcessor, Component};
    use infrastructure_common::{Autowired, Bean, BeanNameAware, BoxError, InitializingBean};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    pub trait OrderService: Send + Sync {
        fn place_order(&self, item: &str) -> String;
    }

    pub trait UserService: Send + Sync {
        fn register(&self, user: &str) -> String;
    }

    pub trait AuditLog: Send + Sync {
        fn record(&self, event: &str);
    }

    #[derive(Debug, Default, Component)]
    #[component(provides(dyn OrderService))]
    pub struct OrderServiceImpl;

    impl OrderService for OrderServiceImpl {
        fn place_order(&self, item: &str) -> String {
            format!("order:{item}")
        }
    }

    #[derive(Debug, Default, Component)]
    #[component(name = "userService", provides(dyn UserService), aware, initializing)]
    pub struct UserServiceImpl {
        pub bean_name: String,
        pub initialized: AtomicBool,
        #[autowired]
        pub order_service: Autowired<dyn OrderService>,
        #[autowired(required = false)]
        pub audit_log: Autowired<dyn AuditLog>,
    }

    impl UserService for UserServiceImpl {
        fn register(&self, user: &str) -> String {
            match self.order_service.get() {
                Some(order_service) => order_service.place_order(user),
                None => String::new(),
            }
        }
    }

    impl BeanNameAware for UserServiceImpl {
        fn set_bean_name(&mut self, name: &str) {
            self.bean_name = name.to_string();
        }
    }

    impl InitializingBean for UserServiceImpl {
        fn after_properties_set(&self) -> Result<(), BoxError> {
            self.initialized.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Debug, Default, Component)]
    #[scope("prototype")]
    pub struct ShoppingCart {
        #[autowired]
        pub order_service: Autowired<dyn OrderService>,
    }

    #[derive(Debug, Default, BeanPostProcessor)]
    pub struct CountingPostProcessor {
        processed: AtomicUsize,
    }

    impl infrastructure_common::BeanPostProcessor for CountingPostProcessor {
        fn post_process_after_initialization(&self, bean: Bean, _bean_name: &str) -> Result<Bean, BoxError> {
            self.processed.fetch_add(1, Ordering::SeqCst);
            Ok(bean)
        }
    }

    pub mod nested {
        use component_macros::Component;

        #[derive(Debug, Default, Component)]
        pub struct NestedService;
    }
}

#[derive(Configuration)]
#[component_scan("integration_tests.shop")]
struct ShopConfig;

#[derive(Configuration)]
#[component_scan("integration_tests")]
struct CrateRootConfig;

#[derive(Configuration)]
struct UnconfiguredConfig;

#[test]
fn test_configuration_derive() {
    assert_eq!(
        ShopConfig::component_scan().normalized_path(),
        "integration_tests::shop"
    );
    assert!(UnconfiguredConfig::component_scan().path.is_empty());
}

#[test]
fn test_derived_components_are_registered() {
    let context = ApplicationContext::new::<ShopConfig>().unwrap();

    assert_eq!(
        context.bean_definition_names(),
        vec!["orderServiceImpl", "shoppingCart", "userService"]
    );
    assert!(!context.contains_bean("nestedService"));
    assert_eq!(context.stats().post_processors, 1);
}

#[test]
fn test_derived_injection_and_lifecycle() {
    let context = ApplicationContext::new::<ShopConfig>().unwrap();

    let user_service = context.get_bean_as::<shop::UserServiceImpl>("userService").unwrap();
    assert_eq!(user_service.bean_name, "userService");
    assert!(user_service.initialized.load(Ordering::SeqCst));
    assert!(user_service.order_service.is_injected());
    assert!(!user_service.audit_log.is_injected());

    let typed = context.get_bean_as::<dyn shop::UserService>("userService").unwrap();
    assert_eq!(typed.register("alice"), "order:alice");
}

#[test]
fn test_derived_scope() {
    let context = ApplicationContext::new::<ShopConfig>().unwrap();

    assert!(context.is_prototype("shoppingCart").unwrap());
    let first = context.get_bean("shoppingCart").unwrap();
    let second = context.get_bean("shoppingCart").unwrap();
    assert!(!first.ptr_eq(&second));

    let cart = first.downcast_arc::<shop::ShoppingCart>().unwrap();
    assert!(cart.order_service.is_injected());
}

#[test]
fn test_namespace_without_own_components_is_empty() {
    let context = ApplicationContext::new::<CrateRootConfig>().unwrap();
    assert!(context.bean_definition_names().is_empty());
}

#[test]
fn test_missing_scan_path_fails() {
    let result = ApplicationContext::new::<UnconfiguredConfig>();
    assert!(matches!(
        result,
        Err(ContainerError::Resolution {
            source: ResolutionError::EmptyScanPath
        })
    ));
}
