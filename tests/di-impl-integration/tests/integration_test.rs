//! 应用上下文的集中集成测试：错误路径、扫描规则和并发访问

use di_abstractions::{BeanFactory, ComponentScanner};
use di_impl::{ApplicationContext, CatalogScanner};
use infrastructure_common::{
    Autowired, Bean, BeanPostProcessor, BoxError, CatalogEntry, Component, ComponentCatalog,
    ComponentDescriptor, ComponentScan, ContainerError, DependencyError, InitializingBean,
    InjectionError, ResolutionError, TypeInfo,
};
use std::any::{Any, TypeId};
use std::sync::Arc;
use std::thread;

/// 生成只包含注入字段的测试组件
macro_rules! component {
    ($name:ident [$($iface:ty),*] { $($field:ident : $target:ty),* $(,)? }) => {
        #[derive(Debug, Default)]
        struct $name {
            $($field: Autowired<$target>,)*
        }

        impl Component for $name {
            fn type_info(&self) -> TypeInfo {
                TypeInfo::of::<Self>()
            }

            fn query(self: Arc<Self>, target: TypeId) -> Option<Box<dyn Any + Send + Sync>> {
                if target == TypeId::of::<Self>() {
                    return Some(Box::new(self));
                }
                $(
                    if target == TypeId::of::<$iface>() {
                        return Some(Box::new(self as Arc<$iface>));
                    }
                )*
                None
            }

            #[allow(unused_variables)]
            fn inject(&mut self, field: &str, dependency: &Bean) -> Result<(), InjectionError> {
                match field {
                    $( stringify!($field) => self.$field.inject(field, dependency), )*
                    _ => Err(InjectionError::UnknownField {
                        type_name: self.type_info().name,
                        field: field.to_string(),
                    }),
                }
            }
        }
    };
}

trait Repository: Send + Sync {}
trait AuditSink: Send + Sync {}

component!(CycleA [] { cycle_b: CycleB });
component!(CycleB [] { cycle_a: CycleA });
component!(SelfLoop [] { self_loop: SelfLoop });
component!(MemoryRepository [dyn Repository] {});
component!(FileRepository [dyn Repository] {});
component!(RepositoryConsumer [] { repository: dyn Repository });
component!(PrimaryConsumer [] { primary: dyn Repository });
component!(ArchiveConsumer [] { archive_repository: dyn Repository });
component!(OptionalAudit [] { audit: dyn AuditSink });
component!(RequiredAudit [] { audit: dyn AuditSink });
component!(Counter [] {});

impl Repository for MemoryRepository {}
impl Repository for FileRepository {}

/// 初始化回调总是失败的组件
#[derive(Debug, Default)]
struct BrokenInit;

impl InitializingBean for BrokenInit {
    fn after_properties_set(&self) -> Result<(), BoxError> {
        Err("连接失败".into())
    }
}

impl Component for BrokenInit {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn query(self: Arc<Self>, target: TypeId) -> Option<Box<dyn Any + Send + Sync>> {
        (target == TypeId::of::<Self>()).then(|| Box::new(self) as Box<dyn Any + Send + Sync>)
    }

    fn as_initializing_bean(&self) -> Option<&dyn InitializingBean> {
        Some(self)
    }
}

/// 拒绝处理任何 Bean 的后处理器
#[derive(Debug, Default)]
struct RejectingPostProcessor;

impl BeanPostProcessor for RejectingPostProcessor {
    fn post_process_before_initialization(&self, _bean: Bean, bean_name: &str) -> Result<Bean, BoxError> {
        Err(format!("拒绝 {bean_name}").into())
    }

    fn name(&self) -> &str {
        "RejectingPostProcessor"
    }
}

fn build(entries: Vec<CatalogEntry>) -> Result<ApplicationContext, ContainerError> {
    let mut catalog = ComponentCatalog::new();
    for entry in entries {
        catalog.register(entry);
    }
    ApplicationContext::with_scanner(&CatalogScanner::new(catalog), &ComponentScan::new("app"))
}

fn entry(descriptor: ComponentDescriptor) -> CatalogEntry {
    CatalogEntry::component("app", descriptor)
}

fn dependency_error(result: Result<ApplicationContext, ContainerError>) -> DependencyError {
    match result {
        Err(ContainerError::Dependency { source }) => source,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("容器构建应当失败"),
    }
}

fn resolution_error(result: Result<ApplicationContext, ContainerError>) -> ResolutionError {
    match result {
        Err(ContainerError::Resolution { source }) => source,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("容器构建应当失败"),
    }
}

#[test]
fn test_circular_singletons_fail_construction() {
    let result = build(vec![
        entry(ComponentDescriptor::new::<CycleA>().autowired::<CycleB>("cycle_b")),
        entry(ComponentDescriptor::new::<CycleB>().autowired::<CycleA>("cycle_a")),
    ]);

    match dependency_error(result) {
        DependencyError::CircularDependency { dependency_chain } => {
            assert_eq!(dependency_chain, "cycleA -> cycleB -> cycleA");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_circular_prototype_fails_on_request() {
    let context = build(vec![entry(
        ComponentDescriptor::new::<SelfLoop>()
            .with_scope("prototype")
            .autowired::<SelfLoop>("self_loop"),
    )])
    .unwrap();

    match context.get_bean("selfLoop") {
        Err(DependencyError::CircularDependency { dependency_chain }) => {
            assert_eq!(dependency_chain, "selfLoop -> selfLoop");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_multiple_candidates_are_ambiguous() {
    let result = build(vec![
        entry(ComponentDescriptor::new::<MemoryRepository>().provides::<dyn Repository>()),
        entry(ComponentDescriptor::new::<FileRepository>().provides::<dyn Repository>()),
        entry(ComponentDescriptor::new::<RepositoryConsumer>().autowired::<dyn Repository>("repository")),
    ]);

    match dependency_error(result) {
        DependencyError::AmbiguousDependency {
            bean_name,
            candidates,
            ..
        } => {
            assert_eq!(bean_name, "repositoryConsumer");
            assert_eq!(candidates, vec!["fileRepository", "memoryRepository"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_field_name_resolves_ambiguity() {
    let context = build(vec![
        entry(
            ComponentDescriptor::new::<MemoryRepository>()
                .with_name("primary")
                .provides::<dyn Repository>(),
        ),
        entry(ComponentDescriptor::new::<FileRepository>().provides::<dyn Repository>()),
        entry(ComponentDescriptor::new::<PrimaryConsumer>().autowired::<dyn Repository>("primary")),
    ])
    .unwrap();

    let consumer = context.get_bean_as::<PrimaryConsumer>("primaryConsumer").unwrap();
    let primary = context.get_bean_as::<MemoryRepository>("primary").unwrap();
    assert_eq!(
        Arc::as_ptr(consumer.primary.get().unwrap()) as *const (),
        Arc::as_ptr(&primary) as *const ()
    );
}

#[test]
fn test_snake_case_field_resolves_ambiguity_by_name() {
    let context = build(vec![
        entry(
            ComponentDescriptor::new::<MemoryRepository>()
                .with_name("archiveRepository")
                .provides::<dyn Repository>(),
        ),
        entry(
            ComponentDescriptor::new::<FileRepository>()
                .with_name("backupArchiveRepository")
                .provides::<dyn Repository>(),
        ),
        entry(
            ComponentDescriptor::new::<ArchiveConsumer>()
                .autowired::<dyn Repository>("archive_repository"),
        ),
    ])
    .unwrap();

    let consumer = context.get_bean_as::<ArchiveConsumer>("archiveConsumer").unwrap();
    let archive = context.get_bean_as::<MemoryRepository>("archiveRepository").unwrap();
    assert_eq!(
        Arc::as_ptr(consumer.archive_repository.get().unwrap()) as *const (),
        Arc::as_ptr(&archive) as *const ()
    );
}

#[test]
fn test_optional_dependency_is_skipped() {
    let point = infrastructure_common::InjectionPoint::new::<dyn AuditSink>("audit").with_required(false);
    let context = build(vec![entry(
        ComponentDescriptor::new::<OptionalAudit>().with_injection_point(point),
    )])
    .unwrap();

    let bean = context.get_bean_as::<OptionalAudit>("optionalAudit").unwrap();
    assert!(!bean.audit.is_injected());
}

#[test]
fn test_missing_required_dependency_fails() {
    let result = build(vec![entry(
        ComponentDescriptor::new::<RequiredAudit>().autowired::<dyn AuditSink>("audit"),
    )]);

    match dependency_error(result) {
        DependencyError::ComponentCreationFailed { bean_name, source } => {
            assert_eq!(bean_name, "requiredAudit");
            let cause = source.downcast_ref::<DependencyError>().unwrap();
            assert!(cause.is_not_found());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_dependency_of_wrong_type_fails_injection() {
    let result = build(vec![
        entry(ComponentDescriptor::new::<Counter>().with_name("audit")),
        entry(ComponentDescriptor::new::<RequiredAudit>().autowired::<dyn AuditSink>("audit")),
    ]);

    match dependency_error(result) {
        DependencyError::ComponentCreationFailed { bean_name, source } => {
            assert_eq!(bean_name, "requiredAudit");
            assert!(matches!(
                source.downcast_ref::<DependencyError>(),
                Some(DependencyError::InjectionFailed { .. })
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_init_failure_fails_construction() {
    let result = build(vec![entry(ComponentDescriptor::new::<BrokenInit>())]);

    match dependency_error(result) {
        DependencyError::ComponentCreationFailed { bean_name, source } => {
            assert_eq!(bean_name, "brokenInit");
            assert!(matches!(
                source.downcast_ref::<DependencyError>(),
                Some(DependencyError::InitializationFailed { .. })
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_post_processor_failure_fails_construction() {
    let result = build(vec![
        entry(ComponentDescriptor::new::<Counter>()),
        CatalogEntry::post_processor::<RejectingPostProcessor>("app"),
    ]);

    match dependency_error(result) {
        DependencyError::ComponentCreationFailed { source, .. } => {
            assert!(matches!(
                source.downcast_ref::<DependencyError>(),
                Some(DependencyError::PostProcessorFailed { processor, .. }) if processor == "RejectingPostProcessor"
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_invalid_scope_fails_resolution() {
    let result = build(vec![entry(ComponentDescriptor::new::<Counter>().with_scope("request"))]);
    assert!(matches!(
        resolution_error(result),
        ResolutionError::InvalidScope { ref value, .. } if value == "request"
    ));
}

#[test]
fn test_scope_tag_is_case_insensitive() {
    let context = build(vec![entry(ComponentDescriptor::new::<Counter>().with_scope("Prototype"))]).unwrap();
    assert!(context.is_prototype("counter").unwrap());
}

#[test]
fn test_unresolvable_scan_paths() {
    let catalog = ComponentCatalog::new().with(entry(ComponentDescriptor::new::<Counter>()));
    let scanner = CatalogScanner::new(catalog);

    assert!(matches!(
        resolution_error(ApplicationContext::with_scanner(&scanner, &ComponentScan::new(""))),
        ResolutionError::EmptyScanPath
    ));
    assert!(matches!(
        resolution_error(ApplicationContext::with_scanner(&scanner, &ComponentScan::new("nowhere"))),
        ResolutionError::PathNotFound { ref path } if path == "nowhere"
    ));
}

#[test]
fn test_scan_is_single_level() {
    let catalog = ComponentCatalog::new()
        .with(CatalogEntry::component("app", ComponentDescriptor::new::<Counter>()))
        .with(CatalogEntry::component(
            "app::inner",
            ComponentDescriptor::new::<MemoryRepository>(),
        ));
    let scanner = CatalogScanner::new(catalog);

    let outer = scanner.scan(&ComponentScan::new("app")).unwrap();
    assert_eq!(outer.registry.names().collect::<Vec<_>>(), vec!["counter"]);

    let inner = scanner.scan(&ComponentScan::new("app.inner")).unwrap();
    assert_eq!(inner.registry.names().collect::<Vec<_>>(), vec!["memoryRepository"]);
}

#[test]
fn test_concurrent_requests() {
    const THREADS: usize = 16;

    let context = Arc::new(
        build(vec![
            entry(ComponentDescriptor::new::<Counter>()),
            entry(ComponentDescriptor::new::<MemoryRepository>().with_scope("prototype")),
        ])
        .unwrap(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let context = Arc::clone(&context);
            thread::spawn(move || {
                let singleton = context.get_bean("counter").unwrap();
                let prototype = context.get_bean("memoryRepository").unwrap();
                (singleton, prototype)
            })
        })
        .collect();
    let results: Vec<(Bean, Bean)> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let (first_singleton, _) = &results[0];
    assert!(results.iter().all(|(singleton, _)| singleton.ptr_eq(first_singleton)));
    for (i, (_, a)) in results.iter().enumerate() {
        for (_, b) in results.iter().skip(i + 1) {
            assert!(!a.ptr_eq(b));
        }
    }

    let stats = context.stats();
    assert_eq!(stats.active_singletons, 1);
    assert_eq!(stats.created_instances, 1 + THREADS);
}
