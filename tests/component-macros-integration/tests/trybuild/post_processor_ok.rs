use component_macros::Configuration;
use infrastructure_common::Configuration as _;

mod processors {
    use component_macros::BeanPostProcessor;

    #[derive(Debug, Default, BeanPostProcessor)]
    pub struct NoopPostProcessor;

    impl infrastructure_common::BeanPostProcessor for NoopPostProcessor {
        fn name(&self) -> &str {
            "NoopPostProcessor"
        }
    }
}

#[derive(Configuration)]
#[component_scan("app.processors")]
struct AppConfig;

fn main() {
    assert_eq!(AppConfig::component_scan().normalized_path(), "app::processors");

    let catalog = infrastructure_common::ComponentCatalog::global();
    assert!(catalog
        .entries()
        .iter()
        .any(|entry| entry.type_info.short_name() == "NoopPostProcessor"));
}
