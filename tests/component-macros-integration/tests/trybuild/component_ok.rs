use di_abstractions::BeanFactory;
use di_impl::ApplicationContext;
use infrastructure_common::ComponentScan;

mod greeting {
    use component_macros::Component;
    use infrastructure_common::Autowired;

    pub trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    #[derive(Debug, Default, Component)]
    #[component(provides(dyn Greeter))]
    pub struct EnglishGreeter;

    impl Greeter for EnglishGreeter {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    #[derive(Debug, Default, Component)]
    #[component(name = "reception")]
    #[scope("prototype")]
    pub struct Reception {
        #[autowired]
        pub greeter: Autowired<dyn Greeter>,
    }

    pub fn scan_path() -> &'static str {
        module_path!()
    }
}

fn main() {
    let context = ApplicationContext::from_component_scan(&ComponentScan::new(greeting::scan_path())).unwrap();

    let greeter = context.get_bean_as::<dyn greeting::Greeter>("englishGreeter").unwrap();
    assert_eq!(greeter.greet(), "hello");

    let reception = context.get_bean_as::<greeting::Reception>("reception").unwrap();
    assert_eq!(reception.greeter.get().unwrap().greet(), "hello");
}
