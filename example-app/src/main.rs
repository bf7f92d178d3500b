//! # 示例应用程序
//!
//! 演示组件扫描、字段注入、生命周期回调和后处理器代理

mod logging;
mod service;

use anyhow::Context;
use clap::Parser;
use di_abstractions::{BeanFactory, ContainerConfig};
use di_impl::ApplicationContext;
use infrastructure_common::Configuration;
use logging::{parse_log_level, LoggingConfig};
use service::{AppConfig, UserService};
use std::path::Path;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "IoC 容器示例应用")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "config/app.toml")]
    config: String,

    /// 要获取的 Bean 名称
    #[arg(short, long, default_value = "userService")]
    bean: String,

    /// 日志级别，未指定时使用预设级别
    #[arg(long)]
    log_level: Option<String>,

    /// 使用生产环境日志格式（JSON）
    #[arg(long)]
    production: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging_config(&args).init()?;

    info!("启动 IoC 示例应用");

    let config = load_config(&args.config)?;
    let context = ApplicationContext::from_config(&config).context("容器启动失败")?;

    let stats = context.stats();
    info!(
        "已注册 {} 个 Bean 定义（单例 {}，原型 {}），{} 个后处理器",
        stats.registered_definitions,
        stats.singleton_definitions,
        stats.prototype_definitions,
        stats.post_processors
    );
    for name in context.bean_definition_names() {
        let scope = if context.is_singleton(&name)? { "singleton" } else { "prototype" };
        info!("Bean: {} ({})", name, scope);
    }

    let user_service = context
        .get_bean_as::<dyn UserService>(&args.bean)
        .with_context(|| format!("获取 {} 失败", args.bean))?;
    info!("{}", user_service.describe());
    info!("{}", user_service.place_order("lsh", "键盘"));

    let again = context.get_bean(&args.bean)?;
    info!(
        "再次获取 {}: 同一实例 = {}",
        args.bean,
        again.ptr_eq(&context.get_bean(&args.bean)?)
    );

    info!("应用已退出");
    Ok(())
}

/// 按命令行选择日志预设，显式指定级别时覆盖预设级别
fn logging_config(args: &Args) -> LoggingConfig {
    let logging = if args.production {
        LoggingConfig::production()
    } else {
        LoggingConfig::development()
    };
    match args.log_level.as_deref() {
        Some(level) => logging.with_level(parse_log_level(level)),
        None => logging,
    }
}

/// 读取容器配置，文件不存在时使用 [`AppConfig`] 声明的扫描路径
fn load_config(path: &str) -> anyhow::Result<ContainerConfig> {
    if Path::new(path).exists() {
        info!("加载配置文件: {}", path);
        return ContainerConfig::load(path).with_context(|| format!("读取配置文件 {path} 失败"));
    }

    info!("配置文件不存在，使用默认扫描路径");
    Ok(ContainerConfig {
        component_scan: AppConfig::component_scan(),
    })
}
