//! 单例池

use dashmap::DashMap;
use infrastructure_common::{Bean, DependencyError};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// 单例池
///
/// 每个名称对应一个只初始化一次的槽位。并发请求同一名称时只有一个线程执行构建，
/// 其余线程等待并获得同一实例；构建失败时槽位保持为空，后续请求会重新尝试
#[derive(Debug, Default)]
pub struct SingletonPool {
    slots: DashMap<String, Arc<OnceCell<Bean>>>,
}

impl SingletonPool {
    /// 创建空的单例池
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取已完成构建的单例
    pub fn get(&self, name: &str) -> Option<Bean> {
        self.slots.get(name).and_then(|slot| slot.get().cloned())
    }

    /// 获取单例，不存在时使用 `create` 构建
    pub fn get_or_try_create<F>(&self, name: &str, create: F) -> Result<Bean, DependencyError>
    where
        F: FnOnce() -> Result<Bean, DependencyError>,
    {
        // 先取出槽位并释放分片锁，构建过程中会递归访问单例池
        let slot = self
            .slots
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();
        slot.get_or_try_init(create).cloned()
    }

    /// 是否已有完成构建的单例
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 完成构建的单例数量
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
