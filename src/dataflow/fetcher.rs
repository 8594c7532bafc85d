use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::scope::{FetchScope, ScopedFetch};
use crate::backend::{Backend, collection_items, single_record};
use crate::errors::{GreenSysError, Result};
use crate::session::Session;

/// 获取失败时列表视图的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFallback {
    /// 返回映射后的错误
    Propagate,
    /// 返回空视图并附带提示；会话失效仍然返回错误
    Empty,
}

/// 集合获取器：一次带令牌的 GET，解码为实体列表
#[derive(Clone)]
pub struct CollectionFetcher {
    backend: Arc<dyn Backend>,
    session: Session,
}

impl CollectionFetcher {
    pub fn new(backend: Arc<dyn Backend>, session: Session) -> Self {
        Self { backend, session }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let raw = self.backend.get(&self.session, path).await.inspect_err(|e| {
            warn!("Failed to fetch {}: {}", path, e);
        })?;
        let items = decode_collection(path, raw)?;
        debug!("Fetched {} record(s) from {}", items.len(), path);
        Ok(items)
    }

    /// 原始 JSON，不做解码（资料页等透传场景）
    pub async fn fetch_raw(&self, path: &str) -> Result<Value> {
        self.backend.get(&self.session, path).await.inspect_err(|e| {
            warn!("Failed to fetch {}: {}", path, e);
        })
    }

    /// 单条记录；`identity_key` 用于区分裸对象与 `data` 包装
    pub async fn fetch_one<T: DeserializeOwned>(&self, path: &str, identity_key: &str) -> Result<T> {
        let record = single_record(self.fetch_raw(path).await?, identity_key)?;
        serde_json::from_value(record)
            .map_err(|e| GreenSysError::serialization(format!("{path}: {e}")))
    }

    /// 在作用域内并发获取
    pub fn spawn_fetch<T>(&self, scope: &FetchScope, path: impl Into<String>) -> ScopedFetch<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let fetcher = self.clone();
        let path = path.into();
        scope.spawn(async move { fetcher.fetch::<T>(&path).await })
    }
}

/// 解码集合；无法解码的单条记录被跳过并记录日志，不影响整个列表
pub fn decode_collection<T: DeserializeOwned>(path: &str, raw: Value) -> Result<Vec<T>> {
    let items = collection_items(raw)?;
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping record #{} from {}: {}", index, path, e);
                None
            }
        })
        .collect();
    if decoded.len() < total {
        warn!(
            "Decoded {} of {} record(s) from {}",
            decoded.len(),
            total,
            path
        );
    }
    Ok(decoded)
}
