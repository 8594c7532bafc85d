use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::fetcher::CollectionFetcher;
use crate::backend::{Backend, MutationBody};
use crate::errors::Result;
use crate::session::Session;

/// 变更分发器
///
/// 变更成功后不在本地修改列表，而是重新获取集合。
pub struct MutationDispatcher {
    backend: Arc<dyn Backend>,
    session: Session,
}

impl MutationDispatcher {
    pub fn new(backend: Arc<dyn Backend>, session: Session) -> Self {
        Self { backend, session }
    }

    pub async fn create(&self, path: &str, body: MutationBody) -> Result<Value> {
        let created = self
            .backend
            .create(&self.session, path, body)
            .await
            .inspect_err(|e| warn!("POST {} failed: {}", path, e))?;
        info!("Created record under {}", path);
        Ok(created)
    }

    pub async fn update(&self, path: &str, body: MutationBody) -> Result<Value> {
        let updated = self
            .backend
            .update(&self.session, path, body)
            .await
            .inspect_err(|e| warn!("PATCH {} failed: {}", path, e))?;
        info!("Updated {}", path);
        Ok(updated)
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.backend
            .delete(&self.session, path)
            .await
            .inspect_err(|e| warn!("DELETE {} failed: {}", path, e))?;
        info!("Deleted {}", path);
        Ok(())
    }

    /// 删除后重新获取集合
    pub async fn delete_and_refetch<T: DeserializeOwned>(
        &self,
        item_path: &str,
        collection_path: &str,
    ) -> Result<Vec<T>> {
        self.delete(item_path).await?;
        CollectionFetcher::new(self.backend.clone(), self.session.clone())
            .fetch(collection_path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::errors::GreenSysError;
    use crate::models::kelas::entities::Kelas;
    use serde_json::json;

    fn dispatcher() -> (Arc<MemoryBackend>, MutationDispatcher) {
        let backend = Arc::new(MemoryBackend::new());
        backend.insert_collection(
            "/kelas",
            vec![
                json!({"id": 1, "namaKelas": "X A"}),
                json!({"id": 2, "namaKelas": "X B"}),
            ],
        );
        let dispatcher = MutationDispatcher::new(backend.clone(), Session::new("t"));
        (backend, dispatcher)
    }

    #[tokio::test]
    async fn test_delete_returns_refetched_collection() {
        let (_, dispatcher) = dispatcher();
        let remaining: Vec<Kelas> = dispatcher
            .delete_and_refetch("/kelas/1", "/kelas")
            .await
            .unwrap();
        assert_eq!(remaining.iter().map(|k| k.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found_and_list_intact() {
        let (backend, dispatcher) = dispatcher();
        dispatcher.delete("/kelas/2").await.unwrap();
        let err = dispatcher
            .delete_and_refetch::<Kelas>("/kelas/2", "/kelas")
            .await
            .unwrap_err();
        assert!(matches!(err, GreenSysError::NotFound(_)));
        assert_eq!(backend.collection_len("/kelas"), 1);
    }

    #[tokio::test]
    async fn test_create_then_update() {
        let (_, dispatcher) = dispatcher();
        let created = dispatcher
            .create("/kelas", MutationBody::Json(json!({"namaKelas": "X C"})))
            .await
            .unwrap();
        assert_eq!(created["id"], json!(3));

        let updated = dispatcher
            .update("/kelas/3", MutationBody::Json(json!({"namaKelas": "X D"})))
            .await
            .unwrap();
        assert_eq!(updated["namaKelas"], "X D");
    }
}
