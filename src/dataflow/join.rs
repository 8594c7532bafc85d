use std::fmt;

use serde::de::DeserializeOwned;
use tracing::warn;

use super::fetcher::CollectionFetcher;
use super::scope::FetchScope;
use crate::errors::GreenSysError;

/// 合并的一侧：名称（用于报告失败）与上游路径
#[derive(Debug, Clone, Copy)]
pub struct JoinSide<'a> {
    pub name: &'a str,
    pub path: &'a str,
}

impl<'a> JoinSide<'a> {
    pub fn new(name: &'a str, path: &'a str) -> Self {
        Self { name, path }
    }
}

/// 合并失败，记录失败的一侧或两侧
#[derive(Debug, Clone, PartialEq)]
pub struct JoinError {
    pub failures: Vec<(String, GreenSysError)>,
}

impl JoinError {
    pub fn failed_sides(&self) -> Vec<String> {
        self.failures.iter().map(|(name, _)| name.clone()).collect()
    }

    /// 会话失效优先；否则合并为一个说明失败来源的错误
    pub fn into_error(self) -> GreenSysError {
        if let Some((_, err)) = self.failures.iter().find(|(_, e)| e.is_session_expired()) {
            return err.clone();
        }
        GreenSysError::join_failed(self.to_string())
    }
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail: Vec<String> = self
            .failures
            .iter()
            .map(|(name, err)| format!("{name} ({})", err.user_message()))
            .collect();
        write!(f, "Failed to load {}", detail.join(", "))
    }
}

/// 并发获取两个集合，两者都成功后返回
pub async fn join_collections<A, B>(
    fetcher: &CollectionFetcher,
    scope: &FetchScope,
    left: JoinSide<'_>,
    right: JoinSide<'_>,
) -> Result<(Vec<A>, Vec<B>), JoinError>
where
    A: DeserializeOwned + Send + 'static,
    B: DeserializeOwned + Send + 'static,
{
    let left_fetch = fetcher.spawn_fetch::<A>(scope, left.path);
    let right_fetch = fetcher.spawn_fetch::<B>(scope, right.path);
    let (left_result, right_result) = tokio::join!(left_fetch.join(), right_fetch.join());

    match (left_result, right_result) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (left_result, right_result) => {
            let failures: Vec<(String, GreenSysError)> = [
                (left.name, left_result.err()),
                (right.name, right_result.err()),
            ]
            .into_iter()
            .filter_map(|(name, err)| err.map(|e| (name.to_string(), e)))
            .collect();
            let err = JoinError { failures };
            warn!("{}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::models::kelas::entities::Kelas;
    use crate::models::siswa::entities::Siswa;
    use crate::session::Session;
    use serde_json::json;
    use std::sync::Arc;

    const KELAS: JoinSide<'static> = JoinSide {
        name: "kelas",
        path: "/kelas",
    };
    const SISWA: JoinSide<'static> = JoinSide {
        name: "siswa",
        path: "/siswa",
    };

    fn backend() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.insert_collection("/kelas", vec![json!({"id": 1, "namaKelas": "X A"})]);
        backend.insert_collection(
            "/siswa",
            vec![json!({"id": 10, "nama": "Sari", "gender": "P", "kelasId": 1})],
        );
        backend
    }

    async fn run(backend: MemoryBackend) -> Result<(Vec<Kelas>, Vec<Siswa>), JoinError> {
        let fetcher = CollectionFetcher::new(Arc::new(backend), Session::new("t"));
        let scope = FetchScope::new();
        join_collections(&fetcher, &scope, KELAS, SISWA).await
    }

    #[tokio::test]
    async fn test_both_sides_succeed() {
        let (kelas, siswa) = run(backend()).await.unwrap();
        assert_eq!(kelas.len(), 1);
        assert_eq!(siswa.len(), 1);
    }

    #[tokio::test]
    async fn test_reports_failing_side() {
        let backend = backend();
        backend.fail_path("/siswa", GreenSysError::server_fault("boom"));
        let err = run(backend).await.unwrap_err();
        assert_eq!(err.failed_sides(), vec!["siswa".to_string()]);
        assert!(matches!(err.into_error(), GreenSysError::JoinFailed(msg) if msg.contains("siswa")));
    }

    #[tokio::test]
    async fn test_reports_both_sides() {
        let backend = backend();
        backend.fail_path("/kelas", GreenSysError::network("down"));
        backend.fail_path("/siswa", GreenSysError::server_fault("boom"));
        let err = run(backend).await.unwrap_err();
        assert_eq!(err.failed_sides(), vec!["kelas".to_string(), "siswa".to_string()]);
    }

    #[tokio::test]
    async fn test_session_expiry_takes_precedence() {
        let backend = backend();
        backend.fail_path("/kelas", GreenSysError::server_fault("boom"));
        backend.fail_path("/siswa", GreenSysError::session_expired("401"));
        let err = run(backend).await.unwrap_err().into_error();
        assert!(err.is_session_expired());
    }
}
