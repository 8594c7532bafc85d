use std::future::Future;
use std::sync::Mutex;

use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use crate::errors::{GreenSysError, Result};

/// 与请求生命周期绑定的获取作用域，被丢弃时中止所有未完成的任务
#[derive(Default)]
pub struct FetchScope {
    handles: Mutex<Vec<AbortHandle>>,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F, T>(&self, fut: F) -> ScopedFetch<T>
    where
        F: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        let handle = tokio::spawn(fut);
        self.handles
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(handle.abort_handle());
        ScopedFetch { handle }
    }

    pub fn abort_all(&self) {
        let handles = std::mem::take(
            &mut *self
                .handles
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        );
        let pending = handles.iter().filter(|h| !h.is_finished()).count();
        if pending > 0 {
            debug!("Aborting {} in-flight fetch(es)", pending);
        }
        for handle in handles {
            handle.abort();
        }
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// 作用域内的一次获取
pub struct ScopedFetch<T> {
    handle: JoinHandle<Result<T>>,
}

impl<T> ScopedFetch<T> {
    pub async fn join(self) -> Result<T> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(GreenSysError::cancelled("fetch aborted")),
            Err(e) => Err(GreenSysError::join_failed(format!("fetch task panicked: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_join_returns_task_result() {
        let scope = FetchScope::new();
        let fetch = scope.spawn(async { Ok(42) });
        assert_eq!(fetch.join().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_dropping_scope_aborts_pending_fetch() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let scope = FetchScope::new();
        let fetch = scope.spawn(async move {
            tokio::time::sleep(Duration::from_secs(30)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });
        drop(scope);

        let err = fetch.join().await.unwrap_err();
        assert!(matches!(err, GreenSysError::Cancelled(_)));
        assert!(!finished.load(Ordering::SeqCst));
    }
}
