use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::{list_response, respond};
use crate::backend::{Backend, Resource, student_results_path};
use crate::dataflow::FetchFallback;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::nilai::entities::Nilai;
use crate::session::Session;

/// 测验成绩；获取失败时返回空列表并提示
pub struct ResultService {
    backend: Option<Arc<dyn Backend>>,
}

impl ResultService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    // 全部学生的成绩
    pub async fn list_all_results(
        &self,
        session: Session,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        respond(
            self.list(session, Resource::AllResults.path(), params, request)
                .await,
        )
    }

    // 单个学生的成绩
    pub async fn list_student_results(
        &self,
        session: Session,
        siswa_id: &str,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        respond(
            self.list(session, &student_results_path(siswa_id), params, request)
                .await,
        )
    }

    async fn list(
        &self,
        session: Session,
        path: &str,
        params: ListParams,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        let backend = self.get_backend(request)?;
        list_response::<Nilai>(backend, session, path, params, FetchFallback::Empty).await
    }
}
